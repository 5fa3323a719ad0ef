//! Wire DTOs for the remote user-listing endpoint.
//!
//! DESIGN
//! ======
//! Field names are serde-renamed to camelCase so the structs mirror the
//! remote JSON payload exactly and deserialization stays schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by the remote endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric identifier, unique across the remote and local collections.
    pub id: u64,
    /// First (given) name.
    pub first_name: String,
    /// Last (family) name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Active flag; `true` renders as "Activo".
    pub status: bool,
    /// Birth date-time as an ISO 8601 string.
    pub birthday: String,
    /// Ordered skill tags, rendered comma-joined.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Avatar images associated with the user.
    #[serde(default)]
    pub avatar: Vec<AvatarEntry>,
}

/// One avatar image entry: a name and where to load it from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarEntry {
    /// Display name of the image.
    pub name: String,
    /// Image URL.
    pub url: String,
}

/// A user record as produced by the add-user form: everything except the
/// identifier and avatar, which the list state fills in on insertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: bool,
    pub birthday: String,
    pub skills: Vec<String>,
}
