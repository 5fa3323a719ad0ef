//! User-list state: remote and locally-added records, fetch lifecycle,
//! and the add/delete transitions.
//!
//! DESIGN
//! ======
//! Remote records are replaced wholesale by each successful fetch and are
//! never mutated here; local records exist only for the lifetime of the
//! page and are removed only by explicit deletion. Each row carries an
//! explicit [`Origin`] tag attached at merge time, so origin checks never
//! fall back to membership scans. Overlapping fetches are serialized by a
//! generation token: only the most recently issued request may apply its
//! result, regardless of resolution order.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::api::FetchError;
use crate::net::types::{AvatarEntry, User, UserDraft};

/// Fixed user-facing message shown when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error al cargar los usuarios";

/// Where a displayed record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Returned by the remote endpoint.
    Remote,
    /// Added through the form; lives only in this page's memory.
    Local,
}

impl Origin {
    /// Label shown in the table's origin column.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "API",
            Self::Local => "Local",
        }
    }
}

/// A user record tagged with its origin, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user: User,
    pub origin: Origin,
}

/// Why a delete request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteError {
    /// The identifier belongs to the remote collection (or to nothing);
    /// only locally-added records may be deleted.
    NotLocal,
}

/// State for the user-list page.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    /// Last successful fetch result, replaced wholesale on every re-fetch.
    pub remote: Vec<User>,
    /// Locally-added records; append-only except explicit deletion.
    pub local: Vec<User>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// User-facing fetch error, if the last fetch failed.
    pub error: Option<String>,
    /// Whether the remote query is restricted to active users.
    pub active_only: bool,
    /// Whether the add-user modal is open.
    pub form_open: bool,
    /// Generation token of the most recently issued fetch.
    fetch_seq: u64,
    /// Highest identifier ever assigned locally; never decreases, so
    /// identifiers are not reused after deletions.
    last_issued_id: u64,
}

impl UsersState {
    /// Start a fetch: flag loading, clear any stale error, and issue a new
    /// generation token. The token must be handed back to
    /// [`finish_fetch`](Self::finish_fetch) with the result.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Apply a fetch result. Returns `false` when the result was stale
    /// (a newer fetch has been issued since) and was discarded.
    ///
    /// On success the remote collection is replaced wholesale; on failure
    /// the previous remote collection is kept and a fixed user-facing
    /// message is set. Either way the loading flag clears.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<User>, FetchError>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        match result {
            Ok(users) => {
                self.remote = users;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_MESSAGE.to_owned());
            }
        }
        self.loading = false;
        true
    }

    /// The displayed collection: remote rows first, then local rows, each
    /// tagged with its origin. No deduplication is performed.
    pub fn rows(&self) -> Vec<UserRow> {
        self.remote
            .iter()
            .cloned()
            .map(|user| UserRow { user, origin: Origin::Remote })
            .chain(
                self.local
                    .iter()
                    .cloned()
                    .map(|user| UserRow { user, origin: Origin::Local }),
            )
            .collect()
    }

    /// Whether the identifier belongs to a locally-added record.
    pub fn is_local(&self, id: u64) -> bool {
        self.local.iter().any(|u| u.id == id)
    }

    /// Append a form draft to the local collection, assigning the next
    /// identifier and a placeholder avatar. Returns the assigned id.
    ///
    /// The identifier is one greater than the maximum of every identifier
    /// currently in the union and every identifier previously issued here,
    /// so an empty union yields 1 and deletions never free an id for reuse.
    pub fn add_user(&mut self, draft: UserDraft) -> u64 {
        let max_current = self
            .remote
            .iter()
            .chain(self.local.iter())
            .map(|u| u.id)
            .max()
            .unwrap_or(0);
        let id = max_current.max(self.last_issued_id) + 1;
        self.last_issued_id = id;
        self.local.push(User {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            status: draft.status,
            birthday: draft.birthday,
            skills: draft.skills,
            avatar: vec![placeholder_avatar()],
        });
        id
    }

    /// Remove a locally-added record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotLocal`] without touching any state when
    /// the identifier is not in the local collection.
    pub fn delete_local(&mut self, id: u64) -> Result<(), DeleteError> {
        let index = self
            .local
            .iter()
            .position(|u| u.id == id)
            .ok_or(DeleteError::NotLocal)?;
        self.local.remove(index);
        Ok(())
    }
}

/// Avatar attached to locally-added records.
fn placeholder_avatar() -> AvatarEntry {
    AvatarEntry {
        name: "placeholder".to_owned(),
        url: "https://via.placeholder.com/150".to_owned(),
    }
}
