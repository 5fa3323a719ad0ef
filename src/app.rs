//! Root application component.

use leptos::prelude::*;

use crate::pages::users::UsersPage;

/// Root component; the user list is the whole application.
#[component]
pub fn App() -> impl IntoView {
    view! { <UsersPage/> }
}
