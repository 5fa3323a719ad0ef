//! User-list page: fetch lifecycle, active-only filter, add/delete actions.

use leptos::prelude::*;

use crate::components::add_user_form::AddUserForm;
use crate::components::user_table::UserTable;
use crate::net::types::UserDraft;
use crate::state::users::UsersState;

/// Notice shown when a delete targets a remote row.
pub const DELETE_REJECTED_MESSAGE: &str =
    "Solo se pueden eliminar usuarios agregados localmente";

/// Confirmation prompt shown before deleting a local row.
pub const DELETE_CONFIRM_MESSAGE: &str = "¿Eliminar este usuario?";

/// Ask the user to confirm a deletion. Declining (or no browser) means no.
#[cfg(feature = "csr")]
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(DELETE_CONFIRM_MESSAGE).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(not(feature = "csr"))]
fn confirm_delete() -> bool {
    false
}

/// User-list page. Owns one [`UsersState`] instance for its lifetime;
/// fetches on mount and on every active-only toggle change.
#[component]
pub fn UsersPage() -> impl IntoView {
    let state = RwSignal::new(UsersState::default());
    let notice = RwSignal::new(String::new());

    // Issue a fetch for the current filter. Each call takes a fresh
    // generation token so a late response from an older call is discarded.
    let load = move || {
        let Some(seq) = state.try_update(UsersState::begin_fetch) else {
            return;
        };
        let active_only = state.with_untracked(|s| s.active_only);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users(active_only).await;
            if let Err(e) = &result {
                log::error!("user fetch failed: {e}");
            }
            state.update(|s| {
                s.finish_fetch(seq, result);
            });
        });

        #[cfg(not(feature = "csr"))]
        let _ = (seq, active_only);
    };

    // Initial load on mount.
    load();

    let on_toggle = move |ev: leptos::ev::Event| {
        state.update(|s| s.active_only = event_target_checked(&ev));
        load();
    };

    let on_add = Callback::new(move |draft: UserDraft| {
        state.update(|s| {
            s.add_user(draft);
        });
    });

    let on_delete = Callback::new(move |id: u64| {
        if !state.with_untracked(|s| s.is_local(id)) {
            notice.set(DELETE_REJECTED_MESSAGE.to_owned());
            return;
        }
        if !confirm_delete() {
            return;
        }
        state.update(|s| {
            let _ = s.delete_local(id);
        });
        notice.set(String::new());
    });

    let rows = Signal::derive(move || state.with(UsersState::rows));
    let form_open = Signal::derive(move || state.with(|s| s.form_open));
    let open_form = move |_| state.update(|s| s.form_open = true);
    let close_form = Callback::new(move |()| state.update(|s| s.form_open = false));

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>"Listado de usuarios"</h1>
                <div class="users-page__controls">
                    <label class="users-page__filter">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.active_only)
                            on:change=on_toggle
                        />
                        "Solo activos"
                    </label>
                    <button class="btn btn--primary" on:click=open_form>
                        "+ Agregar Usuario"
                    </button>
                </div>
            </header>

            <Show when=move || !notice.get().is_empty()>
                <p class="users-page__notice">{move || notice.get()}</p>
            </Show>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="users-page__error">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p class="users-page__loading">"Cargando usuarios..."</p> }
            >
                <UserTable rows=rows on_delete=on_delete/>
            </Show>

            <AddUserForm open=form_open on_add=on_add on_close=close_form/>
        </div>
    }
}
