//! Modal form for adding a user to the local collection.
//!
//! DESIGN
//! ======
//! The form holds its own draft signals and hands the parent a completed
//! [`UserDraft`] on submit. Submitting resets the draft and closes the
//! modal; cancelling closes without resetting, so the fields keep their
//! values until the next submit.

#[cfg(test)]
#[path = "add_user_form_test.rs"]
mod add_user_form_test;

use leptos::prelude::*;

use crate::net::types::UserDraft;

/// Split a raw comma-separated skills string into trimmed, non-empty tags.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Assemble the submission payload from the raw field values.
///
/// The submitted birthday is always the submit-time timestamp; the edited
/// date field is collected but not used here.
pub fn build_draft(
    first_name: String,
    last_name: String,
    email: String,
    status: bool,
    skills_raw: &str,
    now: String,
) -> UserDraft {
    UserDraft {
        first_name,
        last_name,
        email,
        status,
        birthday: now,
        skills: parse_skills(skills_raw),
    }
}

/// Date portion (`YYYY-MM-DD`) of an ISO 8601 timestamp.
pub fn date_part(iso: &str) -> String {
    iso.split('T').next().unwrap_or_default().to_owned()
}

/// Current time as an ISO 8601 string.
#[cfg(feature = "csr")]
fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(feature = "csr"))]
fn now_iso() -> String {
    String::new()
}

/// Today's date (`YYYY-MM-DD`), the default for the date field.
fn today() -> String {
    date_part(&now_iso())
}

/// Modal dialog for adding a new user. Renders nothing while closed.
#[component]
pub fn AddUserForm(
    /// Whether the modal is visible.
    open: Signal<bool>,
    /// Receives the completed draft on submit.
    on_add: Callback<UserDraft>,
    /// Asked to close the modal on submit or cancel.
    on_close: Callback<()>,
) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(true);
    let birthday = RwSignal::new(today());
    let skills_raw = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = build_draft(
            first_name.get(),
            last_name.get(),
            email.get(),
            status.get(),
            &skills_raw.get(),
            now_iso(),
        );
        on_add.run(draft);

        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        status.set(true);
        birthday.set(today());
        skills_raw.set(String::new());
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Agregar Nuevo Usuario"</h2>
                    <form on:submit=on_submit>
                        <label class="dialog__label">
                            "Nombre"
                            <input
                                class="dialog__input"
                                type="text"
                                required=true
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Apellido"
                            <input
                                class="dialog__input"
                                type="text"
                                required=true
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                required=true
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Fecha de nacimiento"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || birthday.get()
                                on:input=move |ev| birthday.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Habilidades (separadas por comas)"
                            <input
                                class="dialog__input"
                                type="text"
                                required=true
                                placeholder="react, javascript, typescript"
                                prop:value=move || skills_raw.get()
                                on:input=move |ev| skills_raw.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || status.get()
                                on:change=move |ev| status.set(event_target_checked(&ev))
                            />
                            "Usuario Activo"
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_close.run(())>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" type="submit">
                                "Agregar Usuario"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
