//! Table rendering the merged user collection.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::state::users::{Origin, UserRow};

/// Localized label for the active-status column.
pub const fn status_label(active: bool) -> &'static str {
    if active { "Activo" } else { "Inactivo" }
}

/// Comma-joined skills for the skills column.
pub fn skills_label(skills: &[String]) -> String {
    skills.join(", ")
}

/// Table of users with origin labels and a delete action on local rows.
#[component]
pub fn UserTable(
    /// Merged rows to display, remote first.
    rows: Signal<Vec<UserRow>>,
    /// Receives the identifier of the row whose delete button was clicked.
    on_delete: Callback<u64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=move || view! { <p class="user-table__empty">"No hay usuarios."</p> }
        >
            <div class="user-table__wrap">
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Nombre"</th>
                            <th>"Apellido"</th>
                            <th>"Email"</th>
                            <th>"Estado"</th>
                            <th>"Habilidades"</th>
                            <th>"Origen"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let id = row.user.id;
                                    let origin = row.origin;
                                    let is_local = origin == Origin::Local;
                                    view! {
                                        <tr>
                                            <td class="user-table__mono">{id.to_string()}</td>
                                            <td>{row.user.first_name}</td>
                                            <td>{row.user.last_name}</td>
                                            <td>{row.user.email}</td>
                                            <td>{status_label(row.user.status)}</td>
                                            <td>{skills_label(&row.user.skills)}</td>
                                            <td>{origin.label()}</td>
                                            <td>
                                                <Show
                                                    when=move || is_local
                                                    fallback=move || {
                                                        view! { <span class="user-table__na">"—"</span> }
                                                    }
                                                >
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(id)
                                                    >
                                                        "Eliminar"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
