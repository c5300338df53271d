//! Edit User Panel
//!
//! Edit form over a working copy of one contact. Field edits touch only
//! the session; the collection is updated and the panel closed only once
//! the backend confirms the save. Failure leaves the session open and
//! the collection untouched.

use std::mem;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use web_sys::console;

use crate::api::{self, ApiError};
use crate::components::InputField;
use crate::models::{Contact, EditSession, Field};
use crate::store;

/// Session disposition after a save attempt resolves
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionState {
    Open(EditSession),
    Closed,
}

/// Collection and session transition for a resolved save attempt.
/// Confirmation replaces the matching record with the merged response
/// and closes the session; failure leaves the collection untouched and
/// the session open.
pub(crate) fn apply_save_outcome(
    outcome: &Result<Value, ApiError>,
    users: Vec<Contact>,
    session: EditSession,
) -> (Vec<Contact>, SessionState) {
    match outcome {
        Ok(response) => {
            let merged = session.merged_with(response);
            (store::replace_by_id(users, merged), SessionState::Closed)
        }
        Err(_) => (users, SessionState::Open(session)),
    }
}

#[component]
pub fn EditUser(
    /// Contact this session is scoped to
    user: Contact,
    set_users: WriteSignal<Vec<Contact>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (session, set_session) = signal(EditSession::from_contact(&user));

    let edit_field = move |field: Field| {
        move |value: String| set_session.update(|s| *s = s.clone().with_field(field, value))
    };

    let save = move |_| {
        let current = session.get();
        spawn_local(async move {
            // Records appended by the add flow carry no id until the next
            // fetch; saving one has no address to PUT against and resolves
            // as a failed save.
            let outcome = match current.id {
                Some(id) => api::update_contact(id, &current.to_contact()).await,
                None => Err(ApiError::Transport(
                    "record has no identifier yet".to_string(),
                )),
            };
            if let Err(err) = &outcome {
                console::error_2(&"Error saving user data:".into(), &err.to_string().into());
            }
            let mut session_state = None;
            set_users.update(|users| {
                let (next_users, state) = apply_save_outcome(&outcome, mem::take(users), current);
                *users = next_users;
                session_state = Some(state);
            });
            if session_state == Some(SessionState::Closed) {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="edit-user">
            <div class="edit-user-header">
                <h2>"Edit User"</h2>
                <button type="button" class="close-btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>

            <h3>"Edit User Information"</h3>

            <InputField
                name="name"
                label="Name"
                required=true
                value=Signal::derive(move || session.get().name)
                on_change=edit_field(Field::Name)
            />
            <InputField
                name="address"
                label="Address"
                required=true
                value=Signal::derive(move || session.get().address)
                on_change=edit_field(Field::Address)
            />
            <InputField
                name="phone"
                label="Phone"
                required=true
                value=Signal::derive(move || session.get().phone)
                on_change=edit_field(Field::Phone)
            />
            <InputField
                name="email"
                label="Email"
                required=true
                value=Signal::derive(move || session.get().email)
                on_change=edit_field(Field::Email)
            />

            <div class="edit-user-actions">
                <button type="button" class="save-btn" on:click=save>"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
