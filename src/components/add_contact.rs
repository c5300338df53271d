//! Add Contact Form
//!
//! Form for creating new contacts. The collection mutation and the
//! field clearing happen only after the backend confirms the creation;
//! on failure the draft stays populated for a retry.

use std::mem;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api::{self, ApiError};
use crate::components::InputField;
use crate::models::{Contact, ContactDraft, Field};
use crate::store;

/// Draft disposition after a create attempt resolves
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DraftState {
    Cleared,
    Retained(ContactDraft),
}

/// Collection and draft transition for a resolved create attempt.
/// Confirmation appends the locally-held draft values and clears the
/// draft; failure leaves both exactly as they were.
pub(crate) fn apply_create_outcome(
    outcome: &Result<(), ApiError>,
    users: Vec<Contact>,
    draft: ContactDraft,
) -> (Vec<Contact>, DraftState) {
    match outcome {
        Ok(()) => (
            store::append(users, draft.to_contact()),
            DraftState::Cleared,
        ),
        Err(_) => (users, DraftState::Retained(draft)),
    }
}

#[component]
pub fn AddContact(set_users: WriteSignal<Vec<Contact>>) -> impl IntoView {
    let (draft, set_draft) = signal(ContactDraft::default());

    let edit_field = move |field: Field| {
        move |value: String| set_draft.update(|d| *d = mem::take(d).with_field(field, value))
    };

    let add_contact = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        spawn_local(async move {
            let outcome = api::create_contact(&current).await;
            if let Err(err) = &outcome {
                console::error_2(&"Error adding contact:".into(), &err.to_string().into());
            }
            let mut draft_state = None;
            set_users.update(|users| {
                let (next_users, state) = apply_create_outcome(&outcome, mem::take(users), current);
                *users = next_users;
                draft_state = Some(state);
            });
            // Written only on confirmation; a failed attempt must not
            // clobber text entered while the request was in flight.
            if draft_state == Some(DraftState::Cleared) {
                set_draft.set(ContactDraft::default());
            }
        });
    };

    view! {
        <form class="add-contact-form" on:submit=add_contact>
            <InputField
                name="name"
                placeholder="Enter a name..."
                required=true
                value=Signal::derive(move || draft.get().name)
                on_change=edit_field(Field::Name)
            />
            <InputField
                name="address"
                placeholder="Enter an address..."
                required=true
                value=Signal::derive(move || draft.get().address)
                on_change=edit_field(Field::Address)
            />
            <InputField
                name="phone"
                placeholder="Enter a phone number..."
                required=true
                value=Signal::derive(move || draft.get().phone)
                on_change=edit_field(Field::Phone)
            />
            <InputField
                name="email"
                placeholder="Enter an email..."
                required=true
                value=Signal::derive(move || draft.get().email)
                on_change=edit_field(Field::Email)
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
