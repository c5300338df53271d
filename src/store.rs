//! Record Collection Transforms
//!
//! Pure transforms over the contact collection. The add and edit flows
//! apply these only inside `WriteSignal::update` callbacks, so each
//! transform sees the latest collection rather than a snapshot captured
//! before the backend call suspended.

use crate::models::Contact;

/// Collection with `contact` added at the end; prior order preserved.
/// No duplicate-identifier check is performed.
pub fn append(mut users: Vec<Contact>, contact: Contact) -> Vec<Contact> {
    users.push(contact);
    users
}

/// Collection where the element whose id equals `updated.id` is replaced
/// by `updated`; all others unchanged, order preserved. Without a match
/// the collection is returned unchanged (no insertion). Records without
/// an id never match.
pub fn replace_by_id(mut users: Vec<Contact>, updated: Contact) -> Vec<Contact> {
    if updated.id.is_none() {
        return users;
    }
    if let Some(user) = users.iter_mut().find(|user| user.id == updated.id) {
        *user = updated;
    }
    users
}
