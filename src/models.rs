//! Frontend Models
//!
//! Data structures matching backend records, plus the transient
//! draft/session values used by the add and edit flows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contact record (matches backend)
///
/// `id` is assigned by the backend and absent before creation; it is
/// skipped on serialization so a create body carries no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// The four editable text fields of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Phone,
    Email,
}

/// In-progress creation fields, not yet persisted
///
/// Cleared to `Default` only after the backend confirms creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    /// New draft with one field replaced
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
        self
    }

    /// The record appended to the collection on successful creation.
    /// Built from the locally-held draft values; carries no identifier.
    pub fn to_contact(&self) -> Contact {
        Contact {
            id: None,
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

/// Working copy of one existing contact's fields for an open edit.
///
/// Field edits mutate only this copy; the collection is untouched until
/// a save succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: Option<u32>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl EditSession {
    /// Seed a session with a copy of every field of `contact`
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            address: contact.address.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }

    /// New session with one field replaced
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
        self
    }

    /// The full update body sent to the backend (identifier + all fields)
    pub fn to_contact(&self) -> Contact {
        Contact {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Overlay the backend's update response onto the session copy.
    ///
    /// Fields present and well-typed in `response` win; anything absent
    /// or mistyped keeps the session value.
    pub fn merged_with(&self, response: &Value) -> Contact {
        let text = |key: &str, fallback: &str| -> String {
            response
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };
        Contact {
            id: response
                .get("id")
                .and_then(Value::as_u64)
                .map(|id| id as u32)
                .or(self.id),
            name: text("name", &self.name),
            address: text("address", &self.address),
            phone: text("phone", &self.phone),
            email: text("email", &self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn john() -> Contact {
        Contact {
            id: Some(1),
            name: "John Doe".to_string(),
            address: "123 Main St".to_string(),
            phone: "555-1234".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = ContactDraft::default()
            .with_field(Field::Name, "John Doe".to_string())
            .with_field(Field::Email, "john.doe@example.com".to_string());

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "John Doe",
                "address": "",
                "phone": "",
                "email": "john.doe@example.com",
            })
        );
    }

    #[test]
    fn test_draft_to_contact_keeps_values_and_no_id() {
        let draft = ContactDraft {
            name: "John Doe".to_string(),
            address: "123 Main St".to_string(),
            phone: "555-1234".to_string(),
            email: "john.doe@example.com".to_string(),
        };

        let contact = draft.to_contact();
        assert_eq!(contact.id, None);
        assert_eq!(contact.name, "John Doe");
        assert_eq!(contact.address, "123 Main St");
        assert_eq!(contact.phone, "555-1234");
        assert_eq!(contact.email, "john.doe@example.com");
    }

    #[test]
    fn test_cleared_draft_is_all_empty() {
        let cleared = ContactDraft::default();
        assert_eq!(cleared.name, "");
        assert_eq!(cleared.address, "");
        assert_eq!(cleared.phone, "");
        assert_eq!(cleared.email, "");
    }

    #[test]
    fn test_session_seeds_every_field() {
        let session = EditSession::from_contact(&john());
        assert_eq!(session.id, Some(1));
        assert_eq!(session.name, "John Doe");
        assert_eq!(session.address, "123 Main St");
        assert_eq!(session.phone, "555-1234");
        assert_eq!(session.email, "john@example.com");
    }

    #[test]
    fn test_with_field_replaces_exactly_one_field() {
        let session =
            EditSession::from_contact(&john()).with_field(Field::Name, "New Name".to_string());
        assert_eq!(session.name, "New Name");
        assert_eq!(session.address, "123 Main St");
        assert_eq!(session.phone, "555-1234");
        assert_eq!(session.email, "john@example.com");
    }

    #[test]
    fn test_update_body_contains_id_and_all_fields() {
        let session =
            EditSession::from_contact(&john()).with_field(Field::Name, "New Name".to_string());
        let body = serde_json::to_value(session.to_contact()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "New Name",
                "address": "123 Main St",
                "phone": "555-1234",
                "email": "john@example.com",
            })
        );
    }

    #[test]
    fn test_merge_prefers_response_fields() {
        let session = EditSession::from_contact(&john());
        let response = json!({
            "id": 1,
            "name": "New Name",
            "address": "Updated Address",
            "phone": "555-5678",
            "email": "new@example.com",
        });

        let merged = session.merged_with(&response);
        assert_eq!(
            merged,
            Contact {
                id: Some(1),
                name: "New Name".to_string(),
                address: "Updated Address".to_string(),
                phone: "555-5678".to_string(),
                email: "new@example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_merge_keeps_session_values_for_missing_fields() {
        let session = EditSession::from_contact(&john());
        let merged = session.merged_with(&json!({ "name": "New Name" }));
        assert_eq!(merged.id, Some(1));
        assert_eq!(merged.name, "New Name");
        assert_eq!(merged.address, "123 Main St");
        assert_eq!(merged.phone, "555-1234");
        assert_eq!(merged.email, "john@example.com");
    }

    #[test]
    fn test_merge_ignores_mistyped_fields() {
        let session = EditSession::from_contact(&john());
        let merged = session.merged_with(&json!({ "name": 42, "id": "nope" }));
        assert_eq!(merged.name, "John Doe");
        assert_eq!(merged.id, Some(1));
    }
}
