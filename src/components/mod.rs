//! UI Components
//!
//! Leptos components for the contact portal.

mod input_field;
mod add_contact;
mod edit_user;
mod user_list;

pub use input_field::InputField;
pub use add_contact::AddContact;
pub use edit_user::EditUser;
pub use user_list::UserList;
