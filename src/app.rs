//! Contact Manager App
//!
//! Top-level application component.

use leptos::prelude::*;

use crate::components::UserList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <h1>"Contact Manager"</h1>
            <UserList />
        </div>
    }
}
