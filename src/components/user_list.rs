//! User List
//!
//! Owns the contact collection and the single edit slot. The add and
//! edit flows receive only the write half of the collection signal and
//! mutate it through the pure transforms in `store`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api;
use crate::components::{AddContact, EditUser};
use crate::models::Contact;

#[component]
pub fn UserList() -> impl IntoView {
    let (users, set_users) = signal(Vec::<Contact>::new());
    // At most one open edit session; opening another replaces it.
    let (editing, set_editing) = signal::<Option<Contact>>(None);

    // Seed the collection from the backend on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_contacts().await {
                Ok(loaded) => set_users.set(loaded),
                Err(err) => {
                    console::error_2(&"Error fetching contacts:".into(), &err.to_string().into());
                }
            }
        });
    });

    let close_editor = Callback::new(move |_: ()| set_editing.set(None));

    view! {
        <div class="user-portal">
            <AddContact set_users=set_users />

            <ul class="user-list">
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let open = user.clone();
                            view! {
                                <li class="user-row">
                                    <span class="user-name">{user.name.clone()}</span>
                                    <span class="user-address">{user.address.clone()}</span>
                                    <span class="user-phone">{user.phone.clone()}</span>
                                    <span class="user-email">{user.email.clone()}</span>
                                    <button
                                        type="button"
                                        class="edit-btn"
                                        on:click=move |_| set_editing.set(Some(open.clone()))
                                    >
                                        "Edit"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            {move || {
                editing.get().map(|user| {
                    view! { <EditUser user=user set_users=set_users on_close=close_editor /> }
                })
            }}
        </div>
    }
}
