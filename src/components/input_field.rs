//! Input Field Component
//!
//! Labeled text input bound to one contact field. Reports the current
//! value on every input event; required-ness is surfaced as the input's
//! `required` attribute.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn InputField(
    /// Field name, used as the input's DOM name and label target
    name: &'static str,
    #[prop(optional, into)] label: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        {label.map(|text| view! { <label for=name>{text}</label> })}
        <input
            type="text"
            id=name
            name=name
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                on_change.run(input.value());
            }
        />
    }
}
