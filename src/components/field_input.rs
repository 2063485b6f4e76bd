//! Field Input Component
//!
//! One labeled input bound to a single FormState field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::fields::{FieldKind, FieldSpec};
use crate::models::FormState;

/// Largest bound the record library accepts
const U32_MAX_TEXT: &str = "4294967295";

#[component]
pub fn FieldInput(spec: &'static FieldSpec, state: RwSignal<FormState>) -> impl IntoView {
    let field = spec.id;
    let is_number = spec.kind == FieldKind::Number;
    let input_type = if is_number { "number" } else { "text" };

    // The input owns its text; rewriting it from state would clobber partial numbers like "-"
    let initial = state.with_untracked(|s| s.display_value(field));

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let raw = input.value();
        state.update(|s| {
            if let Err(e) = s.update_field(field, &raw) {
                log::warn!("[FORM] {}", e);
            }
        });
    };

    view! {
        <label for=spec.name>{spec.label}</label>
        <input
            type=input_type
            id=spec.name
            name=spec.name
            placeholder=spec.placeholder
            required=spec.required
            min=is_number.then_some("0")
            step=is_number.then_some("1")
            max=is_number.then_some(U32_MAX_TEXT)
            prop:value=initial
            on:input=on_input
        />
        <br/>
        <br/>
    }
}
