//! Parameter Form Component
//!
//! Collects the record query parameters and submits them to the record library.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::WasmRecordLibrary;
use crate::components::FieldInput;
use crate::context::LibraryContext;
use crate::fields::FIELDS;
use crate::models::{FormState, LibraryStatus};
use crate::scan_range::ScanRange;
use crate::submit::{ensure_ready, submit};

/// Form for requesting records. State is fresh on every mount and kept across submissions.
/// Submitting after a failed library init retries the init first.
#[component]
pub fn ParameterForm() -> impl IntoView {
    let ctx = use_context::<LibraryContext>().expect("LibraryContext should be provided");
    let state = RwSignal::new(FormState::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = state.get_untracked();
        let status = ctx.status.get_untracked();
        // Each submission runs on its own; outcomes are logged inside `submit`
        spawn_local(async move {
            let retried = matches!(status, LibraryStatus::Failed(_));
            let status = ensure_ready(&WasmRecordLibrary, status, log::logger()).await;
            if retried {
                ctx.set_status(status.clone());
            }
            submit(&WasmRecordLibrary, &status, &snapshot, log::logger()).await.ok();
        });
    };

    let range_hint = move || {
        state.with(|s| {
            if !s.invalid.is_empty() {
                return (true, "Block bounds must be non-negative whole numbers".to_string());
            }
            match ScanRange::resolve(s.start, s.end, s.last) {
                Ok(range) => (false, range.to_string()),
                Err(e) => (true, e.to_string()),
            }
        })
    };

    view! {
        <form class="parameter-form" on:submit=on_submit>
            {FIELDS.iter().map(|spec| view! {
                <FieldInput spec=spec state=state />
            }).collect_view()}

            <p class=move || if range_hint().0 { "range-hint warn" } else { "range-hint" }>
                {move || range_hint().1}
            </p>

            <button type="submit" disabled=move || ctx.status.get().is_initializing()>
                "Submit"
            </button>
        </form>
    }
}
