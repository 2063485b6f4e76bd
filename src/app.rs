//! Records Form App
//!
//! Page shell: starts the record library once and hosts the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{RecordLibrary, WasmRecordLibrary};
use crate::components::{LibraryStatusLine, ParameterForm};
use crate::config::AppConfig;
use crate::context::LibraryContext;
use crate::models::LibraryStatus;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let ctx = LibraryContext::new(signal(LibraryStatus::Initializing));
    provide_context(ctx);

    // Initialize the record library on mount; the form stays disabled until it is ready
    Effect::new(move |_| {
        spawn_local(async move {
            match WasmRecordLibrary.initialize().await {
                Ok(()) => {
                    log::info!("[LIB] Record library ready");
                    ctx.mark_ready();
                }
                Err(e) => {
                    log::error!("[LIB] {}", e);
                    ctx.mark_failed(e.to_string());
                }
            }
        });
    });

    view! {
        <div class="app">
            <h1>{config.title}</h1>
            <LibraryStatusLine />
            <ParameterForm />
        </div>
    }
}
