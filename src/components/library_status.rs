//! Library Status Line

use leptos::prelude::*;

use crate::context::LibraryContext;
use crate::models::LibraryStatus;

/// Shows whether the record library can take requests yet
#[component]
pub fn LibraryStatusLine() -> impl IntoView {
    let ctx = use_context::<LibraryContext>().expect("LibraryContext should be provided");

    let text = move || match ctx.status.get() {
        LibraryStatus::Initializing => "正在加载 record library...".to_string(),
        LibraryStatus::Ready => String::new(),
        LibraryStatus::Failed(reason) => format!("Record library failed to load: {}", reason),
    };
    let class = move || match ctx.status.get() {
        LibraryStatus::Failed(_) => "library-status failed",
        _ => "library-status",
    };

    view! {
        <p class=class>{text}</p>
    }
}
