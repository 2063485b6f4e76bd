//! Application Context
//!
//! Record library status shared via Leptos Context API.

use leptos::prelude::*;

use crate::models::LibraryStatus;

/// Library readiness provided to the form
#[derive(Clone, Copy)]
pub struct LibraryContext {
    /// Current library status - read
    pub status: ReadSignal<LibraryStatus>,
    /// Current library status - write
    set_status: WriteSignal<LibraryStatus>,
}

impl LibraryContext {
    pub fn new(status: (ReadSignal<LibraryStatus>, WriteSignal<LibraryStatus>)) -> Self {
        Self {
            status: status.0,
            set_status: status.1,
        }
    }

    pub fn mark_ready(&self) {
        self.set_status.set(LibraryStatus::Ready);
    }

    pub fn set_status(&self, status: LibraryStatus) {
        self.set_status.set(status);
    }

    pub fn mark_failed(&self, reason: String) {
        self.set_status.set(LibraryStatus::Failed(reason));
    }
}
