//! UI Components
//!
//! Leptos components for the parameter form.

mod field_input;
mod library_status;
mod parameter_form;

pub use field_input::FieldInput;
pub use library_status::LibraryStatusLine;
pub use parameter_form::ParameterForm;
