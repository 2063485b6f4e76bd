//! Frontend Models
//!
//! Form state, the parameter record handed to the record library, and
//! what comes back.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{FieldError, RecordsError};
use crate::fields::{parse_bound, FieldId};

/// Values currently held by the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Stored verbatim; empty means "not provided" at call time
    pub private_key: String,
    pub view_key: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub last: Option<u32>,
    pub endpoint: String,
    /// Bound fields whose current text did not parse
    pub invalid: HashSet<FieldId>,
}

impl FormState {
    pub fn set_private_key(&mut self, raw: &str) {
        self.private_key = raw.to_string();
    }

    pub fn set_view_key(&mut self, raw: &str) {
        self.view_key = raw.to_string();
    }

    pub fn set_endpoint(&mut self, raw: &str) {
        self.endpoint = raw.to_string();
    }

    /// Invalid input clears the bound and marks the field invalid until corrected
    pub fn set_start(&mut self, raw: &str) -> Result<(), FieldError> {
        let parsed = parse_bound(FieldId::Start, raw);
        self.start = self.track_bound(FieldId::Start, parsed)?;
        Ok(())
    }

    pub fn set_end(&mut self, raw: &str) -> Result<(), FieldError> {
        let parsed = parse_bound(FieldId::End, raw);
        self.end = self.track_bound(FieldId::End, parsed)?;
        Ok(())
    }

    pub fn set_last(&mut self, raw: &str) -> Result<(), FieldError> {
        let parsed = parse_bound(FieldId::Last, raw);
        self.last = self.track_bound(FieldId::Last, parsed)?;
        Ok(())
    }

    fn track_bound(
        &mut self,
        field: FieldId,
        parsed: Result<Option<u32>, FieldError>,
    ) -> Result<Option<u32>, FieldError> {
        match parsed {
            Ok(value) => {
                self.invalid.remove(&field);
                Ok(value)
            }
            Err(e) => {
                self.invalid.insert(field);
                self.clear_bound(field);
                Err(e)
            }
        }
    }

    fn clear_bound(&mut self, field: FieldId) {
        match field {
            FieldId::Start => self.start = None,
            FieldId::End => self.end = None,
            FieldId::Last => self.last = None,
            _ => {}
        }
    }

    /// Route raw input text to the setter for `field`
    pub fn update_field(&mut self, field: FieldId, raw: &str) -> Result<(), FieldError> {
        match field {
            FieldId::PrivateKey => self.set_private_key(raw),
            FieldId::ViewKey => self.set_view_key(raw),
            FieldId::Endpoint => self.set_endpoint(raw),
            FieldId::Start => return self.set_start(raw),
            FieldId::End => return self.set_end(raw),
            FieldId::Last => return self.set_last(raw),
        }
        Ok(())
    }

    /// Text shown in the input for `field`
    pub fn display_value(&self, field: FieldId) -> String {
        let bound = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        match field {
            FieldId::PrivateKey => self.private_key.clone(),
            FieldId::ViewKey => self.view_key.clone(),
            FieldId::Endpoint => self.endpoint.clone(),
            FieldId::Start => bound(self.start),
            FieldId::End => bound(self.end),
            FieldId::Last => bound(self.last),
        }
    }
}

/// Parameters of one `request_records` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordQuery {
    pub private_key: Option<String>,
    pub view_key: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub last: Option<u32>,
    pub endpoint: String,
}

impl RecordQuery {
    /// Build the call parameters; view key and endpoint must be non-empty
    /// and every bound must hold a parsed number or nothing.
    pub fn from_state(state: &FormState) -> Result<Self, RecordsError> {
        for field in [FieldId::Start, FieldId::End, FieldId::Last] {
            if state.invalid.contains(&field) {
                return Err(RecordsError::InvalidField(field.name()));
            }
        }
        if state.view_key.is_empty() {
            return Err(RecordsError::MissingField(FieldId::ViewKey.name()));
        }
        if state.endpoint.is_empty() {
            return Err(RecordsError::MissingField(FieldId::Endpoint.name()));
        }
        Ok(Self {
            private_key: Some(state.private_key.clone()).filter(|k| !k.is_empty()),
            view_key: state.view_key.clone(),
            start: state.start,
            end: state.end,
            last: state.last,
            endpoint: state.endpoint.clone(),
        })
    }
}

/// Record library lifecycle as seen by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryStatus {
    Initializing,
    Ready,
    Failed(String),
}

impl LibraryStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LibraryStatus::Ready)
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, LibraryStatus::Initializing)
    }
}

/// Opaque records returned by a successful call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    pub records: Vec<String>,
}

impl RecordBatch {
    /// Interpret the library's scanner result: a non-empty `msg` is an error.
    pub fn from_scanner(msg: Option<String>, records: Vec<String>) -> Result<Self, RecordsError> {
        match msg {
            Some(msg) if !msg.is_empty() => Err(RecordsError::Library(msg)),
            _ => Ok(Self { records }),
        }
    }
}
