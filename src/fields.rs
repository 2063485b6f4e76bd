//! Form Fields
//!
//! Field identifiers, their static descriptors, and raw-input parsing.

use crate::error::FieldError;

/// One of the six form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PrivateKey,
    ViewKey,
    Start,
    End,
    Last,
    Endpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Static rendering info for a field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    /// DOM id and form name
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Fields in display order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::PrivateKey,
        name: "private_key",
        label: "Private Key (可选):",
        placeholder: "请输入PrivateKey",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        id: FieldId::ViewKey,
        name: "view_key",
        label: "View Key:",
        placeholder: "请输入ViewKey",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        id: FieldId::Start,
        name: "start",
        label: "Start (可选):",
        placeholder: "请输入开始值",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        id: FieldId::End,
        name: "end",
        label: "End (可选):",
        placeholder: "请输入结束值",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        id: FieldId::Last,
        name: "last",
        label: "Last (可选):",
        placeholder: "请输入最后值",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        id: FieldId::Endpoint,
        name: "endpoint",
        label: "Endpoint:",
        placeholder: "请输入Endpoint",
        kind: FieldKind::Text,
        required: true,
    },
];

impl FieldId {
    pub fn spec(self) -> &'static FieldSpec {
        FIELDS
            .iter()
            .find(|f| f.id == self)
            .unwrap_or(&FIELDS[0])
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Parse a numeric input into a block bound.
///
/// Empty input is absent (`Ok(None)`). Accepts what a number input can
/// report for whole numbers, e.g. `"42"`, `"42.0"`, `"1e3"`.
pub fn parse_bound(field: FieldId, raw: &str) -> Result<Option<u32>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        return Ok(Some(n));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 => {
            Ok(Some(n as u32))
        }
        _ => Err(FieldError::InvalidBound { field: field.name(), raw: raw.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_empty_is_absent() {
        assert_eq!(parse_bound(FieldId::Start, ""), Ok(None));
        assert_eq!(parse_bound(FieldId::Start, "   "), Ok(None));
    }

    #[test]
    fn test_parse_bound_whole_numbers() {
        assert_eq!(parse_bound(FieldId::Start, "42"), Ok(Some(42)));
        assert_eq!(parse_bound(FieldId::Start, "0"), Ok(Some(0)));
        assert_eq!(parse_bound(FieldId::Start, "42.0"), Ok(Some(42)));
        assert_eq!(parse_bound(FieldId::Start, "1e3"), Ok(Some(1000)));
        assert_eq!(parse_bound(FieldId::Start, "4294967295"), Ok(Some(u32::MAX)));
    }

    #[test]
    fn test_parse_bound_rejects_non_bounds() {
        assert!(parse_bound(FieldId::Start, "-5").is_err());
        assert!(parse_bound(FieldId::Start, "1.5").is_err());
        assert!(parse_bound(FieldId::Start, "abc").is_err());
        assert!(parse_bound(FieldId::Start, "NaN").is_err());
        assert!(parse_bound(FieldId::Start, "4294967296").is_err());
    }

    #[test]
    fn test_descriptors_cover_every_field() {
        let ids = [
            FieldId::PrivateKey,
            FieldId::ViewKey,
            FieldId::Start,
            FieldId::End,
            FieldId::Last,
            FieldId::Endpoint,
        ];
        for id in ids {
            assert_eq!(id.spec().id, id);
        }
        let required: Vec<_> = FIELDS.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, vec!["view_key", "endpoint"]);
    }
}
