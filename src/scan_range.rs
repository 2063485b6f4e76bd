//! Scan Range Preview
//!
//! How the record library reads the (start, end, last) triple. Used for
//! the hint under the numeric inputs; the library has the final say.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanRange {
    Between { start: u32, end: u32 },
    /// From `start` up to the latest height
    FromStart { start: u32 },
    /// From genesis up to `end`
    UpTo { end: u32 },
    /// The most recent `last` blocks
    Latest { last: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    Missing,
    Conflicting,
    Inverted { start: u32, end: u32 },
}

impl ScanRange {
    pub fn resolve(
        start: Option<u32>,
        end: Option<u32>,
        last: Option<u32>,
    ) -> Result<Self, RangeError> {
        match (start, end, last) {
            (Some(start), Some(end), None) if end > start => Ok(ScanRange::Between { start, end }),
            (Some(start), Some(end), None) => Err(RangeError::Inverted { start, end }),
            (Some(start), None, None) => Ok(ScanRange::FromStart { start }),
            (None, Some(end), None) => Ok(ScanRange::UpTo { end }),
            (None, None, Some(last)) => Ok(ScanRange::Latest { last }),
            (None, None, None) => Err(RangeError::Missing),
            _ => Err(RangeError::Conflicting),
        }
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanRange::Between { start, end } => write!(f, "Scan blocks {} to {}", start, end),
            ScanRange::FromStart { start } => {
                write!(f, "Scan from block {} to the latest block", start)
            }
            ScanRange::UpTo { end } => write!(f, "Scan from block 0 to {}", end),
            ScanRange::Latest { last } => write!(f, "Scan the last {} blocks", last),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Missing => write!(f, "Missing data about block range"),
            RangeError::Conflicting => write!(f, "`last` can't be used with `start` or `end`"),
            RangeError::Inverted { start, end } => {
                write!(f, "The given scan range is invalid (start = {}, end = {})", start, end)
            }
        }
    }
}
