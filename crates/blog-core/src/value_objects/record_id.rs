//! Record ID - storage-assigned surrogate key
//!
//! Ids are assigned by the store on insert and are always positive.
//! Zero is reserved to mean "unset": it never names a stored row, and
//! list filters treat it as "no filter".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key of a user or blog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "i64")]
pub struct RecordId(i64);

impl RecordId {
    /// The unset id
    pub const UNSET: Self = Self(0);

    /// Create a RecordId from a raw value read back from storage
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (no id supplied)
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// `None` for the unset id, `Some(self)` otherwise
    #[inline]
    pub fn as_filter(self) -> Option<Self> {
        if self.is_unset() {
            None
        } else {
            Some(self)
        }
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordIdParseError::InvalidFormat)?;
        Self::try_from(value)
    }
}

/// Error when parsing a RecordId
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id out of range")]
    OutOfRange,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for RecordId {
    type Error = RecordIdParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(RecordId)
            .map_err(|_| RecordIdParseError::OutOfRange)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}
