//! Interface identifiers (GUID / IID)
//!
//! A GUID is a 128-bit value naming a foreign interface contract. Values are
//! fixed by the platform's published interface catalog and are declared here
//! as `const` items so they cannot drift at runtime.

use std::fmt;
use std::str::FromStr;

use crate::types::{ComError, Result};

/// Globally unique identifier (16 bytes)
///
/// Stored as a single big-endian `u128` so that `from_u128` reads the same as
/// the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` text form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid(u128);

/// Interface identifier. Every foreign contract has exactly one.
pub type Iid = Guid;

impl Guid {
    /// Size of a GUID in bytes
    pub const SIZE: usize = 16;

    /// Nil GUID (all zeros)
    pub const NIL: Self = Self(0);

    /// Create a GUID from its canonical 128-bit value
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Get the canonical 128-bit value
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Check if this is the nil GUID
    pub const fn is_nil(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string format "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
    ///
    /// Surrounding braces, as printed by the registry tools, are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);

        uuid::Uuid::parse_str(inner)
            .map(|uuid| Self(uuid.as_u128()))
            .map_err(|e| ComError::InvalidData(format!("invalid GUID {:?}: {}", s, e)))
    }

    /// Field layout used by the native ABI: Data1, Data2, Data3, Data4
    pub const fn to_fields(&self) -> (u32, u16, u16, [u8; 8]) {
        let v = self.0;
        let data4 = (v as u64).to_be_bytes();
        ((v >> 96) as u32, (v >> 80) as u16, (v >> 64) as u16, data4)
    }

    /// Build a GUID from the native ABI field layout
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self(
            ((data1 as u128) << 96)
                | ((data2 as u128) << 80)
                | ((data3 as u128) << 64)
                | (u64::from_be_bytes(data4) as u128),
        )
    }
}

impl FromStr for Guid {
    type Err = ComError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GUID({})", self)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = uuid::Uuid::encode_buffer();
        let text = uuid::Uuid::from_u128(self.0)
            .hyphenated()
            .encode_upper(&mut buf);
        write!(f, "{{{}}}", text)
    }
}
