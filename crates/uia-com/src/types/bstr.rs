//! UTF-16 string values (BSTR)
//!
//! Foreign string outputs arrive as UTF-16 code units. They are converted
//! to `String` only after the producing call has succeeded.

use std::fmt;

use crate::types::{ComError, Result};

/// Owned UTF-16 string as written by a foreign call
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bstr(Vec<u16>);

impl Bstr {
    /// Create an empty string
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap raw UTF-16 code units
    pub fn from_wide(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// Borrow the UTF-16 code units
    pub fn as_wide(&self) -> &[u16] {
        &self.0
    }

    /// Number of UTF-16 code units
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict conversion; unpaired surrogates are an error
    pub fn to_string_checked(&self) -> Result<String> {
        String::from_utf16(&self.0)
            .map_err(|e| ComError::InvalidData(format!("invalid UTF-16 string: {}", e)))
    }

    /// Lossy conversion; unpaired surrogates become U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for Bstr {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<String> for Bstr {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl TryFrom<Bstr> for String {
    type Error = ComError;

    fn try_from(value: Bstr) -> Result<Self> {
        value.to_string_checked()
    }
}

impl fmt::Debug for Bstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BSTR({:?})", self.to_string_lossy())
    }
}
