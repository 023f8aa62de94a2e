//! Wire-format names: unvalidated ASCII byte strings.
//!
//! NetCDF names (dimension, attribute, variable) carry no encoding guarantee
//! in the file format, so this is deliberately not a `String`. Equality is
//! byte-for-byte; `Display` renders each byte as its Latin-1 `char` rather
//! than risk a lossy or panicking UTF-8 decode.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub(crate) Vec<u8>);

impl Name {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw wire bytes, with no encoding applied.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{}", *b as char)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}
