//! Decode errors.

use std::fmt;

/// Errors raised while parsing a NetCDF classic header or extracting
/// variable data.
#[derive(Debug, Clone, PartialEq)]
pub enum NetCdfError {
    /// Magic mismatch, unknown version, bad list framing tag, or a
    /// 64-bit offset whose high word is non-zero. Carries a short
    /// human-readable reason.
    NotNetCdf(String),
    /// Attribute or variable type code outside `1..=6`.
    InvalidType(u32),
    /// A read would pass the end of the byte image.
    Truncated,
    /// Variable lookup by name matched nothing.
    NotFound(String),
    /// Constructor invoked with no data.
    EmptyInput,
}

impl fmt::Display for NetCdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetCdfError::NotNetCdf(reason) => {
                write!(f, "Not a valid NetCDF v3.x file: {reason}")
            }
            NetCdfError::InvalidType(code) => write!(f, "Invalid NetCDF type code {code}"),
            NetCdfError::Truncated => write!(f, "Unexpected end of NetCDF byte image"),
            NetCdfError::NotFound(name) => write!(f, "No such variable '{name}'"),
            NetCdfError::EmptyInput => write!(f, "No data supplied to NetCDF reader"),
        }
    }
}

impl std::error::Error for NetCdfError {}

impl NetCdfError {
    pub(crate) fn not_netcdf(reason: impl Into<String>) -> Self {
        NetCdfError::NotNetCdf(reason.into())
    }
}
