//! Wire-format tag and type constants for NetCDF classic (v1/v2).
//!
//! See: <https://www.unidata.ucar.edu/software/netcdf/docs/file_format_specifications.html>

/// Tag for a dimensions list.
pub(crate) const NC_DIMENSION: u32 = 10;
/// Tag for a variables list.
pub(crate) const NC_VARIABLE: u32 = 11;
/// Tag for an attributes list.
pub(crate) const NC_ATTRIBUTE: u32 = 12;
/// Shared "absent list" tag, used by all three list kinds.
pub(crate) const NC_UNLIMITED: u32 = 0;
pub(crate) const ZERO_TAG: u32 = 0;

/// Sentinel `size_bytes`/`numrecs` value meaning "too large for this field".
/// Recognised on read, never resolved into a real size.
pub const STREAMING_SIZE_SENTINEL: u32 = 0xFFFF_FFFF;

pub(crate) const TYPE_BYTE: u32 = 1;
pub(crate) const TYPE_CHAR: u32 = 2;
pub(crate) const TYPE_SHORT: u32 = 3;
pub(crate) const TYPE_INT: u32 = 4;
pub(crate) const TYPE_FLOAT: u32 = 5;
pub(crate) const TYPE_DOUBLE: u32 = 6;
