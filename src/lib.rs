//! Read-only decoder for the NetCDF classic binary file format (version 1
//! "classic", version 2 "64-bit offset").
//!
//! Given a contiguous byte image, [`Reader`] parses the header (dimensions,
//! global attributes, variables) and decodes any named variable's values on
//! demand. Writing/encoding, file I/O, and NetCDF-4/HDF5 are out of scope —
//! callers read the bytes into memory themselves and hand this crate a
//! `&[u8]`.
//!
//! ```no_run
//! # fn read_file() -> Result<(), netcdf3iter::NetCdfError> {
//! let bytes = std::fs::read("example.nc").unwrap();
//! let reader = netcdf3iter::Reader::new(&bytes)?;
//! for dim in reader.dimensions() {
//!     println!("{dim:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod consts;
mod cursor;
mod errors;
mod extractor;
mod header;
mod name;
mod padding;
mod reader;
mod types;

pub use consts::STREAMING_SIZE_SENTINEL;
pub use errors::NetCdfError;
pub use header::{Attribute, Dimension, Header, RecordDimension, Variable};
pub use name::Name;
pub use reader::Reader;
pub use types::{TypeName, Value};
