//! `HeaderParser`: consumes the magic, version, and the three tagged
//! list sections into an assembled [`Header`].

mod attribute;
mod dimension;
mod tag_list;
mod variable;

pub use attribute::Attribute;
pub use dimension::Dimension;
pub use variable::Variable;

use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;
use crate::name::Name;
use crate::padding::align_to_4;

use attribute::read_attribute_list;
use dimension::read_dimension;
use tag_list::read_list;
use variable::read_variable_list;

use crate::consts::NC_DIMENSION;

/// The record (unlimited) dimension, if this file declares one and at
/// least one variable uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDimension {
    pub length: u32,
    pub id: Option<u32>,
    pub name: Option<Name>,
    pub record_step: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: u8,
    pub record_dimension: RecordDimension,
    pub dimensions: Vec<Dimension>,
    pub global_attributes: Vec<Attribute>,
    pub variables: Vec<Variable>,
}

/// Reads a name: `u32` length prefix, that many ASCII bytes, pad-to-4.
pub(crate) fn read_name(cursor: &mut ByteCursor) -> Result<Name, NetCdfError> {
    let len = cursor.u32()?;
    let bytes = cursor.bytes(len as usize)?;
    align_to_4(cursor)?;
    Ok(Name::from_bytes(bytes))
}

fn read_magic(cursor: &mut ByteCursor) -> Result<(), NetCdfError> {
    let magic = cursor.bytes(3)?;
    if magic != b"CDF" {
        return Err(NetCdfError::not_netcdf("should start with CDF"));
    }
    Ok(())
}

fn read_version(cursor: &mut ByteCursor, permissive: bool) -> Result<u8, NetCdfError> {
    let version = cursor.u8()?;
    if version > 2 {
        return Err(NetCdfError::not_netcdf("unknown version"));
    }
    if version == 0 && !permissive {
        return Err(NetCdfError::not_netcdf("unknown version"));
    }
    Ok(version)
}

/// Identifies the record dimension (first `size == 0` dimension, if any)
/// among an already-parsed dimension list.
fn find_record_dimension(dimensions: &[Dimension]) -> Option<(u32, Name)> {
    dimensions
        .iter()
        .enumerate()
        .find(|(_, d)| d.is_record())
        .map(|(i, d)| (i as u32, d.name.clone()))
}

/// Consumes the full header from `cursor`, which must be positioned at
/// byte 0 of the file image. `permissive` controls whether a version
/// byte of `0` is accepted (see [`crate::reader::Reader::new_permissive`]).
pub(crate) fn parse(cursor: &mut ByteCursor, permissive: bool) -> Result<Header, NetCdfError> {
    read_magic(cursor)?;
    let version = read_version(cursor, permissive)?;
    log::debug!("NetCDF header: version {version}");

    let numrecs = cursor.u32()?;

    let dimensions = read_list(cursor, NC_DIMENSION, "dimensions", read_dimension)?;
    let (record_id, record_name) = match find_record_dimension(&dimensions) {
        Some((id, name)) => (Some(id), Some(name)),
        None => (None, None),
    };
    log::debug!(
        "dimensions: {} total, record dimension id {:?}",
        dimensions.len(),
        record_id
    );

    let global_attributes = read_attribute_list(cursor)?;
    let variables = read_variable_list(cursor, version.max(1), record_id)?;

    let record_step = if record_id.is_some() {
        let step: u32 = variables
            .iter()
            .filter(|v| v.is_record)
            .map(|v| v.size_bytes)
            .sum();
        if variables.iter().any(|v| v.is_record) {
            Some(step)
        } else {
            None
        }
    } else {
        None
    };

    let record_dimension = RecordDimension {
        length: numrecs,
        id: record_id,
        name: record_name,
        record_step,
    };

    Ok(Header {
        version,
        record_dimension,
        dimensions,
        global_attributes,
        variables,
    })
}
