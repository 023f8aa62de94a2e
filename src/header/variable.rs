//! Variable entity and its list parser.

use crate::consts::NC_VARIABLE;
use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;
use crate::name::Name;
use crate::types::{self, TypeName};

use super::attribute::{read_attribute_list, Attribute};
use super::read_name;
use super::tag_list::read_list;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub dimension_ids: Vec<u32>,
    pub attributes: Vec<Attribute>,
    pub type_name: TypeName,
    /// Wire size in bytes of one record's worth of this variable,
    /// including internal padding to a 4-byte boundary. May be
    /// [`crate::consts::STREAMING_SIZE_SENTINEL`], recorded verbatim.
    pub size_bytes: u32,
    /// Absolute byte offset of this variable's first byte.
    pub offset: u64,
    /// `true` iff this variable's outermost dimension is the record
    /// dimension.
    pub is_record: bool,
}

fn read_dimension_ids(cursor: &mut ByteCursor) -> Result<Vec<u32>, NetCdfError> {
    let rank = cursor.u32()?;
    let mut ids = Vec::with_capacity(rank as usize);
    for _ in 0..rank {
        ids.push(cursor.u32()?);
    }
    Ok(ids)
}

fn read_offset(cursor: &mut ByteCursor, version: u8) -> Result<u64, NetCdfError> {
    if version == 2 {
        let high = cursor.u32()?;
        let low = cursor.u32()?;
        if high != 0 {
            return Err(NetCdfError::not_netcdf(
                "offsets larger than 4GB not supported",
            ));
        }
        Ok(low as u64)
    } else {
        Ok(cursor.u32()? as u64)
    }
}

fn read_variable(
    cursor: &mut ByteCursor,
    version: u8,
    record_dim_id: Option<u32>,
) -> Result<Variable, NetCdfError> {
    let name = read_name(cursor)?;
    let dimension_ids = read_dimension_ids(cursor)?;
    let attributes = read_attribute_list(cursor)?;
    let code = cursor.u32()?;
    let type_name = types::code_to_name(code)?;
    let size_bytes = cursor.u32()?;
    let offset = read_offset(cursor, version)?;

    let is_record = match (dimension_ids.first(), record_dim_id) {
        (Some(first), Some(id)) => *first == id,
        _ => false,
    };

    log::trace!(
        "variable '{name}': type {code}, {} dim(s), size_bytes {size_bytes}, offset {offset}",
        dimension_ids.len()
    );

    Ok(Variable {
        name,
        dimension_ids,
        attributes,
        type_name,
        size_bytes,
        offset,
        is_record,
    })
}

pub(crate) fn read_variable_list(
    cursor: &mut ByteCursor,
    version: u8,
    record_dim_id: Option<u32>,
) -> Result<Vec<Variable>, NetCdfError> {
    read_list(cursor, NC_VARIABLE, "variables", |c| {
        read_variable(c, version, record_dim_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_attrs() -> [u8; 8] {
        [0, 0, 0, 0, 0, 0, 0, 0]
    }

    #[test]
    fn reads_fixed_variable_v1() {
        let mut data = vec![
            0, 0, 0, 1, b'v', 0, 0, 0, // name "v"
            0, 0, 0, 1, 0, 0, 0, 0, // rank=1, dim id 0
        ];
        data.extend_from_slice(&no_attrs());
        data.extend_from_slice(&[0, 0, 0, 3]); // type SHORT
        data.extend_from_slice(&[0, 0, 0, 6]); // size_bytes
        data.extend_from_slice(&[0, 0, 0, 80]); // offset (v1, u32)

        let mut c = ByteCursor::new(&data);
        let var = read_variable(&mut c, 1, None).unwrap();
        assert_eq!(var.name.to_string(), "v");
        assert_eq!(var.dimension_ids, vec![0]);
        assert_eq!(var.type_name, TypeName::Short);
        assert_eq!(var.size_bytes, 6);
        assert_eq!(var.offset, 80);
        assert!(!var.is_record);
    }

    #[test]
    fn v2_offset_high_word_nonzero_rejected() {
        let mut data = vec![0, 0, 0, 1, b'v', 0, 0, 0, 0, 0, 0, 0];
        data.extend_from_slice(&no_attrs());
        data.extend_from_slice(&[0, 0, 0, 4]); // type INT
        data.extend_from_slice(&[0, 0, 0, 4]); // size_bytes
        data.extend_from_slice(&[0, 0, 0, 1]); // high word != 0
        data.extend_from_slice(&[0, 0, 0, 0]); // low word

        let mut c = ByteCursor::new(&data);
        let err = read_variable(&mut c, 2, None).unwrap_err();
        assert!(matches!(err, NetCdfError::NotNetCdf(_)));
    }

    #[test]
    fn is_record_true_when_first_dim_matches() {
        let mut data = vec![0, 0, 0, 1, b'a', 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0];
        data.extend_from_slice(&no_attrs());
        data.extend_from_slice(&[0, 0, 0, 3]); // SHORT
        data.extend_from_slice(&[0, 0, 0, 4]);
        data.extend_from_slice(&[0, 0, 0, 0]);

        let mut c = ByteCursor::new(&data);
        let var = read_variable(&mut c, 1, Some(0)).unwrap();
        assert!(var.is_record);
    }
}
