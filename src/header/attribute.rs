//! Attribute entity and its list parser (used for both global and
//! per-variable attribute lists — identical framing, nested or not).

use crate::consts::NC_ATTRIBUTE;
use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;
use crate::name::Name;
use crate::padding::align_to_4;
use crate::types::{self, TypeName, Value};

use super::read_name;
use super::tag_list::read_list;

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Name,
    pub type_name: TypeName,
    pub value: Value,
}

fn read_attribute(cursor: &mut ByteCursor) -> Result<Attribute, NetCdfError> {
    let name = read_name(cursor)?;
    let code = cursor.u32()?;
    let type_name = types::code_to_name(code)?;
    let nelems = cursor.u32()?;
    let value = types::read_one(cursor, code, nelems)?;
    align_to_4(cursor)?;
    log::trace!("attribute '{name}': {nelems} element(s) of type {code}");
    Ok(Attribute {
        name,
        type_name,
        value,
    })
}

pub(crate) fn read_attribute_list(cursor: &mut ByteCursor) -> Result<Vec<Attribute>, NetCdfError> {
    read_list(cursor, NC_ATTRIBUTE, "attributes", read_attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_scalar_int_attribute() {
        // name "n" (pad 3), type=4 (INT), nelems=1, value=42, no extra pad
        let data = [
            0, 0, 0, 1, b'n', 0, 0, 0, // name
            0, 0, 0, 4, // type INT
            0, 0, 0, 1, // nelems
            0, 0, 0, 42, // value
        ];
        let mut c = ByteCursor::new(&data);
        let attr = read_attribute(&mut c).unwrap();
        assert_eq!(attr.name.to_string(), "n");
        assert_eq!(attr.type_name, TypeName::Int);
        assert_eq!(attr.value, Value::I32Scalar(42));
        assert_eq!(c.offset() % 4, 0);
    }

    #[test]
    fn unknown_type_code_is_invalid_type() {
        let data = [
            0, 0, 0, 1, b'n', 0, 0, 0, // name
            0, 0, 0, 7, // type 7 -- invalid
            0, 0, 0, 1, // nelems
        ];
        let mut c = ByteCursor::new(&data);
        assert_eq!(read_attribute(&mut c), Err(NetCdfError::InvalidType(7)));
    }

    #[test]
    fn absent_attribute_list_is_empty() {
        let data = [0, 0, 0, 0, 0, 0, 0, 0];
        let mut c = ByteCursor::new(&data);
        assert!(read_attribute_list(&mut c).unwrap().is_empty());
    }
}
