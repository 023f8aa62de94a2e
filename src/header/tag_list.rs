//! Shared `(tag, length, elements...)` framing used by the dimensions,
//! global attributes, and variables sections.

use crate::consts::ZERO_TAG;
use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;

/// Reads a tagged list's `(tag, length)` prefix and returns the element
/// count, or `0` if the list is absent.
///
/// `tag == 0` requires the following `u32` to also be `0` (absent encoding
/// shares the same 8 bytes as a present-but-empty list); any other `tag`
/// must equal `expected`.
fn read_list_len(cursor: &mut ByteCursor, expected: u32, label: &str) -> Result<u32, NetCdfError> {
    let tag = cursor.u32()?;
    if tag == ZERO_TAG {
        let len = cursor.u32()?;
        if len != 0 {
            return Err(NetCdfError::not_netcdf(format!(
                "wrong empty tag for list of {label}"
            )));
        }
        return Ok(0);
    }
    if tag != expected {
        return Err(NetCdfError::not_netcdf(format!(
            "wrong tag for list of {label}"
        )));
    }
    cursor.u32()
}

/// Reads a tagged list, parsing each element with `parse_element`.
pub(crate) fn read_list<T>(
    cursor: &mut ByteCursor,
    expected_tag: u32,
    label: &str,
    mut parse_element: impl FnMut(&mut ByteCursor) -> Result<T, NetCdfError>,
) -> Result<Vec<T>, NetCdfError> {
    let len = read_list_len(cursor, expected_tag, label)?;
    log::debug!("{label} list: tag {expected_tag}, {len} element(s)");
    let mut out = Vec::with_capacity(len as usize);
    for _ in 0..len {
        out.push(parse_element(cursor)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_list_is_empty() {
        let data = [0, 0, 0, 0, 0, 0, 0, 0];
        let mut c = ByteCursor::new(&data);
        let v: Vec<u8> = read_list(&mut c, 10, "dimensions", |c| c.u8()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn present_empty_list_is_empty() {
        // tag=10, length=0
        let data = [0, 0, 0, 10, 0, 0, 0, 0];
        let mut c = ByteCursor::new(&data);
        let v: Vec<u8> = read_list(&mut c, 10, "dimensions", |c| c.u8()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn wrong_empty_tag_rejected() {
        // tag=0, length!=0 is invalid
        let data = [0, 0, 0, 0, 0, 0, 0, 1];
        let mut c = ByteCursor::new(&data);
        let res: Result<Vec<u8>, _> = read_list(&mut c, 10, "dimensions", |c| c.u8());
        assert!(matches!(res, Err(NetCdfError::NotNetCdf(_))));
    }

    #[test]
    fn wrong_nonzero_tag_rejected() {
        let data = [0, 0, 0, 11, 0, 0, 0, 0];
        let mut c = ByteCursor::new(&data);
        let res: Result<Vec<u8>, _> = read_list(&mut c, 10, "dimensions", |c| c.u8());
        assert!(matches!(res, Err(NetCdfError::NotNetCdf(_))));
    }

    #[test]
    fn parses_elements_in_order() {
        let data = [0, 0, 0, 10, 0, 0, 0, 3, 7, 8, 9];
        let mut c = ByteCursor::new(&data);
        let v: Vec<u8> = read_list(&mut c, 10, "dimensions", |c| c.u8()).unwrap();
        assert_eq!(v, vec![7, 8, 9]);
    }
}
