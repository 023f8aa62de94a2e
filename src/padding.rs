//! Alignment to 4-byte boundaries after variable-length wire sections.

use crate::cursor::ByteCursor;
use crate::errors::NetCdfError;

/// Skips zero-padding so the cursor sits on a 4-byte boundary.
///
/// Uses the cursor's current offset directly: if `offset mod 4 != 0`,
/// skips `4 - (offset mod 4)` bytes. The skipped bytes are expected to be
/// zero on write but are not validated here, for compatibility with
/// producers that don't zero them.
pub(crate) fn align_to_4(cursor: &mut ByteCursor) -> Result<(), NetCdfError> {
    let skip = pad_len(cursor.offset() as u32);
    if skip != 0 {
        cursor.skip(skip as u64)?;
    }
    Ok(())
}

/// Padding length in bytes for a variable-length region of `len` bytes
/// starting on a 4-byte boundary.
pub(crate) fn pad_len(len: u32) -> u32 {
    (4 - (len % 4)) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_len_examples() {
        assert_eq!(pad_len(0), 0);
        assert_eq!(pad_len(1), 3);
        assert_eq!(pad_len(4), 0);
        assert_eq!(pad_len(5), 3);
    }

    #[test]
    fn align_skips_to_boundary() {
        let data = [0_u8; 8];
        let mut c = ByteCursor::new(&data);
        c.seek(1).unwrap();
        align_to_4(&mut c).unwrap();
        assert_eq!(c.offset(), 4);
    }

    #[test]
    fn align_noop_when_already_aligned() {
        let data = [0_u8; 8];
        let mut c = ByteCursor::new(&data);
        c.seek(4).unwrap();
        align_to_4(&mut c).unwrap();
        assert_eq!(c.offset(), 4);
    }
}
