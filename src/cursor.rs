//! Random-access big-endian view over an immutable byte image.
//!
//! Every `ByteCursor` is cheap to clone (two machine words over a borrowed
//! slice), so callers needing independent read positions over the same
//! image — e.g. concurrent variable extraction — just make another one
//! instead of sharing a single mutable cursor.

use std::io::{Cursor, Read, Seek, SeekFrom};

use binrw::{BinRead, BinReaderExt};

use crate::errors::NetCdfError;

#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    pub(crate) fn offset(&self) -> u64 {
        self.inner.position()
    }

    /// Absolute seek.
    pub(crate) fn seek(&mut self, offset: u64) -> Result<(), NetCdfError> {
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|_| NetCdfError::Truncated)?;
        Ok(())
    }

    /// Relative seek forward.
    pub(crate) fn skip(&mut self, n: u64) -> Result<(), NetCdfError> {
        self.seek(self.offset() + n)
    }

    /// Read a single big-endian value of type `T`.
    fn read<T>(&mut self) -> Result<T, NetCdfError>
    where
        T: BinRead,
        T::Args<'static>: Sized + Clone + Default,
    {
        self.inner
            .read_be::<T>()
            .map_err(|_| NetCdfError::Truncated)
    }

    pub(crate) fn u8(&mut self) -> Result<u8, NetCdfError> {
        self.read::<u8>()
    }

    pub(crate) fn u32(&mut self) -> Result<u32, NetCdfError> {
        self.read::<u32>()
    }

    pub(crate) fn i16(&mut self) -> Result<i16, NetCdfError> {
        self.read::<i16>()
    }

    pub(crate) fn i32(&mut self) -> Result<i32, NetCdfError> {
        self.read::<i32>()
    }

    pub(crate) fn f32(&mut self) -> Result<f32, NetCdfError> {
        self.read::<f32>()
    }

    pub(crate) fn f64(&mut self) -> Result<f64, NetCdfError> {
        self.read::<f64>()
    }

    /// Raw byte span at the current offset.
    pub(crate) fn bytes(&mut self, n: usize) -> Result<Vec<u8>, NetCdfError> {
        let mut buf = vec![0_u8; n];
        self.inner
            .read_exact(&mut buf)
            .map_err(|_| NetCdfError::Truncated)?;
        Ok(buf)
    }

    /// ASCII run, each byte mapped 0-255 to `char` (no UTF-8 decoding —
    /// NetCDF names and CHAR data are unvalidated ASCII byte strings).
    pub(crate) fn chars(&mut self, n: usize) -> Result<String, NetCdfError> {
        let buf = self.bytes(n)?;
        Ok(buf.iter().map(|b| *b as char).collect())
    }
}
