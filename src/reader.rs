use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::path::Path;

use zerocopy::byteorder::{BE, LE, U16, U32, U64};
use zerocopy::FromBytes;

use crate::Endianness;

pub type Result<T> = core::result::Result<T, ReaderError>;

/// Reads fixed-width values from a slice of bytes, in a byte order chosen at construction.
///
/// The reader holds its input either borrowed from the caller ([`BinaryReader::new`]) or owned
/// ([`BinaryReader::copied`], [`BinaryReader::from_vec`], [`BinaryReader::from_file`]). An owned
/// buffer is released when the reader is dropped; a borrowed one is left alone.
///
/// Each `read_*` method checks that every byte of the value lies between the cursor and the end
/// of the input before it consumes anything. If the check fails, the method returns
/// `Err(ReaderError::NeedsMoreData)` and the cursor does not move, so the caller may inspect the
/// remaining bytes or try a narrower read.
///
/// Multi-byte integers are decoded recursively: a `u16` from two `u8` reads, a `u32` from two
/// `u16` reads and a `u64` from two `u32` reads, each pair joined according to the reader's
/// [`Endianness`]. Signed integers and floats reinterpret the bit pattern of the unsigned value
/// of the same width.
pub struct BinaryReader<'a> {
    data: Cow<'a, [u8]>,
    offset: usize,
    endianness: Endianness,
}

impl<'a> BinaryReader<'a> {
    /// Creates a reader that borrows `data`.
    pub fn new(data: &'a [u8], endianness: Endianness) -> Self {
        Self {
            data: Cow::Borrowed(data),
            offset: 0,
            endianness,
        }
    }

    /// Returns the byte order of this reader.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the cursor position, in bytes from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the total length of the input, including bytes already read.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns the bytes that have not been read yet, without consuming them.
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.data[self.offset..]
    }

    /// Returns the whole input, including bytes already read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns `true` if the input is borrowed from the caller rather than owned by the reader.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_))
    }

    /// Consumes the reader and returns its input.
    pub fn into_inner(self) -> Cow<'a, [u8]> {
        self.data
    }

    /// Checks that `needed` bytes are available at the cursor.
    #[inline(always)]
    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            Err(ReaderError::NeedsMoreData {
                offset: self.offset,
                needed,
                remaining,
            })
        } else {
            Ok(())
        }
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let value = self.data[self.offset];
        self.offset += 1;
        Ok(value)
    }

    /// Reads a `u16`, composed from two `u8` reads.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let first = self.read_u8()?;
        let second = self.read_u8()?;
        Ok(self.endianness.join_u16(first, second))
    }

    /// Reads a `u32`, composed from two `u16` reads.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let first = self.read_u16()?;
        let second = self.read_u16()?;
        Ok(self.endianness.join_u32(first, second))
    }

    /// Reads a `u64`, composed from two `u32` reads.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.ensure(8)?;
        let first = self.read_u32()?;
        let second = self.read_u32()?;
        Ok(self.endianness.join_u64(first, second))
    }

    /// Reads an `i8`.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads an `i16` (two's complement).
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads an `i32` (two's complement).
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an `i64` (two's complement).
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads an `f32` from its IEEE-754 bit pattern. NaN and infinity patterns are returned
    /// as-is.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an `f64` from its IEEE-754 bit pattern. NaN and infinity patterns are returned
    /// as-is.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a `bool`. Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        self.ensure(len)?;
        let start = self.offset;
        self.offset += len;
        Ok(&self.data[start..self.offset])
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.offset..self.offset + N]);
        self.offset += N;
        Ok(out)
    }

    /// Copies `len` bytes into a new, separately owned buffer.
    ///
    /// Copying exactly the remaining bytes is allowed and leaves the reader at the end of its
    /// input.
    pub fn copy_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.ensure(len)?;
        let mut copy = Vec::new();
        copy.try_reserve_exact(len).map_err(|_| ReaderError::OutOfMemory)?;
        copy.extend_from_slice(&self.data[self.offset..self.offset + len]);
        self.offset += len;
        Ok(copy)
    }

    /// Copies `len` bytes into a new `String`.
    ///
    /// The bytes must be well-formed UTF-8. If they are not, this returns
    /// `Err(ReaderError::Invalid)` and the cursor does not move.
    pub fn copy_string(&mut self, len: usize) -> Result<String> {
        self.ensure(len)?;
        let bytes = &self.data[self.offset..self.offset + len];
        let s = core::str::from_utf8(bytes).map_err(|_| ReaderError::Invalid)?;
        let mut copy = String::new();
        copy.try_reserve_exact(len).map_err(|_| ReaderError::OutOfMemory)?;
        copy.push_str(s);
        self.offset += len;
        Ok(copy)
    }

    /// Copies `len` bytes into a new `bstr::BString`, without validating UTF-8.
    #[cfg(feature = "bstr")]
    pub fn copy_bstring(&mut self, len: usize) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.copy_bytes(len)?))
    }
}

macro_rules! read_array_of {
    ($name:ident, $ty:ty, $view:ident) => {
        /// Reads `count` consecutive values in the reader's byte order.
        ///
        /// The whole run is bounds-checked before anything is consumed.
        pub fn $name(&mut self, count: usize) -> Result<Vec<$ty>> {
            let len = count.saturating_mul(core::mem::size_of::<$ty>());
            self.ensure(len)?;
            let bytes = &self.data[self.offset..self.offset + len];
            let values: Vec<$ty> = match self.endianness {
                Endianness::Big => <[$view<BE>]>::ref_from_bytes(bytes)
                    .map_err(|_| ReaderError::Invalid)?
                    .iter()
                    .map(|v| v.get())
                    .collect(),
                Endianness::Little => <[$view<LE>]>::ref_from_bytes(bytes)
                    .map_err(|_| ReaderError::Invalid)?
                    .iter()
                    .map(|v| v.get())
                    .collect(),
            };
            self.offset += len;
            Ok(values)
        }
    };
}

impl BinaryReader<'_> {
    read_array_of!(read_u16_array, u16, U16);
    read_array_of!(read_u32_array, u32, U32);
    read_array_of!(read_u64_array, u64, U64);
}

impl BinaryReader<'static> {
    /// Creates a reader that owns a copy of `data`.
    pub fn copied(data: &[u8], endianness: Endianness) -> Self {
        Self::from_vec(data.to_vec(), endianness)
    }

    /// Creates a reader that takes ownership of `data`, without copying it.
    pub fn from_vec(data: Vec<u8>, endianness: Endianness) -> Self {
        Self {
            data: Cow::Owned(data),
            offset: 0,
            endianness,
        }
    }

    /// Loads the whole file at `path` and creates a reader that owns its contents.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        endianness: Endianness,
    ) -> core::result::Result<Self, crate::Error> {
        let data = crate::file::load(path)?;
        Ok(Self::from_vec(data, endianness))
    }
}

#[cfg(feature = "std")]
impl std::io::Read for BinaryReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl core::fmt::Debug for BinaryReader<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BinaryReader")
            .field("len", &self.data.len())
            .field("offset", &self.offset)
            .field("endianness", &self.endianness)
            .field("borrowed", &self.is_borrowed())
            .finish()
    }
}

/// Error type for `BinaryReader`
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ReaderError {
    /// A `read_*` method reached the end of the input data. The cursor was not moved.
    #[error("unexpected end of data: {needed} bytes needed at offset {offset}, {remaining} remaining")]
    NeedsMoreData {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes that were left.
        remaining: usize,
    },

    /// The `read_*` request found invalid data in the input. The input is malformed.
    #[error("the input data is malformed")]
    Invalid,

    /// A copy of the input could not be allocated.
    #[error("out of memory while copying input data")]
    OutOfMemory,
}
