#[cfg(feature = "std")]
use std::path::Path;

use zerocopy::byteorder::{BE, LE, U16, U32, U64};
use zerocopy::IntoBytes;

use alloc::vec::Vec;

use crate::{BinaryReader, Endianness};

pub type Result<T> = core::result::Result<T, WriterError>;

/// Capacity used by [`BinaryWriter::new`], and the first capacity of a writer that was created
/// with a capacity of zero.
pub const DEFAULT_CAPACITY: usize = 16;

/// Encodes fixed-width values into a growable buffer, in a byte order chosen at construction.
///
/// The writer is strictly append-only: there is no seek, overwrite or truncate. When a write does
/// not fit, the capacity doubles (or becomes [`DEFAULT_CAPACITY`] if it was zero) until it does.
///
/// Multi-byte integers are split into two halves of the next-narrower width and written in the
/// order given by the writer's [`Endianness`], recursively down to single bytes. Signed integers
/// and floats are written as the bit pattern of the unsigned value of the same width.
pub struct BinaryWriter {
    buffer: Vec<u8>,
    capacity: usize,
    endianness: Endianness,
}

impl BinaryWriter {
    /// Creates a new, empty `BinaryWriter` with [`DEFAULT_CAPACITY`].
    pub fn new(endianness: Endianness) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, endianness)
    }

    /// Creates a new, empty `BinaryWriter` with the given capacity.
    pub fn with_capacity(capacity: usize, endianness: Endianness) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            endianness,
        }
    }

    /// Like [`BinaryWriter::with_capacity`], but reports a failed allocation instead of aborting.
    pub fn try_with_capacity(capacity: usize, endianness: Endianness) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| WriterError::OutOfMemory)?;
        Ok(Self {
            buffer,
            capacity,
            endianness,
        })
    }

    /// Returns the byte order of this writer.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current capacity. This follows the doubling policy, independent of how much
    /// the allocator actually handed out.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Accesses the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Converts the written bytes into a reader with the same byte order.
    pub fn into_reader(self) -> BinaryReader<'static> {
        BinaryReader::from_vec(self.buffer, self.endianness)
    }

    /// Grows the capacity until `additional` more bytes fit.
    #[inline(always)]
    fn grow_for(&mut self, additional: usize) {
        let required = self.buffer.len() + additional;
        if required <= self.capacity {
            return;
        }
        let mut capacity = self.capacity;
        while capacity < required {
            capacity = if capacity == 0 {
                DEFAULT_CAPACITY
            } else {
                capacity.saturating_mul(2)
            };
        }
        self.buffer.reserve_exact(capacity - self.buffer.len());
        self.capacity = capacity;
    }

    /// Writes a single `u8` value
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        self.grow_for(1);
        self.buffer.push(value);
    }

    /// Writes a single `u16` value, as two `u8` writes.
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) {
        let (first, second) = self.endianness.split_u16(value);
        self.write_u8(first);
        self.write_u8(second);
    }

    /// Writes a single `u32` value, as two `u16` writes.
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) {
        let (first, second) = self.endianness.split_u32(value);
        self.write_u16(first);
        self.write_u16(second);
    }

    /// Writes a single `u64` value, as two `u32` writes.
    #[inline(always)]
    pub fn write_u64(&mut self, value: u64) {
        let (first, second) = self.endianness.split_u64(value);
        self.write_u32(first);
        self.write_u32(second);
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8)
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32)
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64)
    }

    /// Writes an `f32` value as its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits())
    }

    /// Writes an `f64` value as its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits())
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8)
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_array<const N: usize>(&mut self, value: [u8; N]) {
        self.write_bytes(&value)
    }

    /// Writes the full written range to the file at `path`, creating or truncating it.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> core::result::Result<(), crate::Error> {
        crate::file::save(path, &self.buffer)
    }
}

macro_rules! write_array_of {
    ($name:ident, $ty:ty, $view:ident) => {
        /// Writes every value of `values` in the writer's byte order.
        pub fn $name(&mut self, values: &[$ty]) {
            match self.endianness {
                Endianness::Big => {
                    let encoded: Vec<$view<BE>> = values.iter().map(|&v| $view::new(v)).collect();
                    self.write_bytes(encoded.as_bytes());
                }
                Endianness::Little => {
                    let encoded: Vec<$view<LE>> = values.iter().map(|&v| $view::new(v)).collect();
                    self.write_bytes(encoded.as_bytes());
                }
            }
        }
    };
}

impl BinaryWriter {
    write_array_of!(write_u16_array, u16, U16);
    write_array_of!(write_u32_array, u32, U32);
    write_array_of!(write_u64_array, u64, U64);
}

#[cfg(feature = "std")]
impl std::io::Write for BinaryWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl core::fmt::Debug for BinaryWriter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BinaryWriter")
            .field("len", &self.buffer.len())
            .field("capacity", &self.capacity)
            .field("endianness", &self.endianness)
            .finish()
    }
}

/// Error type for the fallible constructors of `BinaryWriter`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum WriterError {
    /// The requested capacity could not be allocated.
    #[error("out of memory while allocating the output buffer")]
    OutOfMemory,
}
