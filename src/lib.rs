//! Reads and writes fixed-width integers and IEEE-754 floats over byte buffers, in either
//! big-endian or little-endian byte order.
//!
//! [`BinaryReader`] is a forward-only cursor over a borrowed or owned byte slice.
//! [`BinaryWriter`] is an append-only buffer that grows by doubling. Both are configured with an
//! [`Endianness`] when they are constructed, and every multi-byte value is composed from (or
//! decomposed into) narrower values in that byte order.
//!
//! Out-of-bounds reads are reported as [`ReaderError`] values. Applications that prefer to
//! terminate the process on the first error can use the [`abort`] module.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod endian;
mod reader;
mod writer;

#[cfg(feature = "std")]
pub mod abort;
#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
pub mod file;


pub use endian::Endianness;
pub use reader::{BinaryReader, ReaderError};
pub use writer::{BinaryWriter, WriterError, DEFAULT_CAPACITY};

#[cfg(feature = "std")]
pub use error::Error;
