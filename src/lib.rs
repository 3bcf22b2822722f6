//! Writes packs of primitive scalar values to byte destinations using each
//! value's fixed, native in-memory layout.
//!
//! A pack is a non-empty ordered sequence of [`Scalar`] values. Its bytes
//! are the concatenation of each value's in-memory representation, in
//! argument order, with no padding, length prefix, or framing. Three
//! destinations are supported: an output stream ([`write_to_stream`]), a
//! caller-owned raw memory region ([`write_to_memory`]), and a byte buffer
//! with an offset cursor ([`write_to_buffer`]).
//!
//! The writers never open, close, allocate, or grow a destination, and no
//! endianness normalization is applied.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod pack;
mod writer;


pub use pack::{Pack, Scalar};
#[cfg(feature = "std")]
pub use writer::write_to_stream;
pub use writer::{write_to_buffer, write_to_memory, WriteError};
