//! Bit-level buffer primitives.
//!
//! A BITS transmission is a hexadecimal string hiding a bit-packed payload,
//! so the reading primitive here is a single bit rather than a byte. The
//! [`BitReader`] turns a hex string into an MSB-first bit sequence with a
//! monotone cursor; the [`BitWriter`] is its mirror for building test vectors
//! and encoding packet trees back to hex.

use thiserror::Error;

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

/// Errors produced by the bit-level reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read was attempted past the end of the bit sequence.
    #[error("end of buffer")]
    EndOfBuffer,

    /// More than 64 bits were requested in a single read.
    #[error("more than 64 bits requested in a single read")]
    TooManyBits,

    /// The input string contained a non-hexadecimal character.
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),
}
