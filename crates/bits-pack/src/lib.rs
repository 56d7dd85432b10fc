//! Codec for the BITS nested packet format.
//!
//! A BITS transmission is a hexadecimal string whose bits encode a single
//! outermost packet. Every packet starts with a 3-bit version and a 3-bit
//! type ID. Type ID 4 is a literal: a value packed in 5-bit nibble groups
//! (1 continuation bit + 4 payload bits per group). Every other type ID is
//! an operator over nested sub-packets, framed either by a 15-bit total bit
//! length or an 11-bit sub-packet count, selected by a single length-type
//! bit after the header.
//!
//! ## Example
//!
//! ```
//! use bits_pack::{BitsDecoder, PacketBody};
//!
//! let packet = BitsDecoder::new().decode("D2FE28").unwrap();
//! assert_eq!(packet.version, 6);
//! assert_eq!(packet.body, PacketBody::Literal(2021));
//! assert_eq!(packet.bits_read, 21);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod packet;

pub use decoder::BitsDecoder;
pub use encoder::BitsEncoder;
pub use error::BitsError;
pub use packet::{Operator, Packet, PacketBody, TYPE_LITERAL};
