//! Recursive-descent decoder for BITS transmissions.

use bits_buffers::BitReader;

use crate::error::BitsError;
use crate::packet::{Operator, Packet, PacketBody};

/// Stateless BITS decoder.
///
/// Decoding is a single-pass, depth-first, pre-order descent with no
/// backtracking: the only state is the reader's bit cursor and the call
/// stack, one level per nesting level of the input.
#[derive(Default)]
pub struct BitsDecoder;

impl BitsDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the single outermost packet of a hex-encoded transmission.
    ///
    /// Trailing pad bits beyond the outermost packet are ignored. Decoding
    /// is all-or-nothing: any framing violation aborts with an error.
    pub fn decode(&self, hex: &str) -> Result<Packet, BitsError> {
        let mut reader = BitReader::from_hex(hex)?;
        self.read_packet(&mut reader)
    }

    /// Reads one packet, including everything nested inside it, at the
    /// reader's current position.
    pub fn read_packet(&self, reader: &mut BitReader) -> Result<Packet, BitsError> {
        let version = reader.uint(3)? as u8;
        let type_id = reader.uint(3)? as u8;

        let op = match Operator::from_type_id(type_id) {
            Some(op) => op,
            None => {
                let (value, literal_bits) = self.read_literal(reader)?;
                return Ok(Packet {
                    version,
                    bits_read: 6 + literal_bits,
                    body: PacketBody::Literal(value),
                });
            }
        };

        // Header plus the length-type bit.
        let mut bits_read = 7;
        let mut sub_packets = Vec::new();

        if reader.take_bit()? == 0 {
            // Bit-length framing: children must land exactly on the
            // declared total.
            let declared = reader.uint(15)? as usize;
            bits_read += 15;
            let mut consumed = 0;
            while consumed < declared {
                let sub = self.read_packet(reader)?;
                consumed += sub.bits_read;
                sub_packets.push(sub);
            }
            if consumed != declared {
                return Err(BitsError::GroupOvershoot { declared, consumed });
            }
            bits_read += consumed;
        } else {
            // Count framing.
            let count = reader.uint(11)?;
            bits_read += 11;
            for _ in 0..count {
                let sub = self.read_packet(reader)?;
                bits_read += sub.bits_read;
                sub_packets.push(sub);
            }
        }

        Ok(Packet {
            version,
            bits_read,
            body: PacketBody::Operator { op, sub_packets },
        })
    }

    /// Reads a literal payload: 5-bit groups of 1 continuation bit plus 4
    /// value bits, ending with the first group whose continuation bit is 0.
    /// Returns the value and the bits consumed (a multiple of 5).
    fn read_literal(&self, reader: &mut BitReader) -> Result<(u64, usize), BitsError> {
        let mut value = 0u64;
        let mut bits_read = 0;
        loop {
            let more = reader.take_bit()?;
            if value > u64::MAX >> 4 {
                return Err(BitsError::LiteralOverflow);
            }
            value = (value << 4) | reader.uint(4)?;
            bits_read += 5;
            if more == 0 {
                return Ok((value, bits_read));
            }
        }
    }
}
