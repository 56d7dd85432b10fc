//! Encoder producing hex-encoded BITS transmissions from packet trees.

use bits_buffers::BitWriter;

use crate::packet::{Packet, PacketBody, TYPE_LITERAL};

/// BITS encoder.
///
/// Literals are written as minimal nibble groups (the value 0 is a single
/// group); operators always use count framing (an 11-bit sub-packet count),
/// so a tree with more than 2047 direct children of one packet is not
/// representable by this encoder. The decoder accepts everything emitted
/// here.
#[derive(Default)]
pub struct BitsEncoder {
    writer: BitWriter,
}

impl BitsEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes one packet tree as an uppercase hex string, zero-padded to a
    /// whole nibble.
    pub fn encode_hex(&mut self, packet: &Packet) -> String {
        self.writer = BitWriter::new();
        self.write_packet(packet);
        self.writer.to_hex()
    }

    fn write_packet(&mut self, packet: &Packet) {
        self.writer.uint(packet.version as u64, 3);
        match &packet.body {
            PacketBody::Literal(value) => {
                self.writer.uint(TYPE_LITERAL as u64, 3);
                self.write_literal(*value);
            }
            PacketBody::Operator { op, sub_packets } => {
                self.writer.uint(op.type_id() as u64, 3);
                self.writer.push_bit(1);
                self.writer.uint(sub_packets.len() as u64, 11);
                for sub in sub_packets {
                    self.write_packet(sub);
                }
            }
        }
    }

    fn write_literal(&mut self, value: u64) {
        let bits = 64 - value.leading_zeros() as usize;
        let groups = bits.div_ceil(4).max(1);
        for i in (0..groups).rev() {
            self.writer.push_bit(if i == 0 { 0 } else { 1 });
            self.writer.uint(value >> (i * 4), 4);
        }
    }
}
