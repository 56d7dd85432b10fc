//! Decoded packet tree.

/// Type ID of a literal packet. All other 3-bit type IDs are operators.
pub const TYPE_LITERAL: u8 = 4;

/// Operator semantics carried by a non-literal packet's type ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Product,
    Min,
    Max,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl Operator {
    /// Maps a 3-bit type ID to its operator. Returns `None` only for
    /// [`TYPE_LITERAL`]; every other value 0–7 is a defined operator.
    pub fn from_type_id(type_id: u8) -> Option<Self> {
        match type_id {
            0 => Some(Operator::Sum),
            1 => Some(Operator::Product),
            2 => Some(Operator::Min),
            3 => Some(Operator::Max),
            5 => Some(Operator::GreaterThan),
            6 => Some(Operator::LessThan),
            7 => Some(Operator::EqualTo),
            _ => None,
        }
    }

    /// The wire type ID of this operator.
    pub fn type_id(&self) -> u8 {
        match self {
            Operator::Sum => 0,
            Operator::Product => 1,
            Operator::Min => 2,
            Operator::Max => 3,
            Operator::GreaterThan => 5,
            Operator::LessThan => 6,
            Operator::EqualTo => 7,
        }
    }

    /// Human-readable operator name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Product => "product",
            Operator::Min => "min",
            Operator::Max => "max",
            Operator::GreaterThan => "greater-than",
            Operator::LessThan => "less-than",
            Operator::EqualTo => "equal-to",
        }
    }
}

/// Payload of a packet: a literal value or an operator over sub-packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketBody {
    /// Literal value packet (type ID 4).
    Literal(u64),
    /// Operator packet over zero or more exclusively owned sub-packets.
    Operator {
        op: Operator,
        sub_packets: Vec<Packet>,
    },
}

/// One decoded BITS packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// 3-bit packet version.
    pub version: u8,
    /// Exact number of bits consumed to decode this packet, header and
    /// everything nested inside it included.
    pub bits_read: usize,
    pub body: PacketBody,
}

impl Packet {
    /// The wire type ID of this packet.
    pub fn type_id(&self) -> u8 {
        match &self.body {
            PacketBody::Literal(_) => TYPE_LITERAL,
            PacketBody::Operator { op, .. } => op.type_id(),
        }
    }

    /// This packet's sub-packets; empty for literals.
    pub fn sub_packets(&self) -> &[Packet] {
        match &self.body {
            PacketBody::Literal(_) => &[],
            PacketBody::Operator { sub_packets, .. } => sub_packets,
        }
    }
}
