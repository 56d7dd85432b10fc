//! The `version_sum` and `value` traversals.

use bits_pack::{Operator, Packet, PacketBody};

use crate::error::EvalError;

/// Sums the version field of a packet and every packet nested inside it.
///
/// A pure function of the tree: re-decoding the same transmission always
/// produces the same version sum.
pub fn version_sum(packet: &Packet) -> u64 {
    packet.version as u64
        + packet
            .sub_packets()
            .iter()
            .map(version_sum)
            .sum::<u64>()
}

/// Evaluates the expression a packet tree represents.
///
/// Literals evaluate to their value; operators combine the values of their
/// sub-packets. Comparison operators require exactly two sub-packets, and
/// all arithmetic is checked rather than wrapping.
pub fn value(packet: &Packet) -> Result<u64, EvalError> {
    let (op, sub_packets) = match &packet.body {
        PacketBody::Literal(value) => return Ok(*value),
        PacketBody::Operator { op, sub_packets } => (*op, sub_packets),
    };

    let operands = sub_packets
        .iter()
        .map(value)
        .collect::<Result<Vec<u64>, EvalError>>()?;

    match op {
        Operator::Sum => operands
            .iter()
            .try_fold(0u64, |acc, &v| acc.checked_add(v))
            .ok_or(EvalError::Overflow(op.name())),
        Operator::Product => operands
            .iter()
            .try_fold(1u64, |acc, &v| acc.checked_mul(v))
            .ok_or(EvalError::Overflow(op.name())),
        Operator::Min => operands
            .iter()
            .copied()
            .min()
            .ok_or(EvalError::EmptyOperands(op.name())),
        Operator::Max => operands
            .iter()
            .copied()
            .max()
            .ok_or(EvalError::EmptyOperands(op.name())),
        Operator::GreaterThan => compare(op, &operands, |a, b| a > b),
        Operator::LessThan => compare(op, &operands, |a, b| a < b),
        Operator::EqualTo => compare(op, &operands, |a, b| a == b),
    }
}

fn compare(op: Operator, operands: &[u64], cmp: fn(u64, u64) -> bool) -> Result<u64, EvalError> {
    match operands {
        [a, b] => Ok(cmp(*a, *b) as u64),
        _ => Err(EvalError::ArityError {
            operator: op.name(),
            expected: 2,
            found: operands.len(),
        }),
    }
}
