use bits_buffers::{BitWriter, BufferError};
use bits_pack::{BitsDecoder, BitsEncoder, BitsError, Operator, Packet, PacketBody};
use proptest::prelude::*;

fn decode(hex: &str) -> Packet {
    BitsDecoder::new()
        .decode(hex)
        .unwrap_or_else(|e| panic!("decode({}) failed: {}", hex, e))
}

fn literal_values(packet: &Packet) -> Vec<u64> {
    packet
        .sub_packets()
        .iter()
        .map(|sub| match sub.body {
            PacketBody::Literal(value) => value,
            _ => panic!("expected literal sub-packet"),
        })
        .collect()
}

// ------------------------------------------------------------- Fixed vectors

#[test]
fn literal_packet() {
    let packet = decode("D2FE28");
    assert_eq!(packet.version, 6);
    assert_eq!(packet.type_id(), 4);
    assert_eq!(packet.body, PacketBody::Literal(2021));
    assert_eq!(packet.bits_read, 21);
}

#[test]
fn bit_length_framed_operator() {
    let packet = decode("38006F45291200");
    assert_eq!(packet.version, 1);
    assert_eq!(packet.type_id(), 6);
    assert_eq!(packet.bits_read, 49);
    assert_eq!(literal_values(&packet), [10, 20]);

    // The declared 15-bit length is exactly the sum of the children's sizes.
    let child_bits: Vec<usize> = packet.sub_packets().iter().map(|s| s.bits_read).collect();
    assert_eq!(child_bits, [11, 16]);
    assert_eq!(child_bits.iter().sum::<usize>(), 27);
}

#[test]
fn count_framed_operator() {
    let packet = decode("EE00D40C823060");
    assert_eq!(packet.version, 7);
    assert_eq!(packet.type_id(), 3);
    // Header (6) + length-type bit + 11-bit count + three 11-bit literals.
    assert_eq!(packet.bits_read, 51);
    assert_eq!(packet.sub_packets().len(), 3);
    assert_eq!(literal_values(&packet), [1, 2, 3]);
}

#[test]
fn nested_operator_chain() {
    // Operator > operator > operator > literal.
    let packet = decode("8A004A801A8002F478");
    assert_eq!(packet.version, 4);
    let inner = &packet.sub_packets()[0];
    assert_eq!(inner.version, 1);
    let inner2 = &inner.sub_packets()[0];
    assert_eq!(inner2.version, 5);
    let leaf = &inner2.sub_packets()[0];
    assert_eq!(leaf.version, 6);
    assert!(matches!(leaf.body, PacketBody::Literal(_)));
}

#[test]
fn bits_read_bounded_by_input() {
    for hex in [
        "D2FE28",
        "38006F45291200",
        "EE00D40C823060",
        "620080001611562C8802118E34",
        "C0015000016115A2E0802F182340",
        "A0016C880162017C3686B18A3D4780",
    ] {
        let packet = decode(hex);
        assert!(packet.bits_read <= hex.len() * 4, "input: {}", hex);
        // The difference is the ignored trailing pad, under one nibble-group.
        assert!(hex.len() * 4 - packet.bits_read < 8, "input: {}", hex);
    }
}

#[test]
fn decoding_is_deterministic() {
    let first = decode("620080001611562C8802118E34");
    let second = decode("620080001611562C8802118E34");
    assert_eq!(first, second);
}

// -------------------------------------------------------------- Error cases

#[test]
fn truncated_literal() {
    // D2 = literal header plus a group whose payload is cut off.
    let err = BitsDecoder::new().decode("D2").unwrap_err();
    assert_eq!(err, BitsError::Buffer(BufferError::EndOfBuffer));
}

#[test]
fn truncated_length_field() {
    // 38 = operator header + length-type 0, then only 1 of 15 length bits.
    let err = BitsDecoder::new().decode("38").unwrap_err();
    assert_eq!(err, BitsError::Buffer(BufferError::EndOfBuffer));
}

#[test]
fn empty_input() {
    let err = BitsDecoder::new().decode("").unwrap_err();
    assert_eq!(err, BitsError::Buffer(BufferError::EndOfBuffer));
}

#[test]
fn invalid_hex_digit() {
    let err = BitsDecoder::new().decode("D2FG").unwrap_err();
    assert_eq!(err, BitsError::Buffer(BufferError::InvalidHexDigit('G')));
}

#[test]
fn group_overshoot() {
    // Operator declaring 5 bits of sub-packets, followed by an 11-bit
    // literal child: the child overruns the declared group.
    let mut writer = BitWriter::new();
    writer.uint(0, 3); // version
    writer.uint(0, 3); // type: sum
    writer.push_bit(0); // bit-length framing
    writer.uint(5, 15); // declared group length
    writer.uint(0, 3); // child version
    writer.uint(4, 3); // child type: literal
    writer.uint(0b00001, 5); // single nibble group, value 1
    let err = BitsDecoder::new().decode(&writer.to_hex()).unwrap_err();
    assert_eq!(
        err,
        BitsError::GroupOvershoot {
            declared: 5,
            consumed: 11
        }
    );
}

#[test]
fn literal_overflow() {
    // 17 nibble groups = 68 value bits, more than u64 can hold.
    let mut writer = BitWriter::new();
    writer.uint(0, 3);
    writer.uint(4, 3);
    for _ in 0..16 {
        writer.push_bit(1);
        writer.uint(0xF, 4);
    }
    writer.push_bit(0);
    writer.uint(0xF, 4);
    let err = BitsDecoder::new().decode(&writer.to_hex()).unwrap_err();
    assert_eq!(err, BitsError::LiteralOverflow);
}

// ------------------------------------------------------------ Round trips

#[test]
fn encode_decode_operator_tree() {
    let tree = Packet {
        version: 3,
        bits_read: 0,
        body: PacketBody::Operator {
            op: Operator::Sum,
            sub_packets: vec![
                Packet {
                    version: 0,
                    bits_read: 0,
                    body: PacketBody::Literal(42),
                },
                Packet {
                    version: 5,
                    bits_read: 0,
                    body: PacketBody::Operator {
                        op: Operator::Product,
                        sub_packets: vec![Packet {
                            version: 7,
                            bits_read: 0,
                            body: PacketBody::Literal(u64::MAX),
                        }],
                    },
                },
            ],
        },
    };
    let hex = BitsEncoder::new().encode_hex(&tree);
    let decoded = decode(&hex);
    assert_eq!(decoded.version, 3);
    assert_eq!(decoded.type_id(), 0);
    assert_eq!(literal_values(&decoded.sub_packets()[1])[0], u64::MAX);
}

proptest! {
    #[test]
    fn literal_round_trip(version in 0u8..8, value in any::<u64>()) {
        let packet = Packet {
            version,
            bits_read: 0,
            body: PacketBody::Literal(value),
        };
        let hex = BitsEncoder::new().encode_hex(&packet);
        let decoded = BitsDecoder::new().decode(&hex).unwrap();
        prop_assert_eq!(decoded.version, version);
        prop_assert_eq!(&decoded.body, &PacketBody::Literal(value));
        // Header plus one 5-bit group per nibble of the value.
        let nibbles = ((64 - value.leading_zeros() as usize) + 3) / 4;
        prop_assert_eq!(decoded.bits_read, 6 + 5 * nibbles.max(1));
    }
}
