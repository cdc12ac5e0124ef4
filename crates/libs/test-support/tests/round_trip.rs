use styrene_packet::{
    deserialize, deserialize_as, serialize, serialize_into, AnyPacket, Fingerprint, OutputBuffer,
    Packet, PacketReader, PacketType,
};
use test_support::fixtures::{demo_packet, demo_packet2, demo_packet3, demo_unsigned};
use test_support::{
    registry, DemoAny, DemoEnum, DemoEnum260, DemoOuter, DemoPacket, DemoPacket2, DemoPacket3,
    MyInner,
};

#[test]
fn default_values_round_trip() {
    let registry = registry().expect("demo registry");

    let bytes = serialize(&DemoPacket2::default());
    assert_eq!(deserialize_as::<DemoPacket2>(&registry, &bytes), Ok(DemoPacket2::default()));

    let bytes = serialize(&DemoPacket::default());
    assert_eq!(deserialize_as::<DemoPacket>(&registry, &bytes), Ok(DemoPacket::default()));
}

#[test]
fn extreme_scalars_round_trip() {
    let registry = registry().expect("demo registry");
    let packet = DemoPacket2 {
        a_byte: vec![i8::MIN, -1, 0, i8::MAX],
        a_double: vec![f64::MIN, -0.0, f64::MAX, f64::INFINITY],
        a_float: vec![f32::MIN_POSITIVE, f32::NEG_INFINITY],
        a_int: vec![i32::MIN, i32::MAX],
        a_long: vec![i64::MIN, i64::MAX],
        a_short: vec![i16::MIN, i16::MAX],
        a_string: vec![String::new(), "ünïcødé ✓".into()],
        large_enum1: DemoEnum260::Z9,
        ..DemoPacket2::default()
    };
    let decoded = deserialize_as::<DemoPacket2>(&registry, &serialize(&packet)).expect("decode");
    assert_eq!(decoded, packet);
    assert!(decoded.a_double[1].is_sign_negative());
}

#[test]
fn nan_keeps_its_bit_pattern() {
    let registry = registry().expect("demo registry");
    let nan = f64::from_bits(0x7ff8_0000_0000_0001);
    let packet = DemoPacket2 { a_double: vec![nan], ..DemoPacket2::default() };
    let decoded = deserialize_as::<DemoPacket2>(&registry, &serialize(&packet)).expect("decode");
    assert_eq!(decoded.a_double[0].to_bits(), nan.to_bits());
}

#[test]
fn fixtures_round_trip_through_any_packet() {
    let registry = registry().expect("demo registry");
    let packets = [
        AnyPacket::new(demo_packet()),
        AnyPacket::new(demo_packet2()),
        AnyPacket::new(demo_packet3()),
        AnyPacket::new(demo_unsigned()),
    ];
    for packet in packets {
        let decoded = deserialize(&registry, &serialize(&*packet)).expect("decode");
        assert_eq!(decoded.fingerprint(), packet.fingerprint());
        assert_eq!(decoded, packet);
    }
}

#[test]
fn nested_any_packet_of_each_type() {
    let registry = registry().expect("demo registry");
    let nested: Vec<AnyPacket> = vec![
        demo_packet().into(),
        demo_packet2().into(),
        MyInner { i_integer: -1 }.into(),
        DemoOuter { o_int: 5, o_string: "x".into() }.into(),
    ];
    for x_packet in nested {
        let text = x_packet.to_text();
        let packet = DemoPacket { x_packet: Some(x_packet), ..DemoPacket::default() };
        let decoded = deserialize_as::<DemoPacket>(&registry, &serialize(&packet)).expect("decode");
        assert_eq!(decoded.x_packet.expect("present").to_text(), text);
    }
}

fn possible(len: usize) -> DemoPacket3 {
    DemoPacket3 { possible: vec![DemoEnum::Yes; len] }
}

#[test]
fn sequence_length_boundary() {
    let registry = registry().expect("demo registry");

    let bytes = serialize(&possible(254));
    assert_eq!(bytes.len(), 8 + 1 + 254);
    assert_eq!(bytes[8], 0xfe);

    let bytes = serialize(&possible(255));
    assert_eq!(bytes.len(), 8 + 5 + 255);
    assert_eq!(&bytes[8..13], &[0xff, 0x00, 0x00, 0x00, 0xff]);

    let bytes = serialize(&possible(256));
    assert_eq!(bytes.len(), 8 + 5 + 256);
    assert_eq!(&bytes[8..13], &[0xff, 0x00, 0x00, 0x01, 0x00]);

    for len in [0, 1, 254, 255, 256, 70_000] {
        let decoded = deserialize_as::<DemoPacket3>(&registry, &serialize(&possible(len)))
            .expect("decode possible");
        assert_eq!(decoded.possible.len(), len);
    }
}

#[test]
fn three_hundred_booleans() {
    let packet = DemoPacket2 { a_boolean: vec![true; 300], ..DemoPacket2::default() };
    let bytes = serialize(&packet);

    assert_eq!(&bytes[8..13], &[0xff, 0x00, 0x00, 0x01, 0x2c]);
    assert!(bytes[13..313].iter().all(|b| *b == 0x01));
    // nine empty sequences, then two wide enum ordinals
    assert_eq!(&bytes[313..], &[0u8; 13][..]);

    let registry = registry().expect("demo registry");
    assert_eq!(deserialize_as::<DemoPacket2>(&registry, &bytes), Ok(packet));
}

#[test]
fn long_string_uses_extended_prefix() {
    let packet = DemoOuter { o_int: 0, o_string: "é".repeat(150) };
    let bytes = serialize(&packet);
    assert_eq!(&bytes[12..17], &[0xff, 0x00, 0x00, 0x01, 0x2c]);

    let registry = registry().expect("demo registry");
    assert_eq!(deserialize_as::<DemoOuter>(&registry, &bytes), Ok(packet));
}

#[test]
fn wide_enum_uses_two_bytes() {
    let packet = DemoPacket2 { large_enum2: DemoEnum260::Z8, ..DemoPacket2::default() };
    let bytes = serialize(&packet);
    assert_eq!(&bytes[bytes.len() - 4..], &[0x00, 0x00, 0x01, 0x02]);
}

fn mixed_bag() -> DemoAny {
    DemoAny {
        items: vec![
            MyInner { i_integer: 3 }.into(),
            DemoOuter { o_int: 1, o_string: "q".into() }.into(),
        ],
    }
}

#[test]
fn mixed_packet_sequence_round_trip() {
    let registry = registry().expect("demo registry");
    let bag = mixed_bag();
    let bytes = serialize(&bag);

    // header, count, then each element as fingerprint and body
    assert_eq!(bytes.len(), 8 + 1 + (8 + 4) + (8 + 4 + 1 + 1));
    assert_eq!(bytes[8], 2);
    assert_eq!(&bytes[9..17], &MyInner::FINGERPRINT.to_be_bytes());
    assert_eq!(&bytes[21..29], &DemoOuter::FINGERPRINT.to_be_bytes());

    let decoded = deserialize_as::<DemoAny>(&registry, &bytes).expect("decode");
    assert!(decoded.items[0].is::<MyInner>());
    assert!(decoded.items[1].is::<DemoOuter>());
    assert_eq!(decoded, bag);

    let nested = DemoAny { items: vec![bag.into(), demo_packet3().into()] };
    assert_eq!(deserialize_as::<DemoAny>(&registry, &serialize(&nested)), Ok(nested));
}

#[test]
fn mixed_packet_sequence_text() {
    assert_eq!(
        mixed_bag().to_text(),
        "{DemoAny 0x2F6B9D41C3A85E07 items={packet *2| iInteger=3| oInt=1 oString=\"q\"}}"
    );
    assert_eq!(DemoAny::default().to_text(), "{DemoAny 0x2F6B9D41C3A85E07}");
}

#[test]
fn envelopes_append_to_one_buffer() {
    let registry = registry().expect("demo registry");
    let first = demo_packet3();
    let second = mixed_bag();

    let mut out = OutputBuffer::new();
    serialize_into(&first, &mut out);
    let split = out.as_slice().len();
    serialize_into(&second, &mut out);
    assert_eq!(&out.as_slice()[..split], serialize(&first).as_slice());
    assert_eq!(&out.as_slice()[split..], serialize(&second).as_slice());

    let mut reader = PacketReader::new(&registry, out.as_slice());
    let fingerprint: Fingerprint = reader.read().expect("first header");
    let decoded = reader.read_envelope(fingerprint).expect("first body");
    assert_eq!(decoded, AnyPacket::new(first));

    let fingerprint: Fingerprint = reader.read().expect("second header");
    assert_eq!(fingerprint, DemoAny::FINGERPRINT);
    let decoded = reader.read_envelope(fingerprint).expect("second body");
    assert_eq!(decoded, AnyPacket::new(second));
    assert_eq!(reader.bytes_left(), 0);
}
