//! Values shared with the conformance suites of the other runtimes.

use styrene_packet::AnyPacket;

use crate::enums::{DemoEnum, DemoEnum260, MyEnum};
use crate::packets::{DemoOuter, DemoPacket, DemoPacket2, DemoPacket3, DemoUnsigned, MyInner};

pub fn demo_packet3() -> DemoPacket3 {
    DemoPacket3 { possible: vec![DemoEnum::NoDoubt, DemoEnum::Yes] }
}

pub fn demo_packet() -> DemoPacket {
    DemoPacket {
        a_inner: vec![MyInner { i_integer: 777 }, MyInner { i_integer: 6666 }],
        a_outer: vec![DemoOuter { o_int: 282, o_string: ":-)".into() }],
        f_boolean: true,
        f_byte: 99,
        f_double: 1.23456789,
        f_enum: MyEnum::Maybe,
        f_float: 2.5,
        f_inner: Some(MyInner { i_integer: 88 }),
        f_int: 987_654_321,
        f_long: 101_112_131_415,
        f_outer: Some(DemoOuter { o_int: 191, o_string: String::new() }),
        f_short: 2345,
        f_string: "abcdefåäöàê".into(),
        o_enum: DemoEnum::NoDoubt,
        x_packet: Some(AnyPacket::new(demo_packet3())),
    }
}

pub fn demo_packet2() -> DemoPacket2 {
    DemoPacket2 {
        a_boolean: vec![
            true, false, true, false, true, false, true, false, false, true, false, true, false,
            true, false, true, false, false, true,
        ],
        a_byte: vec![99, 98, 97, 96],
        a_double: vec![1.23456789, 2.3456789],
        a_empty: vec![],
        a_float: vec![2.5],
        a_int: vec![987_654_321, 87_654_321],
        a_large_enum: vec![DemoEnum260::Z3, DemoEnum260::D7, DemoEnum260::Z7],
        a_long: vec![101_112_131_415, 1_617_181_920],
        a_short: vec![2345, 3456, 4567],
        a_string: ["abcdef", "xyz", "w", "", "asdfghjkl;"].map(String::from).to_vec(),
        large_enum1: DemoEnum260::Z8,
        large_enum2: DemoEnum260::B3,
    }
}

pub fn demo_unsigned() -> DemoUnsigned {
    DemoUnsigned {
        a0: true,
        a2: true,
        a4: true,
        a6: true,
        b1: true,
        b3: true,
        b5: true,
        b7: true,
        c2: true,
        lub: vec![201, 5],
        lus: vec![43_210, 1234],
        ub: 200,
        us: 45_678,
        ..DemoUnsigned::default()
    }
}
