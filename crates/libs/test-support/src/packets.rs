//! Packet types emitted for the demo schema.
//!
//! Field order inside every `render_fields`, `populate` and
//! `serialize_fields` is the sorted order of the schema field names.

use styrene_packet::{
    packet_text, AnyPacket, DecodeError, FieldWriter, Fingerprint, Packet, PacketReader,
    PacketType, PacketWriter,
};

use crate::enums::{DemoEnum, DemoEnum260, MyEnum};

/// Packet declared inside `DemoPacket`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MyInner {
    pub i_integer: i32,
}

impl Packet for MyInner {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.scalar("iInteger", self.i_integer);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.i_integer = reader.read()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write(&self.i_integer);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for MyInner {
    const FINGERPRINT: Fingerprint = Fingerprint::new(1_039_418_807_331_689_383);
    const NAME: &'static str = "MyInner";
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoOuter {
    pub o_int: i32,
    pub o_string: String,
}

impl Packet for DemoOuter {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.scalar("oInt", self.o_int);
        out.string("oString", &self.o_string);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.o_int = reader.read()?;
        self.o_string = reader.read()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write(&self.o_int);
        writer.write(&self.o_string);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoOuter {
    const FINGERPRINT: Fingerprint = Fingerprint::new(-3_118_264_095_331_802_390);
    const NAME: &'static str = "DemoOuter";
}

/// One field of every scalar kind, plus nested and polymorphic packets.
#[derive(Debug, Default, PartialEq)]
pub struct DemoPacket {
    pub a_inner: Vec<MyInner>,
    pub a_outer: Vec<DemoOuter>,
    pub f_boolean: bool,
    pub f_byte: i8,
    pub f_double: f64,
    pub f_enum: MyEnum,
    pub f_float: f32,
    pub f_inner: Option<MyInner>,
    pub f_int: i32,
    pub f_long: i64,
    pub f_outer: Option<DemoOuter>,
    pub f_short: i16,
    pub f_string: String,
    pub o_enum: DemoEnum,
    pub x_packet: Option<AnyPacket>,
}

impl Packet for DemoPacket {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.packet_sequence("aInner", MyInner::NAME, &self.a_inner);
        out.packet_sequence("aOuter", DemoOuter::NAME, &self.a_outer);
        out.boolean("fBoolean", self.f_boolean);
        out.scalar("fByte", self.f_byte);
        out.scalar("fDouble", self.f_double);
        out.enumeration("fEnum", self.f_enum);
        out.scalar("fFloat", self.f_float);
        out.packet("fInner", self.f_inner.as_ref());
        out.scalar("fInt", self.f_int);
        out.scalar("fLong", self.f_long);
        out.packet("fOuter", self.f_outer.as_ref());
        out.scalar("fShort", self.f_short);
        out.string("fString", &self.f_string);
        out.enumeration("oEnum", self.o_enum);
        out.packet("xPacket", self.x_packet.as_deref());
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.a_inner = reader.read_packet_sequence()?;
        self.a_outer = reader.read_packet_sequence()?;
        self.f_boolean = reader.read()?;
        self.f_byte = reader.read()?;
        self.f_double = reader.read()?;
        self.f_enum = reader.read_enum()?;
        self.f_float = reader.read()?;
        self.f_inner = reader.read_packet_as()?;
        self.f_int = reader.read()?;
        self.f_long = reader.read()?;
        self.f_outer = reader.read_packet_as()?;
        self.f_short = reader.read()?;
        self.f_string = reader.read()?;
        self.o_enum = reader.read_enum()?;
        self.x_packet = reader.read_packet()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_packet_sequence(&self.a_inner);
        writer.write_packet_sequence(&self.a_outer);
        writer.write(&self.f_boolean);
        writer.write(&self.f_byte);
        writer.write(&self.f_double);
        writer.write_enum(self.f_enum);
        writer.write(&self.f_float);
        writer.write_packet(self.f_inner.as_ref());
        writer.write(&self.f_int);
        writer.write(&self.f_long);
        writer.write_packet(self.f_outer.as_ref());
        writer.write(&self.f_short);
        writer.write(&self.f_string);
        writer.write_enum(self.o_enum);
        writer.write_packet(self.x_packet.as_deref());
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoPacket {
    const FINGERPRINT: Fingerprint = Fingerprint::new(-3_377_904_526_771_042_813);
    const NAME: &'static str = "DemoPacket";
}

/// One sequence field of every element kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoPacket2 {
    pub a_boolean: Vec<bool>,
    pub a_byte: Vec<i8>,
    pub a_double: Vec<f64>,
    pub a_empty: Vec<String>,
    pub a_float: Vec<f32>,
    pub a_int: Vec<i32>,
    pub a_large_enum: Vec<DemoEnum260>,
    pub a_long: Vec<i64>,
    pub a_short: Vec<i16>,
    pub a_string: Vec<String>,
    pub large_enum1: DemoEnum260,
    pub large_enum2: DemoEnum260,
}

impl Packet for DemoPacket2 {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.bool_sequence("aBoolean", &self.a_boolean);
        out.sequence("aByte", "byte", &self.a_byte);
        out.sequence("aDouble", "double", &self.a_double);
        out.string_sequence("aEmpty", &self.a_empty);
        out.sequence("aFloat", "float", &self.a_float);
        out.sequence("aInt", "int", &self.a_int);
        out.enum_sequence("aLargeEnum", &self.a_large_enum);
        out.sequence("aLong", "long", &self.a_long);
        out.sequence("aShort", "short", &self.a_short);
        out.string_sequence("aString", &self.a_string);
        out.enumeration("largeEnum1", self.large_enum1);
        out.enumeration("largeEnum2", self.large_enum2);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.a_boolean = reader.read_sequence()?;
        self.a_byte = reader.read_sequence()?;
        self.a_double = reader.read_sequence()?;
        self.a_empty = reader.read_sequence()?;
        self.a_float = reader.read_sequence()?;
        self.a_int = reader.read_sequence()?;
        self.a_large_enum = reader.read_enum_sequence()?;
        self.a_long = reader.read_sequence()?;
        self.a_short = reader.read_sequence()?;
        self.a_string = reader.read_sequence()?;
        self.large_enum1 = reader.read_enum()?;
        self.large_enum2 = reader.read_enum()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_sequence(&self.a_boolean);
        writer.write_sequence(&self.a_byte);
        writer.write_sequence(&self.a_double);
        writer.write_sequence(&self.a_empty);
        writer.write_sequence(&self.a_float);
        writer.write_sequence(&self.a_int);
        writer.write_enum_sequence(&self.a_large_enum);
        writer.write_sequence(&self.a_long);
        writer.write_sequence(&self.a_short);
        writer.write_sequence(&self.a_string);
        writer.write_enum(self.large_enum1);
        writer.write_enum(self.large_enum2);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoPacket2 {
    const FINGERPRINT: Fingerprint = Fingerprint::new(-4_035_910_894_404_497_038);
    const NAME: &'static str = "DemoPacket2";
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoPacket3 {
    pub possible: Vec<DemoEnum>,
}

impl Packet for DemoPacket3 {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.enum_sequence("possible", &self.possible);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.possible = reader.read_enum_sequence()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_enum_sequence(&self.possible);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoPacket3 {
    const FINGERPRINT: Fingerprint = Fingerprint::new(3_706_623_474_888_074_790);
    const NAME: &'static str = "DemoPacket3";
}

/// Unsigned narrow fields and a run of booleans.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoUnsigned {
    pub a0: bool,
    pub a1: bool,
    pub a2: bool,
    pub a3: bool,
    pub a4: bool,
    pub a5: bool,
    pub a6: bool,
    pub a7: bool,
    pub b0: bool,
    pub b1: bool,
    pub b2: bool,
    pub b3: bool,
    pub b4: bool,
    pub b5: bool,
    pub b6: bool,
    pub b7: bool,
    pub c0: bool,
    pub c1: bool,
    pub c2: bool,
    pub lub: Vec<u8>,
    pub lus: Vec<u16>,
    pub ub: u8,
    pub us: u16,
}

impl DemoUnsigned {
    fn flags(&self) -> [(&'static str, bool); 19] {
        [
            ("a0", self.a0),
            ("a1", self.a1),
            ("a2", self.a2),
            ("a3", self.a3),
            ("a4", self.a4),
            ("a5", self.a5),
            ("a6", self.a6),
            ("a7", self.a7),
            ("b0", self.b0),
            ("b1", self.b1),
            ("b2", self.b2),
            ("b3", self.b3),
            ("b4", self.b4),
            ("b5", self.b5),
            ("b6", self.b6),
            ("b7", self.b7),
            ("c0", self.c0),
            ("c1", self.c1),
            ("c2", self.c2),
        ]
    }

    fn flags_mut(&mut self) -> [&mut bool; 19] {
        [
            &mut self.a0,
            &mut self.a1,
            &mut self.a2,
            &mut self.a3,
            &mut self.a4,
            &mut self.a5,
            &mut self.a6,
            &mut self.a7,
            &mut self.b0,
            &mut self.b1,
            &mut self.b2,
            &mut self.b3,
            &mut self.b4,
            &mut self.b5,
            &mut self.b6,
            &mut self.b7,
            &mut self.c0,
            &mut self.c1,
            &mut self.c2,
        ]
    }
}

impl Packet for DemoUnsigned {
    fn render_fields(&self, out: &mut FieldWriter) {
        for (name, value) in self.flags() {
            out.boolean(name, value);
        }
        out.unsigned_sequence("lub", "ubyte", &self.lub);
        out.unsigned_sequence("lus", "ushort", &self.lus);
        out.unsigned("ub", self.ub);
        out.unsigned("us", self.us);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        for flag in self.flags_mut() {
            *flag = reader.read()?;
        }
        self.lub = reader.read_sequence()?;
        self.lus = reader.read_sequence()?;
        self.ub = reader.read()?;
        self.us = reader.read()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        for (_, value) in self.flags() {
            writer.write(&value);
        }
        writer.write_sequence(&self.lub);
        writer.write_sequence(&self.lus);
        writer.write(&self.ub);
        writer.write(&self.us);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoUnsigned {
    const FINGERPRINT: Fingerprint = Fingerprint::new(4_436_886_959_950_420_991);
    const NAME: &'static str = "DemoUnsigned";
}

/// `DemoVersion` as it was before `origin` was added. Kept registered so
/// payloads from older peers still decode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoVersion3FC7F86674610139 {
    pub count: i32,
    pub label: String,
}

impl Packet for DemoVersion3FC7F86674610139 {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.scalar("count", self.count);
        out.string("label", &self.label);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.count = reader.read()?;
        self.label = reader.read()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write(&self.count);
        writer.write(&self.label);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoVersion3FC7F86674610139 {
    const FINGERPRINT: Fingerprint = Fingerprint::new(4_595_915_063_677_747_513);
    const NAME: &'static str = "DemoVersion\u{394}3FC7F86674610139";
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoVersion {
    pub count: i32,
    pub label: String,
    pub origin: i64,
}

impl From<&DemoVersion3FC7F86674610139> for DemoVersion {
    fn from(other: &DemoVersion3FC7F86674610139) -> Self {
        Self { count: other.count, label: other.label.clone(), ..Self::default() }
    }
}

impl Packet for DemoVersion {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.scalar("count", self.count);
        out.string("label", &self.label);
        out.scalar("origin", self.origin);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.count = reader.read()?;
        self.label = reader.read()?;
        self.origin = reader.read()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write(&self.count);
        writer.write(&self.label);
        writer.write(&self.origin);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoVersion {
    const FINGERPRINT: Fingerprint = Fingerprint::new(7_260_826_007_793_545_337);
    const NAME: &'static str = "DemoVersion";
}

/// Embeds the deprecated `DemoVersion`, so its own fingerprint differs from
/// [`DemoIncludeVersion`] even though the field names match.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoIncludeVersion3D76B02436B66199 {
    pub version: Option<DemoVersion3FC7F86674610139>,
}

impl Packet for DemoIncludeVersion3D76B02436B66199 {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.packet("version", self.version.as_ref());
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.version = reader.read_packet_as()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_packet(self.version.as_ref());
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoIncludeVersion3D76B02436B66199 {
    const FINGERPRINT: Fingerprint = Fingerprint::new(4_428_920_953_148_694_937);
    const NAME: &'static str = "DemoIncludeVersion\u{394}3D76B02436B66199";
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoIncludeVersion {
    pub version: Option<DemoVersion>,
}

impl From<&DemoIncludeVersion3D76B02436B66199> for DemoIncludeVersion {
    fn from(other: &DemoIncludeVersion3D76B02436B66199) -> Self {
        Self { version: other.version.as_ref().map(DemoVersion::from) }
    }
}

impl Packet for DemoIncludeVersion {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.packet("version", self.version.as_ref());
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.version = reader.read_packet_as()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_packet(self.version.as_ref());
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoIncludeVersion {
    const FINGERPRINT: Fingerprint = Fingerprint::new(-4_044_184_110_803_273_943);
    const NAME: &'static str = "DemoIncludeVersion";
}

/// Bag of packets of any registered type.
#[derive(Debug, Default, PartialEq)]
pub struct DemoAny {
    pub items: Vec<AnyPacket>,
}

impl Packet for DemoAny {
    fn render_fields(&self, out: &mut FieldWriter) {
        out.any_sequence("items", &self.items);
    }

    fn fingerprint(&self) -> Fingerprint {
        Self::FINGERPRINT
    }

    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
        self.items = reader.read_any_sequence()?;
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
        writer.write_any_sequence(&self.items);
    }

    fn to_text(&self) -> String {
        packet_text(self, Self::NAME)
    }
}

impl PacketType for DemoAny {
    const FINGERPRINT: Fingerprint = Fingerprint::new(3_416_997_648_071_679_495);
    const NAME: &'static str = "DemoAny";
}
