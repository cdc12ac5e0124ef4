//! The capability set every generated packet type implements.

use core::any::Any;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::envelope::{serialize, PacketReader, PacketWriter};
use crate::error::DecodeError;
use crate::fingerprint::Fingerprint;
use crate::text::FieldWriter;

/// Downcasting support for trait objects.
///
/// Blanket-implemented for every `'static` type; generated code never
/// implements it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A fingerprinted, self-describing wire value.
///
/// Implementations come from the schema compiler. Field order inside
/// `render_fields`, `serialize_fields` and `populate` must be the ascending
/// lexicographic order of the schema field names, and all three must agree.
pub trait Packet: AsAny + fmt::Debug + Send + Sync {
    /// Appends ` name=value` fragments for every non-default field.
    fn render_fields(&self, out: &mut FieldWriter);

    fn fingerprint(&self) -> Fingerprint;

    /// Reads the body, field by field, into a zero-value instance.
    fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError>;

    /// Writes the body, field by field. The fingerprint header is written by
    /// the envelope, not here.
    fn serialize_fields(&self, writer: &mut PacketWriter<'_>);

    /// Full single-line textual form, see [`packet_text`](crate::packet_text).
    fn to_text(&self) -> String;
}

/// Static identity of a concrete packet type.
pub trait PacketType: Packet + Default + Sized {
    const FINGERPRINT: Fingerprint;
    const NAME: &'static str;
}

impl dyn Packet {
    pub fn is<T: Packet>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    pub fn downcast_ref<T: Packet>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Packet>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut::<T>()
    }
}

/// A generated enumeration carried by ordinal.
///
/// Enumerations with at most 256 variants travel as one byte, larger ones as
/// a big-endian `u16`. Ordinal 0 is the unset value.
pub trait WireEnum: Copy + Default + 'static {
    const NAME: &'static str;

    /// Variant names in ordinal order.
    const VARIANTS: &'static [&'static str];

    fn ordinal(self) -> u16;

    fn from_ordinal(ordinal: u16) -> Option<Self>;

    fn variant_name(self) -> &'static str {
        Self::VARIANTS.get(usize::from(self.ordinal())).copied().unwrap_or("")
    }

    fn is_wide() -> bool {
        Self::VARIANTS.len() > 256
    }
}

/// Owned packet of any registered type, resolved at decode time.
///
/// Used for schema fields declared as "any packet" and returned by
/// [`deserialize`](crate::deserialize).
pub struct AnyPacket(Box<dyn Packet>);

impl AnyPacket {
    pub fn new<P: Packet>(packet: P) -> Self {
        Self(Box::new(packet))
    }

    pub fn from_box(packet: Box<dyn Packet>) -> Self {
        Self(packet)
    }

    pub fn into_box(self) -> Box<dyn Packet> {
        self.0
    }

    /// Takes the concrete value out, or hands `self` back on a type mismatch.
    pub fn downcast<T: PacketType>(mut self) -> Result<T, Self> {
        match self.0.downcast_mut::<T>() {
            Some(packet) => Ok(mem::take(packet)),
            None => Err(self),
        }
    }
}

impl Deref for AnyPacket {
    type Target = dyn Packet;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl DerefMut for AnyPacket {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}

impl<P: Packet> From<P> for AnyPacket {
    fn from(packet: P) -> Self {
        Self::new(packet)
    }
}

impl fmt::Debug for AnyPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for AnyPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_text())
    }
}

/// Two packets are equal when they carry the same fingerprint and encode to
/// the same bytes.
impl PartialEq for AnyPacket {
    fn eq(&self, other: &Self) -> bool {
        self.0.fingerprint() == other.0.fingerprint() && serialize(&*self.0) == serialize(&*other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::packet_text;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Ping {
        seq: i32,
    }

    impl Packet for Ping {
        fn render_fields(&self, out: &mut FieldWriter) {
            out.scalar("seq", self.seq);
        }

        fn fingerprint(&self) -> Fingerprint {
            Self::FINGERPRINT
        }

        fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
            self.seq = reader.read()?;
            Ok(())
        }

        fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
            writer.write(&self.seq);
        }

        fn to_text(&self) -> String {
            packet_text(self, Self::NAME)
        }
    }

    impl PacketType for Ping {
        const FINGERPRINT: Fingerprint = Fingerprint::new(11);
        const NAME: &'static str = "Ping";
    }

    #[derive(Debug, Default)]
    struct Pong;

    impl Packet for Pong {
        fn render_fields(&self, _out: &mut FieldWriter) {}

        fn fingerprint(&self) -> Fingerprint {
            Fingerprint::new(12)
        }

        fn populate(&mut self, _reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
            Ok(())
        }

        fn serialize_fields(&self, _writer: &mut PacketWriter<'_>) {}

        fn to_text(&self) -> String {
            packet_text(self, "Pong")
        }
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Answer {
        #[default]
        Unset,
        Yes,
    }

    impl WireEnum for Answer {
        const NAME: &'static str = "Answer";
        const VARIANTS: &'static [&'static str] = &["UNSET", "YES"];

        fn ordinal(self) -> u16 {
            self as u16
        }

        fn from_ordinal(ordinal: u16) -> Option<Self> {
            match ordinal {
                0 => Some(Self::Unset),
                1 => Some(Self::Yes),
                _ => None,
            }
        }
    }

    #[test]
    fn downcast_through_trait_object() {
        let packet: Box<dyn Packet> = Box::new(Ping { seq: 4 });
        assert!(packet.is::<Ping>());
        assert!(!packet.is::<Pong>());
        assert_eq!(packet.downcast_ref::<Ping>(), Some(&Ping { seq: 4 }));
        assert!(packet.downcast_ref::<Pong>().is_none());
    }

    #[test]
    fn any_packet_downcast_hands_back_on_mismatch() {
        let any = AnyPacket::new(Pong);
        let any = any.downcast::<Ping>().expect_err("Pong is not Ping");
        assert_eq!(any.fingerprint(), Fingerprint::new(12));

        let ping = AnyPacket::from(Ping { seq: 9 }).downcast::<Ping>().expect("is Ping");
        assert_eq!(ping.seq, 9);
    }

    #[test]
    fn any_packet_equality_is_by_bytes() {
        assert_eq!(AnyPacket::new(Ping { seq: 1 }), AnyPacket::new(Ping { seq: 1 }));
        assert_ne!(AnyPacket::new(Ping { seq: 1 }), AnyPacket::new(Ping { seq: 2 }));
        assert_ne!(AnyPacket::new(Ping::default()), AnyPacket::new(Pong));
    }

    #[test]
    fn any_packet_displays_text_form() {
        let any = AnyPacket::new(Ping { seq: 3 });
        assert_eq!(any.to_string(), "{Ping 0x000000000000000B seq=3}");
    }

    #[test]
    fn enum_names_follow_ordinals() {
        assert_eq!(Answer::Yes.variant_name(), "YES");
        assert_eq!(Answer::default().variant_name(), "UNSET");
        assert!(!Answer::is_wide());
        assert_eq!(Answer::from_ordinal(2), None);
    }
}
