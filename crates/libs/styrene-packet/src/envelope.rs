//! Envelope encode/decode.
//!
//! An envelope is the 8-byte big-endian fingerprint followed by the body the
//! packet type writes for itself. Nested packets, whether declared with a
//! concrete type or as "any packet", are written as full envelopes too, so a
//! reader can always recover the run-time type from the bytes.

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::codec::{read_sequence_length, write_sequence_length, Decode, Encode};
use crate::error::DecodeError;
use crate::fingerprint::{Fingerprint, FINGERPRINT_SIZE};
use crate::packet::{AnyPacket, Packet, PacketType, WireEnum};
use crate::registry::Registry;

/// Serializes a packet into a fresh envelope.
pub fn serialize<P: Packet + ?Sized>(packet: &P) -> Vec<u8> {
    let mut out = OutputBuffer::with_capacity(FINGERPRINT_SIZE);
    serialize_into(packet, &mut out);
    out.into_vec()
}

/// Appends a packet's envelope to `out`.
pub fn serialize_into<P: Packet + ?Sized>(packet: &P, out: &mut OutputBuffer) {
    PacketWriter::new(out).write_envelope(packet);
}

/// Decodes an envelope into whichever registered type its header names.
pub fn deserialize(registry: &Registry, data: &[u8]) -> Result<AnyPacket, DecodeError> {
    let mut reader = PacketReader::new(registry, data);
    let fingerprint: Fingerprint = reader.read()?;
    log::trace!("envelope: decoding {} ({} body bytes)", fingerprint, reader.bytes_left());

    reader.read_envelope(fingerprint).map_err(|err| {
        if let DecodeError::UnknownPacketType(unknown) = &err {
            log::debug!("envelope: no packet type registered for {}", unknown);
        }
        err
    })
}

/// Decodes an envelope that must hold a `T`.
pub fn deserialize_as<T: PacketType>(registry: &Registry, data: &[u8]) -> Result<T, DecodeError> {
    deserialize(registry, data)?.downcast::<T>().map_err(|other| {
        DecodeError::UnexpectedPacketType { expected: T::NAME, found: other.fingerprint() }
    })
}

/// Field writer handed to [`Packet::serialize_fields`].
pub struct PacketWriter<'a> {
    out: &'a mut OutputBuffer,
}

impl<'a> PacketWriter<'a> {
    pub fn new(out: &'a mut OutputBuffer) -> Self {
        Self { out }
    }

    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self.out);
    }

    pub fn write_sequence<T: Encode>(&mut self, items: &[T]) {
        write_sequence_length(self.out, items.len());
        for item in items {
            item.encode(self.out);
        }
    }

    pub fn write_enum<E: WireEnum>(&mut self, value: E) {
        let ordinal = value.ordinal();
        if E::is_wide() {
            ordinal.encode(self.out);
        } else {
            self.out.write_byte(ordinal as u8);
        }
    }

    pub fn write_enum_sequence<E: WireEnum>(&mut self, items: &[E]) {
        write_sequence_length(self.out, items.len());
        for item in items {
            self.write_enum(*item);
        }
    }

    /// Writes a full envelope: fingerprint then body.
    pub fn write_envelope<P: Packet + ?Sized>(&mut self, packet: &P) {
        packet.fingerprint().encode(self.out);
        packet.serialize_fields(self);
    }

    /// Optional packet field. Absent values are written as a zero fingerprint.
    pub fn write_packet<P: Packet + ?Sized>(&mut self, packet: Option<&P>) {
        match packet {
            Some(packet) => self.write_envelope(packet),
            None => Fingerprint::ABSENT.encode(self.out),
        }
    }

    pub fn write_packet_sequence<P: Packet>(&mut self, items: &[P]) {
        write_sequence_length(self.out, items.len());
        for item in items {
            self.write_envelope(item);
        }
    }

    pub fn write_any_sequence(&mut self, items: &[AnyPacket]) {
        write_sequence_length(self.out, items.len());
        for item in items {
            self.write_envelope(&**item);
        }
    }
}

/// Field reader handed to [`Packet::populate`].
///
/// Nested packets are resolved through the same [`Registry`] as the
/// enclosing envelope, within its [`DecodeLimits`](crate::DecodeLimits).
pub struct PacketReader<'a> {
    input: InputBuffer<'a>,
    registry: &'a Registry,
    depth: usize,
}

impl<'a> PacketReader<'a> {
    pub fn new(registry: &'a Registry, data: &'a [u8]) -> Self {
        Self { input: InputBuffer::new(data), registry, depth: 0 }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn bytes_left(&self) -> usize {
        self.input.bytes_left()
    }

    pub fn read<T: Decode>(&mut self) -> Result<T, DecodeError> {
        T::decode(&mut self.input)
    }

    pub fn read_sequence<T: Decode>(&mut self) -> Result<Vec<T>, DecodeError> {
        let len = self.read_length()?;
        let mut items = Vec::with_capacity(len.min(self.input.bytes_left()));
        for _ in 0..len {
            items.push(T::decode(&mut self.input)?);
        }
        Ok(items)
    }

    pub fn read_enum<E: WireEnum>(&mut self) -> Result<E, DecodeError> {
        let ordinal = if E::is_wide() {
            u16::decode(&mut self.input)?
        } else {
            u16::from(self.input.read_byte()?)
        };
        E::from_ordinal(ordinal)
            .ok_or(DecodeError::InvalidEnumOrdinal { enum_name: E::NAME, ordinal })
    }

    pub fn read_enum_sequence<E: WireEnum>(&mut self) -> Result<Vec<E>, DecodeError> {
        let len = self.read_length()?;
        let mut items = Vec::with_capacity(len.min(self.input.bytes_left()));
        for _ in 0..len {
            items.push(self.read_enum()?);
        }
        Ok(items)
    }

    /// Optional "any packet" field. A zero fingerprint reads as `None`.
    pub fn read_packet(&mut self) -> Result<Option<AnyPacket>, DecodeError> {
        let fingerprint: Fingerprint = self.read()?;
        if fingerprint.is_absent() {
            return Ok(None);
        }
        self.read_envelope(fingerprint).map(Some)
    }

    /// Optional field declared with a concrete packet type.
    pub fn read_packet_as<T: PacketType>(&mut self) -> Result<Option<T>, DecodeError> {
        let fingerprint: Fingerprint = self.read()?;
        if fingerprint.is_absent() {
            return Ok(None);
        }
        self.read_typed_envelope(fingerprint).map(Some)
    }

    pub fn read_packet_sequence<T: PacketType>(&mut self) -> Result<Vec<T>, DecodeError> {
        let len = self.read_length()?;
        let mut items = Vec::with_capacity(len.min(self.input.bytes_left() / FINGERPRINT_SIZE));
        for _ in 0..len {
            let fingerprint: Fingerprint = self.read()?;
            items.push(self.read_typed_envelope(fingerprint)?);
        }
        Ok(items)
    }

    pub fn read_any_sequence(&mut self) -> Result<Vec<AnyPacket>, DecodeError> {
        let len = self.read_length()?;
        let mut items = Vec::with_capacity(len.min(self.input.bytes_left() / FINGERPRINT_SIZE));
        for _ in 0..len {
            let fingerprint: Fingerprint = self.read()?;
            items.push(self.read_envelope(fingerprint)?);
        }
        Ok(items)
    }

    /// Resolves `fingerprint` and populates a fresh instance from the body
    /// that follows.
    pub fn read_envelope(&mut self, fingerprint: Fingerprint) -> Result<AnyPacket, DecodeError> {
        let max = self.registry.limits().max_depth;
        if self.depth >= max {
            return Err(DecodeError::DepthLimitExceeded { max });
        }

        let mut packet = self.registry.instantiate(fingerprint)?;
        self.depth += 1;
        let populated = packet.populate(self);
        self.depth -= 1;
        populated?;

        Ok(AnyPacket::from_box(packet))
    }

    fn read_typed_envelope<T: PacketType>(
        &mut self,
        fingerprint: Fingerprint,
    ) -> Result<T, DecodeError> {
        self.registry.lookup(fingerprint)?;
        if fingerprint != T::FINGERPRINT {
            return Err(DecodeError::UnexpectedPacketType { expected: T::NAME, found: fingerprint });
        }

        self.read_envelope(fingerprint)?
            .downcast::<T>()
            .map_err(|_| DecodeError::UnexpectedPacketType { expected: T::NAME, found: fingerprint })
    }

    fn read_length(&mut self) -> Result<usize, DecodeError> {
        let len = read_sequence_length(&mut self.input)?;
        let max = self.registry.limits().max_sequence_len;
        if len > max {
            return Err(DecodeError::SequenceTooLong { len, max });
        }
        Ok(len)
    }
}
