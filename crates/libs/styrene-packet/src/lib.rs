//! # styrene-packet
//!
//! Fingerprinted binary packet codec with polymorphic decode.
//!
//! Packet types are produced by a schema compiler. Each type carries a 64-bit
//! fingerprint derived from its schema, and every encoded packet starts with
//! that fingerprint so a decoder can find the concrete type at run time. The
//! byte layout is shared with the Java, Go and Python runtimes: all of them
//! must produce and consume identical byte sequences.
//!
//! ## Wire Format
//!
//! ```text
//! [fingerprint:8][field:*]...
//!  i64 BE         fields in ascending name order
//!
//! sequence length:  [n:1]            when n < 255
//!                   [0xFF][n:4]      otherwise, i32 BE
//! string:           [len][utf-8 bytes]
//! nested packet:    [fingerprint:8][fields]   (fingerprint 0 = absent)
//! enum:             [ordinal:1]  or [ordinal:2] above 256 variants
//! ```
//!
//! ## Example
//!
//! ```rust
//! use styrene_packet::{
//!     packet_text, deserialize, serialize, DecodeError, FieldWriter, Fingerprint, Packet,
//!     PacketReader, PacketType, PacketWriter, Registry,
//! };
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Ping {
//!     seq: i32,
//! }
//!
//! impl Packet for Ping {
//!     fn render_fields(&self, out: &mut FieldWriter) {
//!         out.scalar("seq", self.seq);
//!     }
//!
//!     fn fingerprint(&self) -> Fingerprint {
//!         Self::FINGERPRINT
//!     }
//!
//!     fn populate(&mut self, reader: &mut PacketReader<'_>) -> Result<(), DecodeError> {
//!         self.seq = reader.read()?;
//!         Ok(())
//!     }
//!
//!     fn serialize_fields(&self, writer: &mut PacketWriter<'_>) {
//!         writer.write(&self.seq);
//!     }
//!
//!     fn to_text(&self) -> String {
//!         packet_text(self, Self::NAME)
//!     }
//! }
//!
//! impl PacketType for Ping {
//!     const FINGERPRINT: Fingerprint = Fingerprint::new(0x1122_3344_5566_7788);
//!     const NAME: &'static str = "Ping";
//! }
//!
//! let mut builder = Registry::builder();
//! builder.register::<Ping>().unwrap();
//! let registry = builder.seal();
//!
//! let bytes = serialize(&Ping { seq: 7 });
//! let decoded = deserialize(&registry, &bytes).unwrap();
//! assert_eq!(decoded.downcast_ref::<Ping>(), Some(&Ping { seq: 7 }));
//! assert_eq!(decoded.to_text(), "{Ping 0x1122334455667788 seq=7}");
//! ```
//!
//! ## Crate Family
//!
//! This crate is part of the [styrene-rs](https://github.com/styrene-lab/styrene-rs)
//! workspace:
//!
//! - **`styrene-packet`** (this crate) — Packet codec runtime
//! - `test-support` — Generated demo packets, cross-runtime fixtures and benches

pub mod buffer;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fingerprint;
pub mod narrow;
pub mod packet;
pub mod registry;
pub mod text;

pub use buffer::{InputBuffer, OutputBuffer};
pub use codec::{read_sequence_length, write_sequence_length, Decode, Encode};
pub use config::{DecodeLimits, DEFAULT_MAX_DEPTH};
pub use envelope::{deserialize, deserialize_as, serialize, serialize_into, PacketReader, PacketWriter};
pub use error::{DecodeError, RegistryError};
pub use fingerprint::{Fingerprint, FINGERPRINT_SIZE};
pub use narrow::NarrowInt;
pub use packet::{AnyPacket, AsAny, Packet, PacketType, WireEnum};
pub use registry::{Constructor, Registry, RegistryBuilder};
pub use text::{packet_text, FieldWriter};
