//! 64-bit schema fingerprints.
//!
//! A fingerprint identifies the shape of a packet type: its name and its
//! ordered list of encodable field names. The schema compiler derives it;
//! this crate only carries it around as an opaque value.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::codec::{Decode, Encode};
use crate::error::DecodeError;

/// Size of the fingerprint header that starts every envelope.
pub const FINGERPRINT_SIZE: usize = 8;

/// Schema fingerprint of a packet type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(i64);

impl Fingerprint {
    /// Marks an absent optional packet on the wire. Never registrable.
    pub const ABSENT: Fingerprint = Fingerprint(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_absent(self) -> bool {
        self.0 == 0
    }

    pub const fn to_be_bytes(self) -> [u8; FINGERPRINT_SIZE] {
        self.0.to_be_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(i64::from_be_bytes(bytes))
    }
}

impl From<i64> for Fingerprint {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Fingerprint> for i64 {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}

impl fmt::UpperHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&(self.0 as u64), f)
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&(self.0 as u64), f)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.0 as u64)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({} = {})", self.0, self)
    }
}

impl Encode for Fingerprint {
    fn encode(&self, out: &mut OutputBuffer) {
        self.0.encode(out);
    }
}

impl Decode for Fingerprint {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
        i64::decode(input).map(Self)
    }
}
