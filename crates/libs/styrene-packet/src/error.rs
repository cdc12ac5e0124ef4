use crate::fingerprint::Fingerprint;

/// Errors from decoding packet bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("unknown packet type: {0}")]
    UnknownPacketType(Fingerprint),

    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("invalid sequence length: {0}")]
    InvalidLength(i32),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid ordinal {ordinal} for enum {enum_name}")]
    InvalidEnumOrdinal { enum_name: &'static str, ordinal: u16 },

    #[error("unexpected packet type: expected {expected}, found {found}")]
    UnexpectedPacketType { expected: &'static str, found: Fingerprint },

    #[error("packet nesting exceeds depth limit of {max}")]
    DepthLimitExceeded { max: usize },

    #[error("sequence of {len} elements exceeds limit of {max}")]
    SequenceTooLong { len: usize, max: usize },
}

/// Errors raised while populating a [`RegistryBuilder`](crate::RegistryBuilder).
///
/// These are initialisation-time programmer errors; they never surface from
/// a decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("fingerprint {fingerprint} already registered to {existing}, cannot register {attempted}")]
    DuplicateRegistration {
        fingerprint: Fingerprint,
        existing: &'static str,
        attempted: &'static str,
    },

    #[error("{type_name} registered as {expected} but its constructor builds {found}")]
    FingerprintMismatch { type_name: &'static str, expected: Fingerprint, found: Fingerprint },

    #[error("fingerprint 0x0000000000000000 is reserved for absent packets ({type_name})")]
    ReservedFingerprint { type_name: &'static str },
}
