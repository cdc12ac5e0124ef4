//! Primitive codec.
//!
//! Every scalar is big-endian two's complement. Strings and sequences are
//! prefixed by a [sequence length](write_sequence_length): one byte for counts
//! below 255, otherwise `0xFF` followed by a 4-byte big-endian count.

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::error::DecodeError;

/// Marker byte of the extended sequence length form.
const EXTENDED_LENGTH_MARKER: u8 = 255;

/// A value with a fixed wire encoding.
pub trait Encode {
    fn encode(&self, out: &mut OutputBuffer);
}

/// A value that can be read back from its wire encoding.
pub trait Decode: Sized {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError>;
}

impl Encode for bool {
    fn encode(&self, out: &mut OutputBuffer) {
        out.write_byte(u8::from(*self));
    }
}

impl Decode for bool {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
        Ok(input.read_byte()? == 1)
    }
}

macro_rules! impl_be_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut OutputBuffer) {
                    out.write(&self.to_be_bytes());
                }
            }

            impl Decode for $ty {
                fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
                    Ok(<$ty>::from_be_bytes(input.read_array()?))
                }
            }
        )*
    };
}

impl_be_codec!(i8, u8, i16, u16, i32, i64);

impl Encode for f32 {
    fn encode(&self, out: &mut OutputBuffer) {
        (self.to_bits() as i32).encode(out);
    }
}

impl Decode for f32 {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
        Ok(f32::from_bits(i32::decode(input)? as u32))
    }
}

impl Encode for f64 {
    fn encode(&self, out: &mut OutputBuffer) {
        (self.to_bits() as i64).encode(out);
    }
}

impl Decode for f64 {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
        Ok(f64::from_bits(i64::decode(input)? as u64))
    }
}

impl Encode for str {
    fn encode(&self, out: &mut OutputBuffer) {
        write_sequence_length(out, self.len());
        out.write(self.as_bytes());
    }
}

impl Encode for String {
    fn encode(&self, out: &mut OutputBuffer) {
        self.as_str().encode(out);
    }
}

impl Decode for String {
    fn decode(input: &mut InputBuffer<'_>) -> Result<Self, DecodeError> {
        let len = read_sequence_length(input)?;
        let bytes = input.read_slice(len)?;
        core::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut OutputBuffer) {
        (**self).encode(out);
    }
}

/// Writes a sequence length prefix.
///
/// # Panics
///
/// Panics if `len` exceeds `i32::MAX`, which the wire format cannot express.
pub fn write_sequence_length(out: &mut OutputBuffer, len: usize) {
    if len < usize::from(EXTENDED_LENGTH_MARKER) {
        out.write_byte(len as u8);
        return;
    }

    assert!(len <= i32::MAX as usize, "sequence length {len} exceeds i32::MAX");
    out.write_byte(EXTENDED_LENGTH_MARKER);
    (len as i32).encode(out);
}

/// Reads a sequence length prefix.
pub fn read_sequence_length(input: &mut InputBuffer<'_>) -> Result<usize, DecodeError> {
    let short = input.read_byte()?;
    if short < EXTENDED_LENGTH_MARKER {
        return Ok(usize::from(short));
    }

    let long = i32::decode(input)?;
    usize::try_from(long).map_err(|_| DecodeError::InvalidLength(long))
}
