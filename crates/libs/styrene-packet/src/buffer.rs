use core::fmt;

use crate::error::DecodeError;

/// Growable byte sink used by every encoder.
///
/// Writes cannot fail: the buffer grows as needed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    buffer: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    pub fn write(&mut self, data: &[u8]) -> usize {
        self.buffer.extend_from_slice(data);
        data.len()
    }

    pub fn write_byte(&mut self, byte: u8) -> usize {
        self.buffer.push(byte);
        1
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ 0x")?;

        for byte in &self.buffer {
            write!(f, "{:0>2x}", byte)?;
        }

        write!(f, " ]",)
    }
}

/// Read cursor over borrowed bytes.
///
/// Reads past the end fail with [`DecodeError::TruncatedInput`] and leave the
/// cursor where it was. Missing bytes are never substituted.
#[derive(Debug, Clone)]
pub struct InputBuffer<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> InputBuffer<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { offset: 0, buffer }
    }

    pub fn read_slice(&mut self, size: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.bytes_left();
        if size > remaining {
            return Err(DecodeError::TruncatedInput { needed: size, remaining });
        }

        let slice = &self.buffer[self.offset..self.offset + size];
        self.offset += size;

        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bytes_left(&self) -> usize {
        self.buffer.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_display_is_hex() {
        let mut out = OutputBuffer::new();
        out.write(&[0x3a, 0xde]);
        out.write_byte(0x01);
        assert_eq!(out.to_string(), "[ 0x3ade01 ]");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let data = [1u8, 2, 3];
        let mut input = InputBuffer::new(&data);
        assert_eq!(input.read_byte().expect("first byte"), 1);
        assert_eq!(
            input.read_array::<4>(),
            Err(DecodeError::TruncatedInput { needed: 4, remaining: 2 })
        );
        // failed read must not consume
        assert_eq!(input.offset(), 1);
        assert_eq!(input.read_slice(2).expect("tail"), &[2, 3]);
        assert_eq!(input.bytes_left(), 0);
        assert!(matches!(input.read_byte(), Err(DecodeError::TruncatedInput { needed: 1, remaining: 0 })));
    }

    #[test]
    fn zero_sized_read_on_empty_input() {
        let mut input = InputBuffer::new(&[]);
        assert_eq!(input.read_slice(0).expect("empty read"), &[] as &[u8]);
    }
}
