use serde::{Deserialize, Serialize};

/// Default maximum nesting of packets inside packets.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Bounds applied while decoding untrusted input.
///
/// Carried by the [`Registry`](crate::Registry) so every decode that goes
/// through it shares the same limits. Missing keys fall back to defaults when
/// loaded from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Deepest allowed packet nesting, counting the top-level packet as 1.
    pub max_depth: usize,
    /// Largest element count accepted for a sequence field.
    pub max_sequence_len: usize,
}

impl DecodeLimits {
    pub fn new(max_depth: usize, max_sequence_len: usize) -> Self {
        Self { max_depth, max_sequence_len }
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    pub fn set_max_sequence_len(&mut self, max_sequence_len: usize) {
        self.max_sequence_len = max_sequence_len;
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, max_sequence_len: i32::MAX as usize }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let limits: DecodeLimits = toml::from_str("max_depth = 8").expect("parse limits");
        assert_eq!(limits.max_depth, 8);
        assert_eq!(limits.max_sequence_len, i32::MAX as usize);
    }

    #[test]
    fn empty_json_is_default() {
        let limits: DecodeLimits = serde_json::from_str("{}").expect("parse limits");
        assert_eq!(limits, DecodeLimits::default());
    }

    #[test]
    fn setters_update_fields() {
        let mut limits = DecodeLimits::default();
        limits.set_max_depth(2);
        limits.set_max_sequence_len(10);
        assert_eq!(limits, DecodeLimits::new(2, 10));
    }
}
