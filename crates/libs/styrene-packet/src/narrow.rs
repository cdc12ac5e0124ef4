//! Signed and unsigned views of byte and short fields.
//!
//! Narrow integer fields are stored as raw bit patterns, so a schema `ubyte`
//! and a schema `byte` occupy the same wire byte. Either view can be taken
//! from either storage type: widening the signed view sign-extends, widening
//! the unsigned view zero-extends.

/// An 8- or 16-bit integer with both a signed and an unsigned view.
pub trait NarrowInt: Copy {
    type Signed: Copy + Into<i64>;
    type Unsigned: Copy + Into<u64>;

    fn as_signed(self) -> Self::Signed;

    fn as_unsigned(self) -> Self::Unsigned;

    /// Sign-extends the signed view.
    fn widen_signed(self) -> i64 {
        self.as_signed().into()
    }

    /// Zero-extends the unsigned view.
    fn widen_unsigned(self) -> u64 {
        self.as_unsigned().into()
    }
}

macro_rules! impl_narrow {
    ($signed:ty, $unsigned:ty) => {
        impl NarrowInt for $signed {
            type Signed = $signed;
            type Unsigned = $unsigned;

            fn as_signed(self) -> $signed {
                self
            }

            fn as_unsigned(self) -> $unsigned {
                self as $unsigned
            }
        }

        impl NarrowInt for $unsigned {
            type Signed = $signed;
            type Unsigned = $unsigned;

            fn as_signed(self) -> $signed {
                self as $signed
            }

            fn as_unsigned(self) -> $unsigned {
                self
            }
        }
    };
}

impl_narrow!(i8, u8);
impl_narrow!(i16, u16);
