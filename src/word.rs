//! Module `word` defines the 32-bit input of every counter.

use crate::private::Sealed;

/// A 32-bit word. This trait is public but sealed.
///
/// Signed words are counted by their two's-complement bit pattern,
/// so `-3i32` and `0xFFFF_FFFDu32` are the same word.
pub trait Word: Copy + Sealed {
    /// Returns the raw bit pattern.
    fn bits(self) -> u32;
}

macro_rules! implWord {
    ( $( $ty:ty ),* ) => ($(
        impl Word for $ty {
            #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
            #[inline(always)]
            fn bits(self) -> u32 {
                self as u32
            }
        }
    )*)
}
implWord!(u32, i32);
