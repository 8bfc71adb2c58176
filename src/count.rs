//! Module `count` implements the loop based counters and the intrinsic.
//!
//! Each function returns the number of ones in `word`, in `[0, 32]`.

use crate::word::Word;

const WORD_BITS: u32 = 32;

/// Tests every bit of `word`, from the lowest to the highest.
///
/// Always runs 32 iterations.
///
/// # Examples
///
/// ```
/// use hamming_weight::bit_scan;
/// assert_eq!(bit_scan(0b_1011_u32), 3);
/// assert_eq!(bit_scan(-3i32), 31);
/// ```
pub fn bit_scan<W: Word>(word: W) -> u32 {
    let mut w = word.bits();
    let mut ones = 0;
    for _ in 0..WORD_BITS {
        ones += w & 1;
        w >>= 1;
    }
    ones
}

/// Clears the lowest set bit until nothing is left.
///
/// Runs once per set bit, so sparse words finish early.
///
/// # Examples
///
/// ```
/// use hamming_weight::kernighan;
/// assert_eq!(kernighan(128_u32), 1);
/// assert_eq!(kernighan(u32::MAX), 32);
/// ```
pub fn kernighan<W: Word>(word: W) -> u32 {
    let mut w = word.bits();
    let mut ones = 0;
    while w != 0 {
        w &= w - 1; // w > 0
        ones += 1;
    }
    ones
}

/// Delegates to `u32::count_ones`, usually a single `popcnt`.
#[inline]
pub fn intrinsic<W: Word>(word: W) -> u32 {
    word.bits().count_ones()
}
