//! Population count (Hamming weight) of 32-bit words.
//!
//! Four interchangeable counters are provided, each taking a [`Word`]
//! (`u32` or `i32`, counted by bit pattern) and returning a count in `[0, 32]`.
//!
//! - [`bit_scan`]: tests all 32 bits.
//! - [`kernighan`]: clears the lowest set bit until the word is zero.
//! - [`table`]: sums a 256 entries byte table over four bytes.
//! - [`intrinsic`]: `u32::count_ones`.
//!
//! [`Strategy`] picks one of them at runtime.
//!
//! ```
//! use hamming_weight::{count_bits, Strategy};
//!
//! assert_eq!(count_bits(0b_1011_u32), 3);
//! assert_eq!(count_bits(-3i32), 31);
//!
//! let strategy: Strategy = "kernighan".parse().unwrap();
//! assert_eq!(strategy.count(128u32), 1);
//! ```

#![deny(missing_docs)]

mod count;
mod private;
mod strategy;
mod table;
mod word;

pub use crate::count::{bit_scan, intrinsic, kernighan};
pub use crate::strategy::{ParseStrategyError, Strategy};
pub use crate::table::table;
pub use crate::word::Word;

/// Counts the ones of `word` with the default strategy.
///
/// # Examples
///
/// ```
/// use hamming_weight::count_bits;
/// assert_eq!(count_bits(0u32), 0);
/// assert_eq!(count_bits(u32::MAX), 32);
/// assert_eq!(count_bits(-1i32), 32);
/// ```
pub fn count_bits<W: Word>(word: W) -> u32 {
    Strategy::default().count(word)
}
