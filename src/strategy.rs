//! Module `strategy` selects one of the counters at runtime.

use std::{error, fmt, str::FromStr};

use log::trace;

use crate::{count, table, word::Word};

/// An algorithm to count the ones of a word.
///
/// Every strategy returns the same count, they only differ in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// 32 test-and-shift steps.
    BitScan,
    /// One step per set bit.
    Kernighan,
    /// Four lookups in a 256 entries table.
    Table,
    /// `u32::count_ones`.
    Intrinsic,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BitScan,
        Strategy::Kernighan,
        Strategy::Table,
        Strategy::Intrinsic,
    ];

    /// Counts the ones of `word` with this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamming_weight::Strategy;
    /// for s in Strategy::ALL.iter() {
    ///     assert_eq!(s.count(11u32), 3);
    ///     assert_eq!(s.count(-3i32), 31);
    /// }
    /// ```
    pub fn count<W: Word>(self, word: W) -> u32 {
        let ones = match self {
            Strategy::BitScan => count::bit_scan(word),
            Strategy::Kernighan => count::kernighan(word),
            Strategy::Table => table::table(word),
            Strategy::Intrinsic => count::intrinsic(word),
        };
        trace!("{} count of {:#010x} = {}", self, word.bits(), ones);
        ones
    }

    /// The name accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BitScan => "bit-scan",
            Strategy::Kernighan => "kernighan",
            Strategy::Table => "table",
            Strategy::Intrinsic => "intrinsic",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Intrinsic
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any `Strategy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
}

impl ParseStrategyError {
    /// The rejected name.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown strategy: {:?}", self.input)
    }
}

impl error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Names are matched ignoring ASCII case, `_` is read as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| ParseStrategyError {
                input: s.to_owned(),
            })
    }
}
