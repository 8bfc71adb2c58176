//! Module `table` counts a word byte by byte.

use crate::word::Word;

/// Pre computed number of ones for every byte.
///
/// See `build.rs` for more details.
pub(crate) static TABLE: [u8; 256] = include!(concat!(env!("OUT_DIR"), "/table.rs"));

/// Splits `word` into four bytes and sums their entries in `TABLE`.
///
/// # Examples
///
/// ```
/// use hamming_weight::table;
/// assert_eq!(table(0x0F0F_0001_u32), 9);
/// ```
pub fn table<W: Word>(word: W) -> u32 {
    let w = word.bits();
    // unrolled, there are always four bytes
    u32::from(TABLE[(w & 0xFF) as usize])
        + u32::from(TABLE[((w >> 8) & 0xFF) as usize])
        + u32::from(TABLE[((w >> 16) & 0xFF) as usize])
        + u32::from(TABLE[(w >> 24) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn entries() {
        assert_eq!(TABLE.len(), 256);
        for b in 0..=u8::MAX {
            assert_eq!(u32::from(TABLE[b as usize]), b.count_ones(), "byte {:#04x}", b);
        }
    }

    #[test]
    fn each_byte_lane() {
        for shift in (0..32).step_by(8) {
            assert_eq!(table(0xFFu32 << shift), 8);
            assert_eq!(table(0x81u32 << shift), 2);
        }
        assert_eq!(table(-3i32), 31);
    }

    quickcheck! {
        fn agrees_with_count_ones(w: u32) -> bool {
            table(w) == w.count_ones()
        }
    }
}
