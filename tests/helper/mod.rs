#![allow(dead_code)]

use rand::Rng;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A word with exactly `ones` distinct bits set.
pub fn random_word<R>(rng: &mut R, ones: u32) -> u32
where
    R: Rng,
{
    assert!(ones <= 32);
    let mut w = 0u32;
    while w.count_ones() < ones {
        w |= 1 << rng.gen_range(0..32);
    }
    w
}

macro_rules! assert_all {
    ( $word:expr, $ones:expr ) => {{
        let word = $word;
        for s in Strategy::ALL.iter() {
            assert_eq!(s.count(word), $ones, "{} count of {:#010x}", s, word);
        }
    }};
}
