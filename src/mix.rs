//! The default hash core: a 64-bit multiplicative avalanche mixer.
//!
//! This is the MurmurHash3 finalizer. It is noticeably faster than SipHash
//! for u64 -> u64 hash-table keys (the common case when aggregating by an
//! integer identifier) while still passing avalanche and bit-independence
//! tests, so it is the default strategy for arbitrary key patterns.

/// Mixes a 64-bit value so that every output bit depends on every input bit.
///
/// Three rounds of xor-shift then wrapping multiply. The shifts pull entropy
/// from the high bits back down before each multiply, which on its own would
/// leave the low bits under-mixed.
#[inline(always)]
pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}

#[cfg(test)]
mod tests {
    use super::mix64;

    // Pin the multiplier constants and shift amounts against accidental edits.
    #[test]
    fn known_vectors() {
        assert_eq!(mix64(0), 0);
        assert_eq!(mix64(1), 0xb456_bcfc_34c2_cb2c);
        assert_eq!(mix64(2), 0x3abf_2a20_6506_83e7);
        assert_eq!(mix64(42), 0x8108_7960_8e42_59cc);
        assert_eq!(mix64(0xdead_beef), 0xd24b_d59f_862a_1dac);
        assert_eq!(mix64(0xFF), 0x1200_a2a6_1d24_8b28);
        assert_eq!(mix64(u64::MAX), 0x64b5_720b_4b82_5f21);
    }

    #[test]
    fn deterministic() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let x = rng.u64(..);
            assert_eq!(mix64(x), mix64(x));
        }
    }

    #[test]
    fn single_bit_flip_diffuses() {
        // mix64(0) and mix64(1) should already differ in far more bits than
        // the one that changed.
        let diff = (mix64(0) ^ mix64(1)).count_ones();
        assert!((20..=44).contains(&diff), "only {diff} bits flipped");
    }

    #[test]
    fn avalanche_over_all_input_bits() {
        // Flipping any single input bit should flip about half the output
        // bits on average. Loose band to keep the test stable.
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..16 {
            let base = rng.u64(..);
            let h = mix64(base);
            let total: u32 = (0..64)
                .map(|bit| (h ^ mix64(base ^ (1u64 << bit))).count_ones())
                .sum();
            let mean = total as f64 / 64.0;
            assert!(
                (24.0..=40.0).contains(&mean),
                "mean flips {mean} for base {base:#x}"
            );
        }
    }
}
