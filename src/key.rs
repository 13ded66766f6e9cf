//! Bit-level widening of fixed-width scalar keys.
//!
//! Both hash cores operate on a `u64`, so every supported key kind is first
//! reinterpreted as one: the key's raw bit pattern is copied into the low
//! bytes of a zeroed 64-bit carrier. No arithmetic conversion happens here
//! (a float is hashed by its bits, not its value), and narrower kinds are
//! zero-extended, never sign-extended, so equal bit patterns always produce
//! equal carriers.

/// A scalar kind (width ≤ 8 bytes) usable as a hash-table key.
///
/// The set of implementations is closed: u8/u16/u32/u64, i8/i16/i32/i64,
/// f32/f64. Keys of any other type are a compile error, not a runtime fault.
pub trait FixedKey: Copy {
    /// The key's raw bits, zero-extended into a 64-bit carrier.
    fn to_u64_bits(self) -> u64;
}

macro_rules! impl_unsigned_key {
    ($($t:ty),*) => {$(
        impl FixedKey for $t {
            #[inline(always)]
            fn to_u64_bits(self) -> u64 {
                self as u64
            }
        }
    )*};
}

// Signed kinds go through the same-width unsigned type first. Casting i8
// straight to u64 would sign-extend and set the carrier's high bytes.
macro_rules! impl_signed_key {
    ($($t:ty => $u:ty),*) => {$(
        impl FixedKey for $t {
            #[inline(always)]
            fn to_u64_bits(self) -> u64 {
                (self as $u) as u64
            }
        }
    )*};
}

impl_unsigned_key!(u8, u16, u32, u64);
impl_signed_key!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

impl FixedKey for f32 {
    #[inline(always)]
    fn to_u64_bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl FixedKey for f64 {
    #[inline(always)]
    fn to_u64_bits(self) -> u64 {
        self.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::FixedKey;

    #[test]
    fn narrow_kinds_zero_extend() {
        assert_eq!(0xFFu8.to_u64_bits(), 0x0000_0000_0000_00FF);
        assert_eq!(0xFFFFu16.to_u64_bits(), 0x0000_0000_0000_FFFF);
        assert_eq!(0xFFFF_FFFFu32.to_u64_bits(), 0x0000_0000_FFFF_FFFF);
        assert_eq!(u64::MAX.to_u64_bits(), u64::MAX);
    }

    #[test]
    fn signed_kinds_never_sign_extend() {
        assert_eq!((-1i8).to_u64_bits(), 0x0000_0000_0000_00FF);
        assert_eq!((-1i16).to_u64_bits(), 0x0000_0000_0000_FFFF);
        assert_eq!((-1i32).to_u64_bits(), 0x0000_0000_FFFF_FFFF);
        assert_eq!((-1i64).to_u64_bits(), u64::MAX);
        assert_eq!(i64::MIN.to_u64_bits(), 0x8000_0000_0000_0000);
    }

    #[test]
    fn floats_widen_by_bit_pattern() {
        assert_eq!(1.5f64.to_u64_bits(), 1.5f64.to_bits());
        assert_eq!(1.5f32.to_u64_bits(), 1.5f32.to_bits() as u64);
        // -0.0 and +0.0 compare equal but are distinct bit patterns.
        assert_ne!((-0.0f64).to_u64_bits(), 0.0f64.to_u64_bits());
        assert_eq!((-0.0f32).to_u64_bits(), 0x0000_0000_8000_0000);
    }

    #[test]
    fn same_bits_same_carrier_across_kinds() {
        let n = 0x3FF8_0000_0000_0000u64; // bits of 1.5f64
        assert_eq!(f64::from_bits(n).to_u64_bits(), n.to_u64_bits());
        let m = 0x3FC0_0000u32; // bits of 1.5f32
        assert_eq!(f32::from_bits(m).to_u64_bits(), m.to_u64_bits());
    }
}
