//! Per-type dispatch over the two hashing strategies.
//!
//! Strategy selection is a compile-time choice: each strategy is a stateless
//! zero-sized type implementing [`StatelessU64Hasher`], and the per-kind
//! entry points are generic functions monomorphized per key type. No runtime
//! branching, no virtual calls.

use crate::crc;
use crate::key::FixedKey;
use crate::mix::mix64;

/// A pure u64 -> u64 hash strategy with no per-instance state.
pub trait StatelessU64Hasher {
    fn hash(value: u64) -> u64;
}

/// Default strategy: the avalanche mixer. No hardware requirements, good
/// distribution for arbitrary key patterns.
pub struct MixHasher;

impl StatelessU64Hasher for MixHasher {
    #[inline(always)]
    fn hash(value: u64) -> u64 {
        mix64(value)
    }
}

/// Checksum strategy: one hardware CRC32C instruction. Faster, weaker
/// distribution; see [`crc::crc64`] for the hardware precondition.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub struct CrcHasher;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl StatelessU64Hasher for CrcHasher {
    #[inline(always)]
    fn hash(value: u64) -> u64 {
        crc::crc64(value)
    }
}

/// Hashes a key with an explicitly chosen strategy.
#[inline(always)]
pub fn hash_with<H: StatelessU64Hasher, T: FixedKey>(key: T) -> u64 {
    H::hash(key.to_u64_bits())
}

/// Hashes a key with the default (avalanche-mixing) strategy.
#[inline(always)]
pub fn default_hash<T: FixedKey>(key: T) -> u64 {
    hash_with::<MixHasher, T>(key)
}

/// Hashes a key with the hardware checksum strategy.
///
/// Same precondition as [`crc::crc64`]: only select this after
/// [`crc::crc64_supported`] confirmed hardware support.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline(always)]
pub fn crc_hash<T: FixedKey>(key: T) -> u64 {
    hash_with::<CrcHasher, T>(key)
}

/// Adapts a stateless strategy to `std::hash::Hasher` so it plugs into
/// `HashSet`/`HashMap`/`DashMap` via `BuildHasherDefault`.
///
/// Only integer keys arrive through this interface; each write widens the
/// key through [`FixedKey`] and hashes it in one shot. Byte-slice writes
/// are rejected: this adapter is strictly for fixed-width scalar keys.
pub struct U64Hasher<H: StatelessU64Hasher> {
    result: u64,
    function: std::marker::PhantomData<H>,
}

macro_rules! impl_write_scalar {
    ($($method:ident: $t:ty),*) => {$(
        #[inline(always)]
        fn $method(&mut self, value: $t) {
            self.result = H::hash(value.to_u64_bits());
        }
    )*};
}

impl<H: StatelessU64Hasher> std::hash::Hasher for U64Hasher<H> {
    fn write(&mut self, _bytes: &[u8]) {
        unreachable!("expected a fixed-width scalar key, got bytes");
    }

    impl_write_scalar!(
        write_u8: u8, write_u16: u16, write_u32: u32, write_u64: u64,
        write_i8: i8, write_i16: i16, write_i32: i32, write_i64: i64
    );

    #[inline(always)]
    fn finish(&self) -> u64 {
        self.result
    }
}

impl<H: StatelessU64Hasher> Default for U64Hasher<H> {
    fn default() -> Self {
        Self {
            result: 0,
            function: std::marker::PhantomData,
        }
    }
}

/// `BuildHasher` for tables keyed by the default strategy.
pub type MixHashBuilder = std::hash::BuildHasherDefault<U64Hasher<MixHasher>>;

/// `BuildHasher` for tables keyed by the checksum strategy.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub type CrcHashBuilder = std::hash::BuildHasherDefault<U64Hasher<CrcHasher>>;
