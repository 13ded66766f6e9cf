//! Hash primitives for fixed-width scalar keys.
//!
//! Backs in-memory hash-table aggregation and lookup over integer and float
//! keys, where these beat a general-purpose hasher like SipHash by a wide
//! margin (aggregating by a u64 identifier is the motivating workload). Two
//! strategies, chosen at compile time:
//!
//! - [`default_hash`]: a MurmurHash3-style avalanche mixer. No hardware
//!   requirements, strong distribution. Use this unless profiling says
//!   otherwise.
//! - [`crc_hash`]: one hardware CRC32C instruction. Weaker distribution,
//!   near-zero latency. Requires SSE4.2 (x86_64) or the CRC extension
//!   (aarch64); probe [`crc64_supported`] once at startup before selecting
//!   it.
//!
//! Both accept any of the ten supported key kinds (u8-u64, i8-i64, f32,
//! f64) through [`FixedKey`], which reinterprets the key's raw bits as a
//! zero-extended u64. Everything is pure and stateless: no allocation, no
//! locks, safe to call from any thread.
//!
//! The raw 64-bit cores [`mix64`] and [`crc64`] are exported for callers
//! that already hold a widened value. [`MixHashBuilder`] / [`CrcHashBuilder`]
//! plug the strategies into `HashMap`, `HashSet` and `DashMap`.

pub mod crc;
pub mod hashers;
pub mod key;
pub mod mix;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use crc::crc64;
pub use crc::crc64_supported;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use hashers::{CrcHashBuilder, CrcHasher, crc_hash};
pub use hashers::{
    MixHashBuilder, MixHasher, StatelessU64Hasher, U64Hasher, default_hash, hash_with,
};
pub use key::FixedKey;
pub use mix::mix64;
