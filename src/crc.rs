//! The checksum hash core: one hardware CRC32C instruction per key.
//!
//! CRC32C is a mediocre hash by avalanche and bit-independence metrics, and
//! it only produces 32 bits, but at 3-cycle latency / 1-cycle throughput it
//! behaves well enough for hash-table placement when raw speed matters more
//! than distribution quality.
//!
//! This strategy only exists where the hardware provides the instruction:
//! SSE4.2 on x86_64, the CRC extension on aarch64. On other architectures
//! the functions are absent and selecting the strategy is a compile error.
//! There is no per-call capability check — the embedding system is expected
//! to probe once at startup via [`crc64_supported`] and only then configure
//! tables with the checksum strategy.

/// Reports whether the current CPU can run [`crc64`].
///
/// Probe this once at startup when choosing a strategy; the hashing call
/// itself stays branch-free.
#[inline]
pub fn crc64_supported() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        std::arch::is_x86_feature_detected!("sse4.2")
    }
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("crc")
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}

/// Checksum-hashes a 64-bit value with a single CRC32C instruction.
///
/// The accumulator is seeded with all-ones and the instruction is applied
/// once over the full 64-bit input; the 32-bit result comes back
/// zero-extended. No final xor and no streaming: this is a hash, not a
/// wire-format checksum.
///
/// # Safety
///
/// The CPU must support the instruction (`sse4.2` on x86_64, `crc` on
/// aarch64); otherwise the process takes an illegal-instruction fault.
/// Check [`crc64_supported`] once before selecting this strategy.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.2")]
#[inline]
pub unsafe fn crc64_unchecked(x: u64) -> u64 {
    // SAFETY: sse4.2 is enabled on this function; the caller guarantees the
    // CPU supports it.
    unsafe { core::arch::x86_64::_mm_crc32_u64(!0u64, x) }
}

/// Checksum-hashes a 64-bit value with a single CRC32C instruction.
///
/// See the x86_64 variant for the contract; the aarch64 `crc32cx`
/// instruction computes the same CRC32C polynomial, so both targets
/// produce identical hashes.
///
/// # Safety
///
/// The CPU must support the `crc` feature. Check [`crc64_supported`] once
/// before selecting this strategy.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "crc")]
#[inline]
pub unsafe fn crc64_unchecked(x: u64) -> u64 {
    // SAFETY: the crc feature is enabled on this function; the caller
    // guarantees the CPU supports it.
    unsafe { core::arch::aarch64::__crc32cd(!0u32, x) as u64 }
}

/// Safe entry point for embedders that have already confirmed support.
///
/// Precondition (checked only in debug builds, to keep the release hot path
/// branch-free): [`crc64_supported`] returned true at configuration time.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline(always)]
pub fn crc64(x: u64) -> u64 {
    debug_assert!(
        crc64_supported(),
        "checksum strategy selected without hardware CRC32C support"
    );
    // SAFETY: selected only after crc64_supported() was confirmed by the
    // embedding system's startup configuration.
    unsafe { crc64_unchecked(x) }
}
