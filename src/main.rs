//! Insert-throughput comparison of the two key-hash strategies against
//! SipHash and foldhash, on the workload they exist for: deduplicating /
//! aggregating sequential-ish u64 identifiers through a hash set. Also runs
//! a threaded DashMap pass to show the strategies under concurrent use.

use std::collections::HashSet;
use std::hash::{BuildHasher, RandomState};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use foldhash::fast::RandomState as FoldRandomState;
use scalar_hash::{MixHashBuilder, crc64_supported};

fn count_unique_by_hash<S: BuildHasher>(data: &[u64], build_hasher: S) -> usize {
    let mut set = HashSet::with_capacity_and_hasher(data.len(), build_hasher);
    for d in data {
        set.insert(*d);
    }
    set.len()
}

fn benchmark(name: &str, repeats: usize, mut f: impl FnMut()) {
    // Warmup.
    for _ in 0..repeats {
        f();
    }
    let start = Instant::now();
    for _ in 0..repeats {
        f();
    }
    let duration = start.elapsed();
    println!("  {}: {}", name, human_time(repeats, duration));
}

fn human_time(repeats: usize, duration: Duration) -> String {
    let mut duration = duration.as_nanos() as f64 / repeats as f64;
    if duration < 1000.0 {
        return format!("{:.1}ns", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}us", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}ms", duration);
    }
    duration /= 1000.0;
    format!("{:.1}s", duration)
}

fn concurrent_count_unique<S: BuildHasher + Clone + Send + Sync>(
    data: &[u64],
    build_hasher: S,
    threads: usize,
) -> usize {
    let map: DashMap<u64, (), S> = DashMap::with_capacity_and_hasher(data.len(), build_hasher);
    std::thread::scope(|scope| {
        for chunk in data.chunks(data.len().div_ceil(threads)) {
            let map = &map;
            scope.spawn(move || {
                for d in chunk {
                    map.insert(*d, ());
                }
            });
        }
    });
    map.len()
}

fn main() {
    println!("hardware CRC32C: {}", crc64_supported());
    let mut rng = fastrand::Rng::with_seed(0);
    for lg_size in [10, 15, 20] {
        let mut data = vec![0u64; 1 << lg_size];
        // Low-bits mask: a small but nonzero number of duplicates, and the
        // clustered-identifier shape that trips up weak hashes.
        let mask = (1u64 << lg_size) - 1;
        for d in &mut data {
            *d = rng.u64(..) & mask;
        }
        let repeats = 1usize << 22usize.saturating_sub(lg_size);
        println!("keys: {}", data.len());

        let sip_hasher = RandomState::new();
        benchmark("HashSet (SipHash)", repeats, || {
            count_unique_by_hash(&data, sip_hasher.clone());
        });

        let fold_hasher = FoldRandomState::default();
        benchmark("HashSet (foldhash)", repeats, || {
            count_unique_by_hash(&data, fold_hasher.clone());
        });

        let mix_hasher = MixHashBuilder::default();
        benchmark("HashSet (mix64)", repeats, || {
            count_unique_by_hash(&data, mix_hasher.clone());
        });

        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        if crc64_supported() {
            let crc_hasher = scalar_hash::CrcHashBuilder::default();
            benchmark("HashSet (crc64)", repeats, || {
                count_unique_by_hash(&data, crc_hasher.clone());
            });
        }

        let threads = 4;
        let mix_hasher = MixHashBuilder::default();
        benchmark("DashMap 4t (mix64)", repeats, || {
            concurrent_count_unique(&data, mix_hasher.clone(), threads);
        });
    }
}
