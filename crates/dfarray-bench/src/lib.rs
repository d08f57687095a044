//! Benchmark fixtures for the dfarray container.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dfarray::FixedArray;

/// Slot count used by the standard benchmark arrays.
pub const BENCH_CAPACITY: usize = 10_000;

/// Build a [`BENCH_CAPACITY`]-slot `f32` array with slot `i` set to `i`.
pub fn ramp_array() -> FixedArray<f32> {
    FixedArray::from_fn(BENCH_CAPACITY, |i| i as f32)
}
