//! Loop micro-benchmarks
//!
//! Times the same numeric loops over different buffer strategies:
//! - **c arrays**: five stack arrays driven with index loops
//! - **std::arrays**: five fixed-size arrays driven through slice kernels
//! - **std::vectors**: five heap vectors driven through the same kernels
//! - **euler allocator / preallocator**: one Euler step that returns a freshly
//!   allocated state vs. one that mutates the state in place
//!
//! Each program prints its label, the elapsed seconds of every timed loop, and
//! a checksum (or final state) that keeps the loops from being optimised out.
//!
//! Run everything: `cargo run --release`
//! Run one program: `cargo run --release --bin euler_allocator`
//! Statistical comparison: `cargo bench`

pub mod kernels;
pub mod programs;
pub mod report;
pub mod runner;
pub mod seed;
pub mod timing;
