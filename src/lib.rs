//! # tieredsort
//!
//! `tieredsort` sorts slices of fixed-width numbers (`i32`, `u32`, `i64`, `u64`, `f32`, `f64`)
//! faster than a general comparison sort. It cheaply classifies the input and routes it to the
//! algorithm that suits it best.
//!
//! ## Tiers
//!
//! 1. **Small** (`n < 256`): the standard library's comparison sort. Fixed overheads of the other
//!    tiers dominate at this size.
//! 2. **Patterned**: three 4-element runs (head, middle, tail) are probed with at most 12
//!    comparisons. If all are monotonic the input is likely sorted or reversed, where the
//!    comparison sort is close to linear.
//! 3. **Dense** (integers only): if the value range is at most `2n`, a counting sort runs in
//!    `O(n + range)`.
//! 4. **Sparse**: an LSD radix sort with 8-bit digits over order-preserving unsigned keys.
//!
//! Use [`classify`] to see which tier an input would take.
//!
//! ## Usage
//!
//! ```rust
//! use tieredsort::sort;
//!
//! let mut data = vec![5, 2, 8, 1, 9, 3, 7, 4, 6];
//! sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! ### Reusing a scratch buffer
//!
//! Radix sort and stable counting sort need a scratch buffer as long as the input. Callers that
//! sort repeatedly can pass their own and avoid the allocation:
//!
//! ```rust
//! use tieredsort::sort_with_buffer;
//!
//! let mut buffer = vec![0.0f64; 4096];
//! for round in 0..3 {
//!     let mut data: Vec<f64> = (0..4096).map(|i| ((i * 31 + round) % 977) as f64 - 400.0).collect();
//!     sort_with_buffer(&mut data, &mut buffer);
//!     assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! }
//! ```
//!
//! ### Sorting records by key
//!
//! [`sort_by_key`] is a stable sort of arbitrary records by an `i32` or `u32` key. Dense keys
//! (ages, scores, bucket ids) are counting-sorted without materializing a key array.
//!
//! ```rust
//! use tieredsort::sort_by_key;
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let mut people = vec![
//!     Person { name: "Carol", age: 41 },
//!     Person { name: "Alice", age: 29 },
//!     Person { name: "Bob", age: 41 },
//! ];
//! sort_by_key(&mut people, |p| p.age);
//!
//! let names: Vec<_> = people.iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["Alice", "Carol", "Bob"]);
//! ```
//!
//! ## Floating point
//!
//! Floats are ordered by the IEEE 754 total order (see [`f64::total_cmp`]): `-0.0` sorts before
//! `+0.0`, and NaNs sort by their bit pattern (negative NaNs first, positive NaNs last).
//!
//! ## Logging
//!
//! Each call emits one `trace!` record through the [`log`] facade naming the tier taken.

pub mod algo;
pub mod classify;
pub mod core;
pub mod counting;
pub mod keyed;
pub mod radix;

pub use algo::{sort, sort_with_buffer, stable_sort, stable_sort_with_buffer};
pub use classify::{Tier, classify};
pub use crate::core::{RecordKey, SortKey};
pub use keyed::sort_by_key;

pub mod prelude {
    pub use crate::algo::{sort, sort_with_buffer, stable_sort, stable_sort_with_buffer};
    pub use crate::classify::{Tier, classify};
    pub use crate::core::{RecordKey, SortKey};
    pub use crate::keyed::sort_by_key;
}
