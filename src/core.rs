//! Core traits and constants for tieredsort.
//!
//! This module defines:
//! - [`SortKey`]: The order-preserving key transform, implemented for exactly the six supported
//!   element types (`i32`, `u32`, `i64`, `u64`, `f32`, `f64`).
//! - [`RadixBits`]: The unsigned key widths (`u32`, `u64`) the radix kernel sorts.
//! - [`RecordKey`]: The 32-bit key types accepted by [`sort_by_key`](crate::sort_by_key).
//! - The tier thresholds used by the dispatcher.

use bytemuck::Pod;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Inputs shorter than this go straight to the comparison sort.
pub const SMALL_THRESHOLD: usize = 256;

/// Inputs shorter than this are always treated as already patterned.
pub const PATTERN_MIN_LEN: usize = 8;

/// Maximum number of strided samples used to estimate the value range.
pub const DENSITY_SAMPLES: usize = 64;

/// A range of at most `DENSE_RANGE_FACTOR * n` distinct values is sorted by counting.
pub const DENSE_RANGE_FACTOR: usize = 2;

/// Number of buckets per radix pass (8-bit digits).
pub const RADIX_BUCKETS: usize = 256;

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// An unsigned integer key that can be sorted digit by digit.
///
/// Implemented for `u32` (4 passes) and `u64` (8 passes). Sealed.
pub trait RadixBits: Pod + Ord + Debug + private::Sealed {
    /// Number of 8-bit digits in the key.
    const PASSES: usize;

    /// Returns the 8-bit digit for the given pass (0 = least significant).
    fn digit(self, pass: usize) -> usize;

    /// Returns `self - lower` widened to `u64`. Wraps if `self < lower`.
    fn distance(self, lower: Self) -> u64;

    /// Returns `self + delta`, wrapping.
    fn advance(self, delta: usize) -> Self;
}

macro_rules! impl_radix_bits {
    ($t:ty, $passes:expr) => {
        impl RadixBits for $t {
            const PASSES: usize = $passes;

            #[inline(always)]
            fn digit(self, pass: usize) -> usize {
                ((self >> (pass * 8)) & 0xFF) as usize
            }

            #[inline(always)]
            fn distance(self, lower: Self) -> u64 {
                self.wrapping_sub(lower) as u64
            }

            #[inline(always)]
            fn advance(self, delta: usize) -> Self {
                self.wrapping_add(delta as $t)
            }
        }
    };
}

impl_radix_bits!(u32, 4);
impl_radix_bits!(u64, 8);

/// A fixed-width numeric type with a bijective, order-preserving mapping onto an unsigned integer
/// of the same width.
///
/// The trait is sealed: only `i32`, `u32`, `i64`, `u64`, `f32` and `f64` implement it, so sorting
/// any other element type is rejected at compile time.
///
/// The transform works on raw bit patterns:
/// - unsigned integers map to themselves,
/// - signed integers flip the sign bit,
/// - floats flip the sign bit when non-negative and complement every bit when negative.
///
/// For floats this yields the IEEE 754 total order (the order of [`f32::total_cmp`]), so NaNs are
/// placed by their bit pattern: negative NaNs first, positive NaNs last.
///
/// # Examples
///
/// ```
/// use tieredsort::SortKey;
///
/// assert!((-1i32).to_key() < 0i32.to_key());
/// assert!((-0.5f64).to_key() < 0.25f64.to_key());
/// assert_eq!(f32::from_key((-3.5f32).to_key()), -3.5);
/// ```
pub trait SortKey: Pod + PartialOrd + Debug + private::Sealed {
    /// The unsigned key of equal width.
    type Bits: RadixBits;

    /// Whether the type is integral. Only integral types are eligible for counting sort.
    const INTEGRAL: bool;

    /// Maps the raw bit pattern of a value to its order-preserving key.
    fn encode(raw: Self::Bits) -> Self::Bits;

    /// Inverse of [`encode`](SortKey::encode).
    fn decode(key: Self::Bits) -> Self::Bits;

    /// Total order consistent with the key order. Used by the comparison-sort fallback.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// Returns the order-preserving key of `self`.
    #[inline(always)]
    fn to_key(self) -> Self::Bits {
        Self::encode(bytemuck::cast(self))
    }

    /// Restores a value from its order-preserving key.
    #[inline(always)]
    fn from_key(key: Self::Bits) -> Self {
        bytemuck::cast(Self::decode(key))
    }
}

macro_rules! impl_unsigned_key {
    ($t:ty) => {
        impl SortKey for $t {
            type Bits = $t;
            const INTEGRAL: bool = true;

            #[inline(always)]
            fn encode(raw: $t) -> $t {
                raw
            }

            #[inline(always)]
            fn decode(key: $t) -> $t {
                key
            }

            #[inline(always)]
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    };
}

macro_rules! impl_signed_key {
    ($t:ty, $bits:ty) => {
        impl SortKey for $t {
            type Bits = $bits;
            const INTEGRAL: bool = true;

            #[inline(always)]
            fn encode(raw: $bits) -> $bits {
                raw ^ (1 << (<$bits>::BITS - 1))
            }

            #[inline(always)]
            fn decode(key: $bits) -> $bits {
                key ^ (1 << (<$bits>::BITS - 1))
            }

            #[inline(always)]
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    };
}

macro_rules! impl_float_key {
    ($t:ty, $bits:ty) => {
        impl SortKey for $t {
            type Bits = $bits;
            const INTEGRAL: bool = false;

            #[inline(always)]
            fn encode(raw: $bits) -> $bits {
                const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                if raw & SIGN != 0 { !raw } else { raw ^ SIGN }
            }

            #[inline(always)]
            fn decode(key: $bits) -> $bits {
                const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                if key & SIGN != 0 { key ^ SIGN } else { !key }
            }

            #[inline(always)]
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    };
}

impl_unsigned_key!(u32);
impl_unsigned_key!(u64);
impl_signed_key!(i32, u32);
impl_signed_key!(i64, u64);
impl_float_key!(f32, u32);
impl_float_key!(f64, u64);

/// A 32-bit integer key returned by a [`sort_by_key`](crate::sort_by_key) extractor.
///
/// Implemented for `i32` and `u32`.
pub trait RecordKey: SortKey<Bits = u32> + Ord {}

impl RecordKey for i32 {}
impl RecordKey for u32 {}

/// Number of distinct values in `[min, max]`, computed on the unsigned keys.
///
/// Never overflows: the difference is taken in the key's own width, then widened, and the final
/// `+ 1` saturates. Returns 0 if `max < min`.
///
/// ```
/// use tieredsort::core::key_span;
///
/// assert_eq!(key_span(-5i32, 5i32), 11);
/// assert_eq!(key_span(i64::MIN, i64::MAX), u64::MAX);
/// ```
#[inline]
pub fn key_span<K: SortKey>(min: K, max: K) -> u64 {
    let (lo, hi) = (min.to_key(), max.to_key());
    if hi < lo {
        return 0;
    }
    hi.distance(lo).saturating_add(1)
}
