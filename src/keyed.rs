//! Stable sorting of records by an extracted 32-bit key.
//!
//! Records are classified with the same gates as numeric slices, reading keys through the
//! extractor on demand. Only the dense tier has a dedicated kernel: a stable counting sort that
//! computes each record's final slot and then moves the records into place. Every other tier uses
//! the standard library's stable sort.

use crate::classify::{Tier, classify_by};
use crate::core::{RecordKey, SortKey};
use crate::counting::{accumulate_ends, bucket_count, bucket_of};
use log::trace;

/// Sorts `records` stably by the key returned from `key`.
///
/// The extractor must be deterministic: it must return the same key for the same record every
/// time it is called during the sort. On the dense tier it is called twice per record (once to
/// tally, once to place) plus a few probe calls; a scratch array of `records.len()` slot
/// indices is allocated only on that tier.
///
/// # Examples
///
/// ```
/// use tieredsort::sort_by_key;
///
/// let mut records = vec![(3, 'a'), (1, 'b'), (3, 'c')];
/// sort_by_key(&mut records, |r| r.0);
/// assert_eq!(records, vec![(1, 'b'), (3, 'a'), (3, 'c')]);
/// ```
pub fn sort_by_key<R, K, F>(records: &mut [R], mut key: F)
where
    K: RecordKey,
    F: FnMut(&R) -> K,
{
    let n = records.len();
    if n < 2 {
        return;
    }

    let tier = classify_by(n, true, |i| key(&records[i]));
    trace!("tieredsort: sort_by_key n={} -> {:?}", n, tier);

    match tier {
        Tier::Dense { min, max } => counting_sort_records(records, &mut key, min, max),
        Tier::Small | Tier::Patterned | Tier::Sparse => records.sort_by_key(&mut key),
    }
}

fn counting_sort_records<R, K, F>(records: &mut [R], key: &mut F, min: K, max: K)
where
    K: RecordKey,
    F: FnMut(&R) -> K,
{
    let base = min.to_key();
    let mut counts = vec![0usize; bucket_count(min, max)];

    records
        .iter()
        .for_each(|record| counts[bucket_of(key(record), base)] += 1);
    accumulate_ends(&mut counts);

    // slots[i] is the final position of the record currently at i.
    let mut slots = vec![0usize; records.len()];
    for (i, record) in records.iter().enumerate().rev() {
        let k = key(record);
        debug_assert!(
            min <= k && k <= max,
            "key extractor returned {k:?} outside the scanned range [{min:?}, {max:?}]"
        );
        let bucket = bucket_of(k, base);
        counts[bucket] -= 1;
        slots[i] = counts[bucket];
    }

    apply_permutation(records, slots);
}

/// Moves every record to its slot by following permutation cycles.
fn apply_permutation<R>(records: &mut [R], mut slots: Vec<usize>) {
    for i in 0..records.len() {
        while slots[i] != i {
            let target = slots[i];
            records.swap(i, target);
            slots.swap(i, target);
        }
    }
}
