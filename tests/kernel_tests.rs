use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tieredsort::counting::{counting_sort, counting_sort_stable};
use tieredsort::radix::{radix_sort, radix_sort_keys};
use tieredsort::prelude::*;

#[test]
fn test_key_order_matches_natural_order() {
    let floats = [
        f64::NEG_INFINITY,
        -1e300,
        -1.0,
        -f64::MIN_POSITIVE,
        -0.0,
        0.0,
        f64::MIN_POSITIVE,
        1.0,
        1e300,
        f64::INFINITY,
    ];
    assert!(floats.windows(2).all(|w| w[0].to_key() < w[1].to_key()));

    let ints = [i64::MIN, -1, 0, 1, i64::MAX];
    assert!(ints.windows(2).all(|w| w[0].to_key() < w[1].to_key()));

    let ints = [i32::MIN, -1, 0, 1, i32::MAX];
    assert!(ints.windows(2).all(|w| w[0].to_key() < w[1].to_key()));

    assert_eq!(u32::MAX.to_key(), u32::MAX);
    assert_eq!(i32::MIN.to_key(), 0);
    assert_eq!(i64::MAX.to_key(), u64::MAX);
}

#[test]
fn test_key_transform_is_invertible() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let bits: u32 = rng.random();
        let v = f32::from_bits(bits);
        assert_eq!(f32::from_key(v.to_key()).to_bits(), bits);

        let bits: u64 = rng.random();
        let v = f64::from_bits(bits);
        assert_eq!(f64::from_key(v.to_key()).to_bits(), bits);

        let v: i64 = rng.random();
        assert_eq!(i64::from_key(v.to_key()), v);
    }
}

#[test]
fn test_nan_keys_sit_outside_infinities() {
    assert!((-f32::NAN).to_key() < f32::NEG_INFINITY.to_key());
    assert!(f32::NAN.to_key() > f32::INFINITY.to_key());
}

#[test]
fn test_radix_sort_every_width() {
    let mut rng = StdRng::seed_from_u64(2);

    let mut data: Vec<i32> = (0..3000).map(|_| rng.random()).collect();
    let mut expected = data.clone();
    expected.sort();
    let mut buffer = vec![0; data.len()];
    radix_sort(&mut data, &mut buffer);
    assert_eq!(data, expected);

    let mut data: Vec<f64> = (0..3000).map(|_| rng.random_range(-1e9..1e9)).collect();
    let mut expected = data.clone();
    expected.sort_by(f64::total_cmp);
    let mut buffer = vec![0.0; data.len()];
    radix_sort(&mut data, &mut buffer);
    assert_eq!(data, expected);

    // Short inputs work too; the kernel itself has no size threshold.
    let mut data = vec![3u64, u64::MAX, 0, 2];
    let mut buffer = vec![0; 4];
    radix_sort(&mut data, &mut buffer);
    assert_eq!(data, vec![0, 2, 3, u64::MAX]);
}

#[test]
fn test_radix_sort_skips_uniform_digits() {
    // Only the lowest byte varies: a single pass runs, so the result is copied back from scratch.
    let mut keys: Vec<u64> = (0..256u64).rev().map(|b| 0xAB00_0000_0000_0000 | b).collect();
    let mut scratch = vec![0u64; keys.len()];
    radix_sort_keys(&mut keys, &mut scratch);
    assert_eq!(
        keys,
        (0..256u64).map(|b| 0xAB00_0000_0000_0000 | b).collect::<Vec<_>>()
    );

    // Bytes 0 and 3 vary, 1 and 2 are skipped: two passes, the result is back in place.
    let mut keys: Vec<u32> = vec![0x0100_0002, 0x0000_0001, 0x0100_0000, 0x0000_0003];
    let mut scratch = vec![0u32; keys.len()];
    radix_sort_keys(&mut keys, &mut scratch);
    assert_eq!(keys, vec![0x0000_0001, 0x0000_0003, 0x0100_0000, 0x0100_0002]);
}

#[test]
fn test_radix_sort_packed_pairs() {
    // (key, tag) pairs packed into u64 with many repeated keys.
    let mut rng = StdRng::seed_from_u64(3);
    let mut keys: Vec<u64> = (0..5000u64)
        .map(|tag| ((rng.random_range(0..50u64)) << 32) | tag)
        .collect();
    let mut expected = keys.clone();
    expected.sort();

    let mut scratch = vec![0u64; keys.len()];
    radix_sort_keys(&mut keys, &mut scratch);
    assert_eq!(keys, expected);
}

#[test]
fn test_counting_sort_unstable() {
    let mut data = vec![5i64, -3, 2, 2, -3, 0, 5, 1];
    counting_sort(&mut data, -3, 5);
    assert_eq!(data, vec![-3, -3, 0, 1, 2, 2, 5, 5]);

    let mut data = vec![u32::MAX, u32::MAX - 2, u32::MAX - 1, u32::MAX];
    counting_sort(&mut data, u32::MAX - 2, u32::MAX);
    assert_eq!(data, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX, u32::MAX]);
}

#[test]
fn test_counting_sort_stable() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut data: Vec<i32> = (0..2000).map(|_| rng.random_range(-100..100)).collect();
    let mut expected = data.clone();
    expected.sort();

    let mut buffer = vec![0; data.len()];
    counting_sort_stable(&mut data, &mut buffer, -100, 99);
    assert_eq!(data, expected);
}

#[test]
#[should_panic]
fn test_counting_sort_rejects_out_of_range() {
    let mut data = vec![1u32, 2, 10];
    counting_sort(&mut data, 1, 3);
}
