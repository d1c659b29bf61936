use bytemuck::Zeroable;
use proptest::prelude::*;
use tieredsort::prelude::*;

fn reference<T: SortKey>(input: &[T]) -> Vec<T::Bits> {
    let mut expected = input.to_vec();
    expected.sort_by(T::key_cmp);
    expected.iter().map(|&v| bytemuck::cast(v)).collect()
}

fn check_all_entry_points<T: SortKey>(input: &[T]) -> Result<(), TestCaseError> {
    let expected = reference(input);
    let as_bits = |data: &[T]| -> Vec<T::Bits> { data.iter().map(|&v| bytemuck::cast(v)).collect() };

    let mut data = input.to_vec();
    sort(&mut data);
    prop_assert_eq!(as_bits(&data), expected.clone());

    let mut data = input.to_vec();
    stable_sort(&mut data);
    prop_assert_eq!(as_bits(&data), expected.clone());

    let mut buffer = vec![T::zeroed(); input.len()];
    let mut data = input.to_vec();
    sort_with_buffer(&mut data, &mut buffer);
    prop_assert_eq!(as_bits(&data), expected.clone());

    let mut data = input.to_vec();
    stable_sort_with_buffer(&mut data, &mut buffer);
    prop_assert_eq!(as_bits(&data), expected);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sort_i32(input in prop::collection::vec(any::<i32>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_u32(input in prop::collection::vec(any::<u32>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_i64(input in prop::collection::vec(any::<i64>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_u64(input in prop::collection::vec(any::<u64>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_f32(input in prop::collection::vec(any::<f32>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_f64(input in prop::collection::vec(any::<f64>(), 0..2000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_dense_i32(input in prop::collection::vec(-300i32..300, 256..3000)) {
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_dense_u64(
        base in any::<u64>(),
        offsets in prop::collection::vec(0u64..500, 256..3000),
    ) {
        let input: Vec<u64> = offsets.iter().map(|&o| base.wrapping_add(o)).collect();
        check_all_entry_points(&input)?;
    }

    #[test]
    fn prop_sort_is_idempotent(input in prop::collection::vec(any::<i64>(), 0..1000)) {
        let mut once = input.clone();
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sort_by_key_is_stable(keys in prop::collection::vec(-200i32..200, 0..3000)) {
        let mut records: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();
        let mut expected = records.clone();
        expected.sort_by_key(|r| r.0);

        sort_by_key(&mut records, |r| r.0);
        prop_assert_eq!(records, expected);
    }

    #[test]
    fn prop_sort_by_key_u32(keys in prop::collection::vec(any::<u32>(), 0..3000)) {
        let mut records: Vec<(u32, usize)> = keys.iter().copied().zip(0..).collect();
        let mut expected = records.clone();
        expected.sort_by_key(|r| r.0);

        sort_by_key(&mut records, |r| r.0);
        prop_assert_eq!(records, expected);
    }
}
