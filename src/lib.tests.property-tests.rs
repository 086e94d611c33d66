// Property tests to be included by lib.rs (if enabled)


mod conversion {
    use super::*;

    proptest! {
        #[test]
        fn biguint_round_trip(n: u128) {
            let big = BigUint::from(n);
            let d = DigitInt::from(&big);
            prop_assert_eq!(d.to_biguint(), big);
        }

        #[test]
        fn display_round_trips_with_from_str(n: u128) {
            let d = DigitInt::from(n);
            let restored: DigitInt = d.to_string().parse().unwrap();
            prop_assert_eq!(&restored, &d);
            prop_assert_eq!(restored.digit_count(), d.digit_count());
        }

        #[test]
        fn digit_count_matches_decimal_width(n: u128) {
            let d = DigitInt::from(n);
            prop_assert_eq!(d.digit_count(), n.to_string().len());
        }
    }
}

mod aggregate_queries {
    use super::*;

    proptest! {
        #[test]
        fn digit_sum_matches_string_reference(n: u128) {
            let expected: u64 = n.to_string().bytes().map(|b| u64::from(b - b'0')).sum();
            prop_assert_eq!(DigitInt::from(n).sum_of_digits(), expected);
        }

        #[test]
        fn palindrome_matches_string_reference(n: u64) {
            let s = n.to_string();
            let expected = s.bytes().eq(s.bytes().rev());
            prop_assert_eq!(DigitInt::from(n).is_palindrome(), expected);
        }

        #[test]
        fn full_range_equals_whole_value(n: u64) {
            let d = DigitInt::from(n);
            let full = d.range_to_u64(0, d.digit_count() - 1).unwrap();
            prop_assert_eq!(full, n);
        }
    }
}

mod arrangement {
    use super::*;

    proptest! {
        #[test]
        fn next_permutation_strictly_increases(n in 0u64..10_000_000) {
            let mut d = DigitInt::from(n);
            let before = d.to_u64().unwrap();
            if d.next_permutation() {
                prop_assert!(d.to_u64().unwrap() > before);
            } else {
                prop_assert_eq!(d.to_u64().unwrap(), before);
            }
        }

        #[test]
        fn prev_permutation_inverts_next(n in 0u64..10_000_000) {
            let mut d = DigitInt::from(n);
            let start = d.clone();
            if d.next_permutation() {
                prop_assert!(d.prev_permutation());
                prop_assert_eq!(d.digits(), start.digits());
            }
        }

        #[test]
        fn rotation_by_count_is_identity(n: u64, turns in 0usize..4) {
            let mut d = DigitInt::from(n);
            let start = d.clone();
            d.rotate_left(d.digit_count() * turns);
            prop_assert_eq!(d.digits(), start.digits());
        }
    }
}
