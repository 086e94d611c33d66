
mod construction {
    use super::*;

    #[test]
    fn with_digit_count_is_zero_filled() {
        let d = DigitInt::with_digit_count(9);
        assert_eq!(d.digit_count(), 9);
        assert!(d.is_zero());
        assert_eq!(d.to_biguint(), BigUint::from(0u8));
        assert_eq!(d.sum_of_digits(), 0);
    }

    #[test]
    fn with_digit_count_zero_is_normalized() {
        let d = DigitInt::with_digit_count(0);
        assert_eq!(d.digit_count(), 1);
        assert!(d.is_zero());
    }

    #[test]
    fn default_is_a_single_zero_digit() {
        let d = DigitInt::default();
        assert_eq!(d.digit_count(), 1);
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn reassignment_may_change_digit_count() {
        let mut d = DigitInt::from(99999u32);
        assert_eq!(d.digit_count(), 5);

        d = DigitInt::from(7u8);
        assert_eq!(d.digit_count(), 1);
    }
}

mod digit_access {
    use super::*;

    #[test]
    fn digits_read_least_significant_first() {
        let d = DigitInt::from(52987u32);
        assert_eq!(d.digit(0), Ok(7));
        assert_eq!(d.digit(1), Ok(8));
        assert_eq!(d.digit(4), Ok(5));
        assert_eq!(d.digits(), [7, 8, 9, 2, 5]);
    }

    #[test]
    fn read_past_end_is_out_of_range() {
        let d = DigitInt::from(123u32);
        assert_eq!(
            d.digit(3),
            Err(DigitIntError::IndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn write_replaces_a_digit_in_place() {
        let mut d = DigitInt::from(123u32);
        d.set_digit(2, 9).unwrap();
        assert_eq!(d.to_string(), "923");
        assert_eq!(d.digit_count(), 3);
    }

    #[test]
    fn write_value_over_nine_is_invalid_argument() {
        let mut d = DigitInt::from(123u32);
        let err = d.set_digit(0, 10).unwrap_err();
        assert!(matches!(err, DigitIntError::InvalidArgument(_)));
        // failed write leaves the digits untouched
        assert_eq!(d.to_string(), "123");
    }

    #[test]
    fn write_past_end_is_out_of_range() {
        let mut d = DigitInt::from(123u32);
        assert_eq!(
            d.set_digit(3, 1),
            Err(DigitIntError::IndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn writing_the_high_digit_to_zero_keeps_count() {
        let mut d = DigitInt::from(911u32);
        d.set_digit(2, 0).unwrap();
        assert_eq!(d.digit_count(), 3);
        assert_eq!(d.to_string(), "011");
        assert_eq!(d, DigitInt::from(11u8));
    }
}

mod sum_of_digits {
    use super::*;
    use num_traits::Pow;

    macro_rules! impl_case {
        ($value:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $value >]() {
                    assert_eq!(DigitInt::from($value).sum_of_digits(), $expected);
                }
            }
        };
    }

    impl_case!(0u8 => 0);
    impl_case!(5u8 => 5);
    impl_case!(12345u32 => 15);
    impl_case!(99999999u64 => 72);
    impl_case!(10000000019u64 => 11);

    #[test]
    fn digit_sum_of_a_large_power_of_two() {
        let n = BigUint::from(2u8).pow(1000u32);
        assert_eq!(DigitInt::from(&n).sum_of_digits(), 1366);
    }

    #[test]
    fn digit_sum_of_a_factorial() {
        let n = (1u32..=100).fold(BigUint::from(1u8), |acc, i| acc * i);
        assert_eq!(DigitInt::from(n).sum_of_digits(), 648);
    }
}

mod palindrome {
    use super::*;

    macro_rules! impl_case {
        ($value:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $value >]() {
                    assert_eq!(DigitInt::from($value).is_palindrome(), $expected);
                }
            }
        };
    }

    impl_case!(585u32 => true);
    impl_case!(586u32 => false);
    impl_case!(0u8 => true);
    impl_case!(7u8 => true);
    impl_case!(11u8 => true);
    impl_case!(10u8 => false);
    impl_case!(2002u32 => true);
    impl_case!(123454321u64 => true);
    impl_case!(123454322u64 => false);

    #[test]
    fn high_zeros_participate() {
        // 010 reads the same both ways, 0100 does not
        let d: DigitInt = "010".parse().unwrap();
        assert!(d.is_palindrome());

        let d: DigitInt = "0100".parse().unwrap();
        assert!(!d.is_palindrome());
    }
}

mod pandigital {
    use super::*;

    macro_rules! impl_case {
        ($value:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $value >]() {
                    assert_eq!(DigitInt::from($value).is_pandigital(), $expected);
                }
            }
        };
    }

    impl_case!(1u8 => true);
    impl_case!(21u8 => true);
    impl_case!(2143u32 => true);
    impl_case!(123456789u64 => true);
    impl_case!(918273645u64 => true);
    impl_case!(2u8 => false);
    impl_case!(1022u32 => false);
    impl_case!(123456780u64 => false);
    impl_case!(1234567891u64 => false);
}

mod range_extraction {
    use super::*;

    #[test]
    fn sub_ranges_of_12345678910() {
        let d = DigitInt::from(12345678910u64);
        assert_eq!(d.range_to_u64(0, 5), Ok(678910));
        assert_eq!(d.range_to_u64(6, 9), Ok(2345));
        assert_eq!(d.range_to_u64(0, 0), Ok(0));
        assert_eq!(d.range_to_u64(10, 10), Ok(1));
        assert_eq!(d.range_to_u64(0, 10), Ok(12345678910));
    }

    #[test]
    fn biguint_range_matches_u64_range() {
        let d = DigitInt::from(12345678910u64);
        assert_eq!(d.range_to_biguint(0, 5).unwrap(), BigUint::from(678910u32));
        assert_eq!(d.range_to_biguint(6, 9).unwrap(), BigUint::from(2345u32));
        assert_eq!(d.range_to_biguint(0, 10).unwrap(), d.to_biguint());
    }

    #[test]
    fn high_bound_past_end_is_out_of_range() {
        let d = DigitInt::from(12345678910u64);
        assert!(matches!(
            d.range_to_u64(0, 11),
            Err(DigitIntError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn inverted_bounds_are_out_of_range() {
        let d = DigitInt::from(12345678910u64);
        assert!(matches!(
            d.range_to_u64(5, 2),
            Err(DigitIntError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn range_too_wide_for_u64_is_invalid_argument() {
        let d: DigitInt = "999999999999999999999".parse().unwrap();
        assert!(matches!(
            d.range_to_u64(0, 20),
            Err(DigitIntError::InvalidArgument(_))
        ));
        // the arbitrary-precision form carries it fine
        assert_eq!(
            d.range_to_biguint(0, 20).unwrap().to_string(),
            "999999999999999999999"
        );
    }
}

mod permutation_stepping {
    use super::*;

    #[test]
    fn enumerates_arrangements_in_increasing_order() {
        let mut d = DigitInt::from(123u32);
        let mut seen = vec![d.to_u64().unwrap()];
        while d.next_permutation() {
            seen.push(d.to_u64().unwrap());
        }
        assert_eq!(seen, [123, 132, 213, 231, 312, 321]);
    }

    #[test]
    fn exhausted_arrangement_is_left_unchanged() {
        let mut d = DigitInt::from(321u32);
        assert!(!d.next_permutation());
        assert_eq!(d.to_string(), "321");
        assert!(!d.next_permutation());
    }

    #[test]
    fn zero_digits_keep_the_digit_count() {
        let mut d: DigitInt = "001".parse().unwrap();
        let mut seen = vec![d.to_string()];
        while d.next_permutation() {
            seen.push(d.to_string());
        }
        assert_eq!(seen, ["001", "010", "100"]);
    }

    #[test]
    fn prev_permutation_walks_the_chain_backwards() {
        let mut d = DigitInt::from(321u32);
        let mut seen = vec![d.to_u64().unwrap()];
        while d.prev_permutation() {
            seen.push(d.to_u64().unwrap());
        }
        assert_eq!(seen, [321, 312, 231, 213, 132, 123]);
    }

    #[test]
    fn single_digit_has_one_arrangement() {
        let mut d = DigitInt::from(4u8);
        assert!(!d.next_permutation());
        assert!(!d.prev_permutation());
        assert_eq!(d.to_string(), "4");
    }

    #[test]
    fn repeated_digits_never_repeat_an_arrangement() {
        let mut d: DigitInt = "1224".parse().unwrap();
        let mut seen = vec![d.to_string()];
        while d.next_permutation() {
            seen.push(d.to_string());
        }
        // 4!/2! distinct arrangements
        assert_eq!(seen.len(), 12);
        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(deduped, seen);
    }
}

mod rearrangement {
    use super::*;

    #[test]
    fn reverse_keeps_the_digit_count() {
        let mut d = DigitInt::from(12345u32);
        d.reverse_digits();
        assert_eq!(d.to_string(), "54321");

        let mut d = DigitInt::from(100u32);
        d.reverse_digits();
        assert_eq!(d.to_string(), "001");
        assert_eq!(d, DigitInt::from(1u8));
    }

    #[test]
    fn sort_ascending_builds_the_greatest_reading() {
        let mut d = DigitInt::from(314159u32);
        d.sort_digits_ascending();
        assert_eq!(d.to_string(), "954311");
    }

    #[test]
    fn sort_descending_builds_the_smallest_reading() {
        let mut d = DigitInt::from(314159u32);
        d.sort_digits_descending();
        assert_eq!(d.to_string(), "113459");

        // zeros sort into the high positions
        let mut d = DigitInt::from(1030u32);
        d.sort_digits_descending();
        assert_eq!(d.to_string(), "0013");
    }

    #[test]
    fn shift_left_multiplies_by_powers_of_ten() {
        let mut d = DigitInt::from(72639u32);
        d.shift_left(2);
        assert_eq!(d.to_string(), "7263900");
        d.shift_left(0);
        assert_eq!(d.to_string(), "7263900");
    }

    #[test]
    fn shift_right_divides_by_powers_of_ten() {
        let mut d = DigitInt::from(726398u32);
        d.shift_right(1);
        assert_eq!(d.to_string(), "72639");
    }

    #[test]
    fn shift_right_past_the_end_leaves_zero() {
        let mut d = DigitInt::from(726398u32);
        d.shift_right(7);
        assert_eq!(d.digit_count(), 1);
        assert!(d.is_zero());
    }

    #[test]
    fn rotations_cycle_the_digits() {
        let mut d = DigitInt::from(1234u32);
        d.rotate_left(1);
        assert_eq!(d.to_string(), "2341");
        d.rotate_right(1);
        assert_eq!(d.to_string(), "1234");

        // whole turns are the identity
        d.rotate_left(4);
        assert_eq!(d.to_string(), "1234");
        d.rotate_left(5);
        assert_eq!(d.to_string(), "2341");
    }

    #[test]
    fn rotation_may_park_a_zero_on_top() {
        let mut d = DigitInt::from(109u32);
        d.rotate_right(1);
        assert_eq!(d.to_string(), "910");
        d.rotate_right(1);
        assert_eq!(d.to_string(), "091");
        assert_eq!(d.digit_count(), 3);
    }
}

mod digit_multiset {
    use super::*;

    #[test]
    fn doubling_that_permutes_digits() {
        let a = DigitInt::from(125874u32);
        let b = DigitInt::from(251748u32);
        assert!(a.is_digit_permutation_of(&b));
        assert!(b.is_digit_permutation_of(&a));
    }

    #[test]
    fn different_multisets_are_not_permutations() {
        let a = DigitInt::from(123u32);
        assert!(!a.is_digit_permutation_of(&DigitInt::from(124u32)));
        assert!(!a.is_digit_permutation_of(&DigitInt::from(1233u32)));
    }

    #[test]
    fn digit_counts_must_match_exactly() {
        let padded: DigitInt = "0123".parse().unwrap();
        let plain = DigitInt::from(123u32);
        assert_eq!(padded, plain);
        assert!(!padded.is_digit_permutation_of(&plain));
    }
}
