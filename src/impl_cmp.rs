//! Implementation of comparison operations
//!
//! Comparisons are by numeric value: high zeros do not participate,
//! so a five digit zero equals the single digit zero. The stored
//! digit sequences themselves can be compared through the `digits()`
//! slices if sequence identity matters.

use crate::*;

use stdlib::cmp::Ordering;


impl PartialEq for DigitInt {
    fn eq(&self, rhs: &DigitInt) -> bool {
        self.significant_digits() == rhs.significant_digits()
    }
}

impl Ord for DigitInt {
    fn cmp(&self, rhs: &DigitInt) -> Ordering {
        let lhs_digits = self.significant_digits();
        let rhs_digits = rhs.significant_digits();

        // more significant digits wins; equal lengths compare from the
        // high end down
        lhs_digits
            .len()
            .cmp(&rhs_digits.len())
            .then_with(|| lhs_digits.iter().rev().cmp(rhs_digits.iter().rev()))
    }
}

impl PartialOrd for DigitInt {
    fn partial_cmp(&self, rhs: &DigitInt) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}


#[cfg(test)]
mod test_cmp {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal $op:tt $b:literal) => {
            #[test]
            fn $name() {
                let a: DigitInt = $a.parse().unwrap();
                let b: DigitInt = $b.parse().unwrap();
                assert!(a $op b);
            }
        };
    }

    impl_case!(case_eq_0_0: "0" == "0");
    impl_case!(case_eq_0_00000: "0" == "00000");
    impl_case!(case_eq_123_123: "123" == "123");
    impl_case!(case_eq_123_0123: "123" == "0123");
    impl_case!(case_ne_123_321: "123" != "321");
    impl_case!(case_lt_99_100: "99" < "100");
    impl_case!(case_lt_099_100: "099" < "100");
    impl_case!(case_gt_910_19: "910" > "19");
    impl_case!(case_lt_12345_12354: "12345" < "12354");

    #[test]
    fn ordering_ignores_digit_count() {
        let zero_padded = DigitInt::with_digit_count(7);
        let zero = DigitInt::from(0u8);
        assert_eq!(zero_padded.cmp(&zero), Ordering::Equal);
    }
}

#[cfg(test)]
mod test_hash {
    use super::*;
    use stdlib::DefaultHasher;

    fn hash_of(d: &DigitInt) -> u64 {
        let mut hasher = DefaultHasher::default();
        d.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a: DigitInt = "0047".parse().unwrap();
        let b: DigitInt = "47".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn zero_hashes_like_padded_zero() {
        let a = DigitInt::from(0u8);
        let b = DigitInt::with_digit_count(12);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
