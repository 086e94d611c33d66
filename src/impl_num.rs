//! Code for num_traits

use crate::*;
use stdlib::convert::TryFrom;

use num_traits::{FromPrimitive, ToPrimitive};


impl ToPrimitive for DigitInt {
    fn to_u64(&self) -> Option<u64> {
        let mut value: u64 = 0;
        for &d in self.significant_digits().iter().rev() {
            value = value.checked_mul(10)?.checked_add(u64::from(d))?;
        }
        Some(value)
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        let mut value: u128 = 0;
        for &d in self.significant_digits().iter().rev() {
            value = value.checked_mul(10)?.checked_add(u128::from(d))?;
        }
        Some(value)
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| i128::try_from(n).ok())
    }
}

impl FromPrimitive for DigitInt {
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(n.into())
    }

    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().map(DigitInt::from)
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(n.into())
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        u128::try_from(n).ok().map(DigitInt::from)
    }
}


#[cfg(test)]
mod test_to_primitive {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:expr) => {
            #[test]
            fn $name() {
                let d: DigitInt = $input.parse().unwrap();
                assert_eq!(d.to_u64(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => Some(0));
    impl_case!(case_321: "321" => Some(321));
    impl_case!(case_0321: "0321" => Some(321));
    impl_case!(case_u64_max: "18446744073709551615" => Some(u64::MAX));
    impl_case!(case_u64_max_plus_one: "18446744073709551616" => None);

    #[test]
    fn u128_carries_past_u64() {
        let d: DigitInt = "18446744073709551616".parse().unwrap();
        assert_eq!(d.to_u128(), Some(u128::from(u64::MAX) + 1));
    }
}

#[cfg(test)]
mod test_from_primitive {
    use super::*;

    #[test]
    fn from_u64_always_converts() {
        let d = DigitInt::from_u64(907).unwrap();
        assert_eq!(d.to_string(), "907");
    }

    #[test]
    fn from_negative_i64_is_none() {
        assert_eq!(DigitInt::from_i64(-3), None);
    }

    #[test]
    fn from_nonnegative_i128_converts() {
        let d = DigitInt::from_i128(1 << 100).unwrap();
        assert_eq!(d.to_biguint(), BigUint::from(1u8) << 100usize);
    }
}
