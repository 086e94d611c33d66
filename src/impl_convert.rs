//! Code for implementing From/To DigitInts

use crate::*;
use stdlib::convert::TryFrom;

use num_bigint::Sign;
use num_traits::Zero;


macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for DigitInt {
            fn from(n: $t) -> Self {
                DigitInt::from_digits(digits_from_uint(n as u128))
            }
        }

        impl From<&$t> for DigitInt {
            fn from(n: &$t) -> Self {
                DigitInt::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);


macro_rules! impl_try_from_int_primitive {
    ($t:ty) => {
        impl TryFrom<$t> for DigitInt {
            type Error = DigitIntError;

            fn try_from(n: $t) -> Result<Self, DigitIntError> {
                if n < 0 {
                    Err(DigitIntError::InvalidArgument("cannot represent a negative value"))
                } else {
                    Ok(DigitInt::from_digits(digits_from_uint(n as u128)))
                }
            }
        }
    };
}

impl_try_from_int_primitive!(i8);
impl_try_from_int_primitive!(i16);
impl_try_from_int_primitive!(i32);
impl_try_from_int_primitive!(i64);
impl_try_from_int_primitive!(i128);
impl_try_from_int_primitive!(isize);


impl From<&BigUint> for DigitInt {
    fn from(n: &BigUint) -> Self {
        if n.is_zero() {
            DigitInt::from_digits(vec![0])
        } else {
            DigitInt::from_digits(n.to_radix_le(10))
        }
    }
}

impl From<BigUint> for DigitInt {
    fn from(n: BigUint) -> Self {
        DigitInt::from(&n)
    }
}

impl TryFrom<&BigInt> for DigitInt {
    type Error = DigitIntError;

    fn try_from(n: &BigInt) -> Result<Self, DigitIntError> {
        match n.sign() {
            Sign::Minus => Err(DigitIntError::InvalidArgument("cannot represent a negative value")),
            _ => Ok(DigitInt::from(n.magnitude())),
        }
    }
}

impl TryFrom<BigInt> for DigitInt {
    type Error = DigitIntError;

    fn try_from(n: BigInt) -> Result<Self, DigitIntError> {
        DigitInt::try_from(&n)
    }
}

impl From<&DigitInt> for BigUint {
    fn from(d: &DigitInt) -> Self {
        d.to_biguint()
    }
}

impl From<DigitInt> for BigUint {
    fn from(d: DigitInt) -> Self {
        d.to_biguint()
    }
}



#[cfg(test)]
mod test_try_from_int_primitive {
    use super::*;

    #[test]
    fn positive_converts() {
        let d = DigitInt::try_from(840i32).unwrap();
        assert_eq!(d.to_string(), "840");
    }

    #[test]
    fn negative_is_invalid_argument() {
        let err = DigitInt::try_from(-1i64).unwrap_err();
        assert!(matches!(err, DigitIntError::InvalidArgument(_)));
    }
}

#[cfg(test)]
mod test_biguint_conversion {
    use super::*;

    #[test]
    fn round_trip() {
        let n = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
        let d = DigitInt::from(&n);
        assert_eq!(d.digit_count(), 30);
        assert_eq!(d.to_biguint(), n);
    }

    #[test]
    fn zero_biguint() {
        let d = DigitInt::from(BigUint::zero());
        assert_eq!(d.digits(), [0]);
        assert!(d.is_zero());
    }

    #[test]
    fn negative_bigint_is_invalid_argument() {
        let n = BigInt::from(-25);
        assert!(DigitInt::try_from(&n).is_err());
    }

    #[test]
    fn nonnegative_bigint_converts() {
        let n = BigInt::from(25);
        let d = DigitInt::try_from(n).unwrap();
        assert_eq!(d.to_string(), "25");
    }
}
