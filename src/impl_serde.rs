//!
//! Support for serde implementations
//!
use crate::*;
use serde::{de, ser};
use stdlib::str::FromStr;


impl ser::Serialize for DigitInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a DigitInt
struct DigitIntVisitor;

impl<'de> de::Visitor<'de> for DigitIntVisitor {
    type Value = DigitInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a digit string or a non-negative integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<DigitInt, E>
    where
        E: de::Error,
    {
        DigitInt::from_str(value).map_err(|err| E::custom(format_args!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<DigitInt, E>
    where
        E: de::Error,
    {
        Ok(DigitInt::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<DigitInt, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(E::invalid_value(de::Unexpected::Signed(value), &self));
        }
        Ok(DigitInt::from(value as u64))
    }

    fn visit_u128<E>(self, value: u128) -> Result<DigitInt, E>
    where
        E: de::Error,
    {
        Ok(DigitInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<DigitInt, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(E::invalid_value(de::Unexpected::Other("negative integer"), &self));
        }
        Ok(DigitInt::from(value as u128))
    }
}

#[cfg(not(feature = "string-only"))]
impl<'de> de::Deserialize<'de> for DigitInt {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DigitIntVisitor)
    }
}

#[cfg(feature = "string-only")]
impl<'de> de::Deserialize<'de> for DigitInt {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(DigitIntVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error,
    };

    #[test]
    fn serialize_as_digit_string() {
        let d: DigitInt = "12345678910".parse().unwrap();
        assert_tokens(&d, &[Token::Str("12345678910")]);
    }

    #[test]
    fn serialize_keeps_high_zeros() {
        let d: DigitInt = "0071".parse().unwrap();
        assert_tokens(&d, &[Token::Str("0071")]);
    }

    #[cfg(not(feature = "string-only"))]
    #[test]
    fn deserialize_from_u64() {
        let d = DigitInt::from(585u32);
        assert_de_tokens(&d, &[Token::U64(585)]);
    }

    #[cfg(not(feature = "string-only"))]
    #[test]
    fn deserialize_negative_i64_fails() {
        assert_de_tokens_error::<DigitInt>(
            &[Token::I64(-585)],
            "invalid value: integer `-585`, expected a digit string or a non-negative integer",
        );
    }

    #[test]
    fn deserialize_bad_digit_string_fails() {
        assert_de_tokens_error::<DigitInt>(
            &[Token::Str("59x")],
            "Invalid digit character 'x'",
        );
    }
}
