use crate::*;
use stdlib::str::FromStr;

impl FromStr for DigitInt {
    type Err = ParseDigitIntError;

    /// Parse a string of decimal digits, most significant first.
    ///
    /// The parsed digit sequence is kept exactly as written, so
    /// `"007"` yields a three digit value. Underscore separators are
    /// skipped; signs, whitespace, and anything else are invalid.
    fn from_str(s: &str) -> Result<DigitInt, ParseDigitIntError> {
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            if c == '_' {
                continue;
            }
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ParseDigitIntError::InvalidDigit(c)),
            }
        }
        if digits.is_empty() {
            return Err(ParseDigitIntError::Empty);
        }

        // strings read most significant digit first, storage does not
        digits.reverse();
        Ok(DigitInt::from_digits(digits))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let d = DigitInt::from_str($input).unwrap();
                assert_eq!(d.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_123: "123" => "123");
    impl_case!(case_0123: "0123" => "0123");
    impl_case!(case_000: "000" => "000");
    impl_case!(case_31_862_140: "31_862_140" => "31862140");
    impl_case!(case_1_000_000: "1_000_000" => "1000000");

    #[test]
    fn parsed_digits_are_least_significant_first() {
        let d = DigitInt::from_str("52987").unwrap();
        assert_eq!(d.digits(), [7, 8, 9, 2, 5]);
    }
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                DigitInt::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty: "" => "Empty");
    impl_case!(case_bad_string_only_underscores: "___" => "Empty");

    impl_case!(case_bad_string_hello: "hello" => "InvalidDigit");
    impl_case!(case_bad_string_negative: "-123" => "InvalidDigit");
    impl_case!(case_bad_string_plus_sign: "+123" => "InvalidDigit");
    impl_case!(case_bad_string_decimal_point: "12.3" => "InvalidDigit");
    impl_case!(case_bad_string_interior_space: "12 3" => "InvalidDigit");
    impl_case!(case_bad_string_hex: "0xCafeBeef" => "InvalidDigit");
}
