// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A digit-array integer
//!
//! `DigitInt` stores a non-negative integer of any size as an owned
//! array of decimal digits, one digit per element. This makes queries
//! over individual digits cheap and direct: digit sums, palindrome
//! tests, extracting a run of digits as a number, or stepping a digit
//! multiset through its permutations.
//!
//! Digits are addressed from the *least significant* end: index `0` is
//! the ones digit, index `digit_count() - 1` the most significant.
//! Every accessor and range operation uses that convention.
//!
//! `DigitInt` deliberately implements no arithmetic. It converts to and
//! from [`num_bigint::BigUint`], and the expectation is that callers do
//! their math on `BigUint` (or a primitive) and move into digit form
//! only for digit-level work.
//!
//! # Example
//!
//! ```
//! use digitint::DigitInt;
//! use num_bigint::BigUint;
//! use num_traits::Pow;
//!
//! let n = BigUint::from(2u8).pow(15u32);
//! let digits = DigitInt::from(&n);
//!
//! assert_eq!(digits.to_string(), "32768");
//! assert_eq!(digits.sum_of_digits(), 26);
//! assert!(!digits.is_palindrome());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]

pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::fmt;
use self::stdlib::Vec;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{FromPrimitive, ToPrimitive};

// From<T>, TryFrom<T> impls
mod impl_convert;

// PartialEq, PartialOrd, Ord
mod impl_cmp;

// Display & Debug
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

// in-place arrangement stepping over digit slices
mod permutation;


/// Decompose primitive unsigned integer into little-endian digits
fn digits_from_uint(mut n: u128) -> Vec<u8> {
    let mut digits = Vec::with_capacity(8);
    loop {
        let (quotient, digit) = n.div_rem(&10);
        digits.push(digit as u8);
        n = quotient;
        if n == 0 {
            break;
        }
    }
    digits
}


/// An integer stored as an array of decimal digits.
///
#[derive(Clone, Eq)]
pub struct DigitInt {
    // least-significant digit at index 0; never empty; every element 0..=9
    digits: Vec<u8>,
}

impl DigitInt {
    /// Creates and initializes a `DigitInt`.
    ///
    /// The digit values must already be valid (under ten), stored
    /// least-significant first.
    fn from_digits(digits: Vec<u8>) -> DigitInt {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d <= 9));
        DigitInt {
            digits: digits,
        }
    }

    /// Return a zero value with exactly `n` digit positions.
    ///
    /// A count of zero is normalized to the minimal representation,
    /// a single `0` digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitint::DigitInt;
    ///
    /// let d = DigitInt::with_digit_count(5);
    /// assert_eq!(d.digit_count(), 5);
    /// assert_eq!(d.to_string(), "00000");
    /// ```
    pub fn with_digit_count(n: usize) -> DigitInt {
        DigitInt::from_digits(vec![0; n.max(1)])
    }

    /// Number of digit positions, counting high zeros.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Borrow the digits, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Return the digit at `index` (`0` is the ones digit).
    pub fn digit(&self, index: usize) -> Result<u8, DigitIntError> {
        self.digits.get(index).copied().ok_or(DigitIntError::IndexOutOfRange {
            index: index,
            count: self.digits.len(),
        })
    }

    /// Overwrite the digit at `index` with `value`.
    ///
    /// The digit count does not change; writing past the end is an
    /// error rather than an extension.
    pub fn set_digit(&mut self, index: usize, value: u8) -> Result<(), DigitIntError> {
        if value > 9 {
            return Err(DigitIntError::InvalidArgument("digit value must be in 0..=9"));
        }
        let count = self.digits.len();
        match self.digits.get_mut(index) {
            Some(digit) => {
                *digit = value;
                Ok(())
            }
            None => Err(DigitIntError::IndexOutOfRange {
                index: index,
                count: count,
            }),
        }
    }

    /// True if every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Sum of all digit values.
    pub fn sum_of_digits(&self) -> u64 {
        self.digits.iter().map(|&d| u64::from(d)).sum()
    }

    /// True if the digit sequence reads the same in both directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitint::DigitInt;
    ///
    /// assert!(DigitInt::from(585u32).is_palindrome());
    /// assert!(!DigitInt::from(586u32).is_palindrome());
    /// ```
    pub fn is_palindrome(&self) -> bool {
        self.digits.iter().eq(self.digits.iter().rev())
    }

    /// True if an n-digit value contains each digit `1..=n` exactly once.
    ///
    /// Only values of at most nine digits can qualify.
    pub fn is_pandigital(&self) -> bool {
        let n = self.digits.len();
        if n > 9 {
            return false;
        }

        let mut counts = [0u8; 10];
        for &d in self.digits.iter() {
            counts[d as usize] += 1;
        }

        counts[1..=n].iter().all(|&c| c == 1)
            && counts[0] == 0
            && counts[n + 1..].iter().all(|&c| c == 0)
    }

    /// True if `other` has the same digits in some order.
    ///
    /// Digit counts must match exactly, so `12` is not a digit
    /// permutation of `012`.
    pub fn is_digit_permutation_of(&self, other: &DigitInt) -> bool {
        if self.digits.len() != other.digits.len() {
            return false;
        }

        let mut counts = [0i32; 10];
        for (&a, &b) in self.digits.iter().zip(other.digits.iter()) {
            counts[a as usize] += 1;
            counts[b as usize] -= 1;
        }
        counts.iter().all(|&c| c == 0)
    }

    /// Reassemble the whole digit sequence as a `BigUint`.
    ///
    /// Inverse of `From<BigUint>` for values without high zeros.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_radix_le(&self.digits, 10).expect("digits are in 0..=9")
    }

    /// Reassemble the closed digit range `[low, high]` as a `BigUint`.
    ///
    /// The digit at index `high` becomes the most significant digit of
    /// the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitint::DigitInt;
    /// use num_bigint::BigUint;
    ///
    /// let d = DigitInt::from(12345678910u64);
    /// assert_eq!(d.range_to_biguint(0, 5).unwrap(), BigUint::from(678910u32));
    /// assert_eq!(d.range_to_biguint(6, 9).unwrap(), BigUint::from(2345u32));
    /// ```
    pub fn range_to_biguint(&self, low: usize, high: usize) -> Result<BigUint, DigitIntError> {
        let digits = self.range(low, high)?;
        Ok(BigUint::from_radix_le(digits, 10).expect("digits are in 0..=9"))
    }

    /// Reassemble the closed digit range `[low, high]` as a `u64`.
    ///
    /// Fails with `InvalidArgument` if the range holds more digits
    /// than a `u64` can carry.
    pub fn range_to_u64(&self, low: usize, high: usize) -> Result<u64, DigitIntError> {
        let digits = self.range(low, high)?;

        let mut value: u64 = 0;
        for &d in digits.iter().rev() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(d)))
                .ok_or(DigitIntError::InvalidArgument("digit range does not fit in u64"))?;
        }
        Ok(value)
    }

    /// Validate and borrow the closed index range `[low, high]`.
    fn range(&self, low: usize, high: usize) -> Result<&[u8], DigitIntError> {
        if low > high || high >= self.digits.len() {
            return Err(DigitIntError::IndexOutOfRange {
                index: high,
                count: self.digits.len(),
            });
        }
        Ok(&self.digits[low..=high])
    }

    /// Advance the digits, in place, to the next arrangement in
    /// increasing numeric order.
    ///
    /// Digits are treated as a multiset, so repeated values never
    /// produce the same arrangement twice. Returns `false` and leaves
    /// the digits untouched once the arrangement is already the
    /// greatest one; a driver loops until that happens:
    ///
    /// ```
    /// use digitint::DigitInt;
    ///
    /// let mut d = DigitInt::from(123u32);
    /// let mut seen = vec![d.to_string()];
    /// while d.next_permutation() {
    ///     seen.push(d.to_string());
    /// }
    /// assert_eq!(seen, ["123", "132", "213", "231", "312", "321"]);
    /// ```
    ///
    /// The digit count never changes; an arrangement may place `0` in
    /// the most significant position.
    pub fn next_permutation(&mut self) -> bool {
        permutation::next_arrangement(&mut self.digits)
    }

    /// Step the digits, in place, to the previous arrangement in
    /// numeric order.
    ///
    /// Mirror image of [`next_permutation`](Self::next_permutation):
    /// returns `false` once the arrangement is already the smallest.
    pub fn prev_permutation(&mut self) -> bool {
        permutation::prev_arrangement(&mut self.digits)
    }

    /// Reverse the digit sequence in place.
    ///
    /// The digit count is preserved, so reversing `100` gives `001`.
    pub fn reverse_digits(&mut self) {
        self.digits.reverse();
    }

    /// Reorder digits so values ascend from the ones digit upward.
    ///
    /// This produces the greatest number formed by the digits.
    pub fn sort_digits_ascending(&mut self) {
        self.digits.sort_unstable();
    }

    /// Reorder digits so values descend from the ones digit upward.
    ///
    /// This produces the smallest number formed by the digits, which
    /// may carry high zeros.
    pub fn sort_digits_descending(&mut self) {
        self.digits.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Shift digits toward significance by `places`, filling the low
    /// positions with zeros. Equivalent to multiplying by `10^places`.
    pub fn shift_left(&mut self, places: usize) {
        if places == 0 {
            return;
        }
        self.digits.splice(0..0, stdlib::iter::repeat(0).take(places));
    }

    /// Drop the `places` least significant digits. Equivalent to
    /// dividing by `10^places`; shifting every digit out leaves zero.
    pub fn shift_right(&mut self, places: usize) {
        if places >= self.digits.len() {
            self.digits.clear();
            self.digits.push(0);
        } else {
            self.digits.drain(..places);
        }
    }

    /// Cyclically rotate digits toward the most significant end.
    ///
    /// The `places` highest digits wrap around to the low positions;
    /// rotating by the digit count is the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitint::DigitInt;
    ///
    /// let mut d = DigitInt::from(1234u32);
    /// d.rotate_left(1);
    /// assert_eq!(d.to_string(), "2341");
    /// ```
    pub fn rotate_left(&mut self, places: usize) {
        let count = self.digits.len();
        self.digits.rotate_right(places % count);
    }

    /// Cyclically rotate digits toward the least significant end.
    ///
    /// The `places` lowest digits wrap around to the high positions.
    pub fn rotate_right(&mut self, places: usize) {
        let count = self.digits.len();
        self.digits.rotate_left(places % count);
    }

    /// Digits with high zeros trimmed; always at least one digit.
    pub(crate) fn significant_digits(&self) -> &[u8] {
        let count = self.digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
        &self.digits[..count]
    }
}

impl Default for DigitInt {
    #[inline]
    fn default() -> DigitInt {
        DigitInt::from_digits(vec![0])
    }
}

impl Hash for DigitInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // high zeros are trimmed so equal values hash equally
        self.significant_digits().hash(state);
    }
}


/// Error from a digit-level operation on a [`DigitInt`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitIntError {
    /// An argument outside its accepted domain: a negative
    /// construction value, a digit over nine, or a narrowing overflow
    InvalidArgument(&'static str),
    /// A digit or range index past the end of the digit sequence
    IndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for DigitIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DigitIntError::*;

        match *self {
            InvalidArgument(reason) => reason.fmt(f),
            IndexOutOfRange { index, count } => {
                write!(f, "index {} is out of range for {} digits", index, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitIntError {}


/// Error parsing a [`DigitInt`] from a string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDigitIntError {
    Empty,
    InvalidDigit(char),
}

impl fmt::Display for ParseDigitIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitIntError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "Invalid digit character {:?}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDigitIntError {}


#[cfg(test)]
extern crate paste;

#[cfg(test)]
#[allow(non_snake_case)]
mod digitint_tests {
    use super::*;
    use paste::paste;

    include!("lib.tests.rs");
}

#[cfg(all(test, property_tests))]
extern crate proptest;
