use super::Rational;
use crate::{ParseRationalError, RationalInt};
use num_traits::Num;
use std::{any, fmt, str::FromStr};

impl<T: RationalInt> Rational<T> {
    /// Parse `[+-]digits[/digits]` in the specified radix. No whitespace is
    /// allowed anywhere and only the numerator may carry a sign.
    fn parse_radix(input: &str, radix: u32) -> Result<Self, ParseRationalError> {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {}", radix);
        if input.is_empty() {
            return Err(ParseRationalError::Empty);
        }

        let (numerator, denominator) = match input.find('/') {
            Some(slash) => (&input[..slash], Some(&input[slash + 1..])),
            None => (input, None)
        };

        let numerator = parse_part::<T>(numerator, radix, true)?;
        let denominator = match denominator {
            None => return Ok(Self::from_integer(numerator)),
            Some("") => return Err(ParseRationalError::MissingDenominator),
            Some(part) => parse_part::<T>(part, radix, false)?
        };

        Ok(Self::try_new(numerator, denominator)?)
    }
}

fn parse_part<T: RationalInt>(input: &str, radix: u32, signed: bool) -> Result<T, ParseRationalError> {
    let digits = if signed {
        input.strip_prefix(&['+', '-'][..]).unwrap_or(input)
    } else {
        input
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseRationalError::InvalidDigit);
    }
    // Only digits are left, so the only possible failure is the range
    T::from_str_radix(input, radix).map_err(|_| ParseRationalError::OutOfRange)
}

impl<T: RationalInt> FromStr for Rational<T> {
    type Err = ParseRationalError;

    /// Parse the format written by `Display`.
    /// ```rust
    /// use rational_types::Rational;
    /// assert_eq!("2/4".parse::<Rational<i32>>(), Ok(Rational::new(1, 2)));
    /// assert!("2 / 3".parse::<Rational<i32>>().is_err());
    /// assert!("128/2".parse::<Rational<i8>>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(input, 10)
    }
}
impl<T: RationalInt> Num for Rational<T> {
    type FromStrRadixErr = ParseRationalError;

    /// Parse `[+-]digits[/digits]` with digits in the given radix.
    ///
    /// ## Panics
    /// Panics if the radix is not in 2..=36, like the integer versions
    fn from_str_radix(input: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Self::parse_radix(input, radix)
    }
}
impl<T: RationalInt> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.sign_plus() && !self.is_negative() {
            write!(f, "+")?;
        }
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
impl<T: RationalInt> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rational<{}>({:?}, {:?})", any::type_name::<T>(), self.numerator, self.denominator)
    }
}
