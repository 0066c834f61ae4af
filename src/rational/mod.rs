mod ops;
mod text;

use crate::{RationalError, RationalInt};
use log::trace;
use num_traits::{Bounded, NumCast, One, ToPrimitive, Zero};
use std::mem;

/// An exact fraction of two fixed-width integers. Unlike floats, (10/3) * 3
/// is exactly 10.
///
/// A value is always kept reduced: the denominator is positive and shares no
/// factor with the numerator. That way two equal numbers always have equal
/// fields, so `==` and `Hash` can just compare the fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    numerator: T,
    denominator: T
}
impl<T: RationalInt> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<T: RationalInt> Rational<T> {
    /// Construct a new rational and reduce it.
    /// ```rust
    /// use rational_types::Rational;
    /// assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
    /// assert_eq!(Rational::new(1, -3).numerator(), -1);
    /// assert_eq!(Rational::new(6, 3), Rational::from(2));
    /// ```
    ///
    /// ## Panics
    /// Panics if the denominator is 0, or if moving the sign to the
    /// numerator overflows, like `1 / MIN`
    pub fn new(numerator: T, denominator: T) -> Self {
        match Self::try_new(numerator, denominator) {
            Ok(me) => me,
            Err(err) => panic!("{}", err)
        }
    }
    /// Like `new`, but returns an error instead of panicking
    pub fn try_new(numerator: T, denominator: T) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        // gcd(0, MIN) and gcd(MIN, MIN) are |MIN|, which doesn't fit
        if numerator.is_zero() {
            return Ok(Self::zero());
        }
        if numerator == denominator {
            return Ok(Self::one());
        }

        let gcd = numerator.gcd(&denominator);
        Self::from_coprime_signed(numerator / gcd, denominator / gcd)
    }
    /// Like `from_coprime`, but the denominator may be negative. Fails if
    /// either half is MIN and has to be negated.
    pub(crate) fn from_coprime_signed(numerator: T, denominator: T) -> Result<Self, RationalError> {
        if denominator > T::zero() {
            return Ok(Self::from_coprime(numerator, denominator));
        }
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(numerator), Some(denominator)) => Ok(Self::from_coprime(numerator, denominator)),
            _ => Err(RationalError::Overflow)
        }
    }
    /// Skip reducing because the caller already knows the fraction is reduced
    /// and the denominator is positive. Only checked in debug builds.
    pub(crate) fn from_coprime(numerator: T, denominator: T) -> Self {
        debug_assert!(denominator > T::zero(), "denominator must be positive");
        debug_assert!(numerator.gcd(&denominator).is_one(), "fraction must be reduced");
        Self { numerator, denominator }
    }
    /// Construct a whole number
    pub fn from_integer(value: T) -> Self {
        Self::from_coprime(value, T::one())
    }
    /// Convert any primitive integer, or return None if it does not fit in T.
    /// ```rust
    /// use rational_types::Rational;
    /// assert_eq!(Rational::<i8>::exactly(100), Some(Rational::from(100)));
    /// assert_eq!(Rational::<i8>::exactly(1000), None);
    /// ```
    pub fn exactly<N: ToPrimitive>(value: N) -> Option<Self> {
        <T as NumCast>::from(value).map(Self::from_integer)
    }
    /// Return the numerator
    pub fn numerator(self) -> T {
        self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(self) -> T {
        self.denominator
    }
    /// Return both the numerator and the denominator
    pub fn to_ratio(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    pub fn is_negative(self) -> bool {
        self.numerator < T::zero()
    }
    pub fn is_positive(self) -> bool {
        self.numerator > T::zero()
    }
    /// Returns true if the denominator is 1
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }
    /// Returns true if the absolute value is less than 1
    pub fn is_proper_fraction(self) -> bool {
        // |MIN| can't be smaller than any denominator
        self.numerator != T::min_value() && self.numerator.abs() < self.denominator
    }

    /// The integer part, rounded towards zero
    pub fn quotient(self) -> T {
        self.numerator / self.denominator
    }
    /// What's left over from `quotient`, with the same sign as the numerator
    pub fn remainder(self) -> T {
        self.numerator % self.denominator
    }
    /// `quotient` and `remainder` in one division
    pub fn quotient_and_remainder(self) -> (T, T) {
        self.numerator.div_rem(&self.denominator)
    }
    /// Round towards negative infinity
    pub fn floor(self) -> T {
        if self.is_integer() {
            return self.numerator;
        }
        let quotient = self.quotient();
        if self.is_negative() { quotient - T::one() } else { quotient }
    }
    /// Round towards positive infinity
    pub fn ceil(self) -> T {
        if self.is_integer() {
            return self.numerator;
        }
        let quotient = self.quotient();
        if self.is_negative() { quotient } else { quotient + T::one() }
    }
    /// Round to the nearest integer. Halfway cases round away from zero, so
    /// 5/2 becomes 3 and -5/2 becomes -3.
    pub fn round(self) -> T {
        let (quotient, remainder) = self.quotient_and_remainder();
        if remainder.is_zero() {
            return quotient;
        }
        // 2 * |r| < d, written so it can't overflow
        let remainder = remainder.abs();
        if remainder < self.denominator - remainder {
            quotient
        } else if self.is_negative() {
            quotient - T::one()
        } else {
            quotient + T::one()
        }
    }
    /// Round away from zero, so 1/3 becomes 1 and -1/3 becomes -1
    pub fn round_away_from_zero(self) -> T {
        if self.is_integer() {
            return self.numerator;
        }
        let quotient = self.quotient();
        if self.is_negative() { quotient - T::one() } else { quotient + T::one() }
    }
    /// -1, 0 or 1 depending on the sign
    pub fn signum(self) -> T {
        self.numerator.signum()
    }
    /// The absolute value.
    ///
    /// # Panics
    /// Overflows if the numerator is MIN, just like the integer `abs`.
    /// Use `checked_magnitude` to avoid that.
    pub fn magnitude(self) -> Self {
        Self::from_coprime(self.numerator.abs(), self.denominator)
    }
    /// The absolute value, or None if the numerator is MIN
    pub fn checked_magnitude(self) -> Option<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    /// Find the closest rational whose denominator is at most `max`. Values
    /// that already fit are returned unchanged.
    /// ```rust
    /// use rational_types::Rational;
    /// let pi = Rational::new(3_141_592_653i64, 1_000_000_000);
    /// assert_eq!(pi.limit_denominator(10), Rational::new(22, 7));
    /// assert_eq!(pi.limit_denominator(1000), Rational::new(355, 113));
    /// ```
    ///
    /// ## Panics
    /// Panics if `max` is less than 1
    pub fn limit_denominator(self, max: T) -> Self {
        assert!(max >= T::one(), "maximum denominator must be at least 1");
        if self.denominator <= max {
            return self;
        }

        // Walk the continued fraction expansion. p1/q1 is the latest
        // convergent and p0/q0 the one before it.
        let (mut p0, mut q0, mut p1, mut q1) = (T::zero(), T::one(), T::one(), T::zero());
        let (mut n, mut d) = (self.numerator, self.denominator);

        loop {
            let (a, next) = n.div_mod_floor(&d);
            let q2 = q0 + a * q1;
            if q2 > max {
                break;
            }
            let p2 = p0 + a * p1;
            p0 = mem::replace(&mut p1, p2);
            q0 = mem::replace(&mut q1, q2);
            n = mem::replace(&mut d, next);
        }

        // Pick between the last convergent and the best semiconvergent that
        // still fits. p1/q1 is closer iff 2 * d * q <= denominator.
        let k = (max - q0) / q1;
        let q = q0 + k * q1;
        let result = if d.mul_full_width(q) <= (self.denominator / (T::one() + T::one())).widen() {
            Self::from_coprime(p1, q1)
        } else {
            Self::from_coprime(p0 + k * p1, q)
        };
        trace!("limited {:?} to {:?} (max denominator {})", self, result, max);
        result
    }
}
impl<T: RationalInt> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}
impl<T: RationalInt> Zero for Rational<T> {
    fn zero() -> Self {
        Self::from_coprime(T::zero(), T::one())
    }
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}
impl<T: RationalInt> One for Rational<T> {
    fn one() -> Self {
        Self::from_coprime(T::one(), T::one())
    }
    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}
impl<T: RationalInt> Bounded for Rational<T> {
    fn min_value() -> Self {
        Self::from_integer(T::min_value())
    }
    fn max_value() -> Self {
        Self::from_integer(T::max_value())
    }
}
