use super::Rational;
use crate::RationalInt;
use log::trace;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, Inv, One, Zero};
use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign}
};

// All operators cancel common factors *before* multiplying. Cross
// multiplying first and reducing after would overflow for values whose
// result fits just fine.

/// `x % y`, except that MIN % -1 is 0 instead of an overflow
fn int_rem<T: RationalInt>(x: T, y: T) -> T {
    if y == -T::one() { T::zero() } else { x % y }
}

impl<T: RationalInt> Rational<T> {
    /// Addition and subtraction share everything except the middle step.
    /// Reduces by gcd(d1, d2) first so intermediates only grow by the
    /// denominators' unique factors.
    fn combine(self, other: Self, op: fn(T, T) -> T) -> Self {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        let g = d1.gcd(&d2);
        if g.is_one() {
            return Self::from_coprime(op(n1 * d2, n2 * d1), d1 * d2);
        }

        let s = d1 / g;
        let t = op(n1 * (d2 / g), n2 * s);
        let g2 = t.gcd(&g);
        Self::from_coprime(t / g2, s * (d2 / g2))
    }
    fn checked_combine(self, other: Self, op: fn(&T, &T) -> Option<T>) -> Option<Self> {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        let g = d1.gcd(&d2);
        if g.is_one() {
            let numerator = op(&n1.checked_mul(&d2)?, &n2.checked_mul(&d1)?)?;
            return Some(Self::from_coprime(numerator, d1.checked_mul(&d2)?));
        }

        let s = d1 / g;
        let t = op(&n1.checked_mul(&(d2 / g))?, &n2.checked_mul(&s)?)?;
        let g2 = t.gcd(&g);
        Some(Self::from_coprime(t / g2, s.checked_mul(&(d2 / g2))?))
    }
    fn times(self, other: Self) -> Self {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        let g1 = n1.gcd(&d2);
        let g2 = n2.gcd(&d1);
        Self::from_coprime((n1 / g1) * (n2 / g2), (d1 / g2) * (d2 / g1))
    }
    /// Division for callers that already know `other` isn't 0
    fn divide(self, other: Self) -> Self {
        debug_assert!(!other.is_zero(), "division by zero");
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        // gcd(n1, n2) would overflow for 0 / MIN and MIN / MIN
        if n1.is_zero() {
            return Self::zero();
        }
        if n1 == n2 {
            return Self::new(d2, d1);
        }

        let g1 = n1.gcd(&n2);
        let g2 = d2.gcd(&d1);
        let numerator = (n1 / g1) * (d2 / g2);
        let denominator = (d1 / g2) * (n2 / g1);

        match Self::from_coprime_signed(numerator, denominator) {
            Ok(me) => me,
            Err(err) => panic!("{}", err)
        }
    }
    fn modulo(self, other: Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        if d1 == d2 {
            return Self::new(int_rem(n1, n2), d1);
        }
        let lcm = d1 / d1.gcd(&d2) * d2;
        Self::new(int_rem(n1 * (lcm / d1), n2 * (lcm / d2)), lcm)
    }

    /// The multiplicative inverse, 1/x. Returns None if this is 0, or if the
    /// numerator is MIN since -MIN doesn't fit.
    /// ```rust
    /// use rational_types::Rational;
    /// assert_eq!(Rational::new(-2, 3).reciprocal(), Some(Rational::new(-3, 2)));
    /// assert_eq!(Rational::new(i8::MIN, 3).reciprocal(), None);
    /// ```
    pub fn reciprocal(self) -> Option<Self> {
        let (numerator, denominator) = self.to_ratio();
        if numerator.is_zero() || numerator == T::min_value() {
            return None;
        }
        if numerator < T::zero() {
            Some(Self::from_coprime(-denominator, -numerator))
        } else {
            Some(Self::from_coprime(denominator, numerator))
        }
    }

    /// Calculates addition, but returns None on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.checked_combine(other, T::checked_add)
    }
    /// Calculates subtraction, but returns None on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.checked_combine(other, T::checked_sub)
    }
    /// Calculates multiplication, but returns None on overflow
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        let g1 = n1.gcd(&d2);
        let g2 = n2.gcd(&d1);
        let numerator = (n1 / g1).checked_mul(&(n2 / g2))?;
        let denominator = (d1 / g2).checked_mul(&(d2 / g1))?;
        Some(Self::from_coprime(numerator, denominator))
    }
    /// Calculates division, but returns None on overflow or if other is 0
    pub fn checked_div(self, other: Self) -> Option<Self> {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        if n2.is_zero() {
            return None;
        }
        if n1.is_zero() {
            return Some(Self::zero());
        }
        if n1 == n2 {
            return Some(Self::new(d2, d1));
        }

        let g1 = n1.gcd(&n2);
        let g2 = d2.gcd(&d1);
        let numerator = (n1 / g1).checked_mul(&(d2 / g2))?;
        let denominator = (d1 / g2).checked_mul(&(n2 / g1))?;
        Self::from_coprime_signed(numerator, denominator).ok()
    }
    /// Calculates remainder, but returns None on overflow or if other is 0
    pub fn checked_rem(self, other: Self) -> Option<Self> {
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        if n2.is_zero() {
            return None;
        }
        if d1 == d2 {
            return Some(Self::new(int_rem(n1, n2), d1));
        }
        let lcm = (d1 / d1.gcd(&d2)).checked_mul(&d2)?;
        let left = n1.checked_mul(&(lcm / d1))?;
        let right = n2.checked_mul(&(lcm / d2))?;
        Some(Self::new(int_rem(left, right), lcm))
    }
    /// Calculates negation, but returns None if the numerator is MIN
    pub fn checked_neg(self) -> Option<Self> {
        let numerator = self.numerator.checked_neg()?;
        Some(Self::from_coprime(numerator, self.denominator))
    }
}

impl<T: RationalInt> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so n1/d1 < n2/d2 <=> n1*d2 < n2*d1
        let (n1, d1) = self.to_ratio();
        let (n2, d2) = other.to_ratio();

        match (n1.checked_mul(&d2), n2.checked_mul(&d1)) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => {
                trace!("comparing {:?} and {:?} at full width", self, other);
                n1.mul_full_width(d2).cmp(&n2.mul_full_width(d1))
            }
        }
    }
}
impl<T: RationalInt> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: RationalInt> Neg for Rational<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_coprime(-self.numerator, self.denominator)
    }
}
impl<T: RationalInt> Inv for Rational<T> {
    type Output = Self;

    fn inv(self) -> Self::Output {
        self.reciprocal().expect("reciprocal of 0 or of a value with numerator MIN")
    }
}

impl<T: RationalInt> Rational<T> {
    fn plus(self, other: Self) -> Self {
        self.combine(other, |x, y| x + y)
    }
    fn minus(self, other: Self) -> Self {
        self.combine(other, |x, y| x - y)
    }
    fn divided_by(self, other: Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        self.divide(other)
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident),* --- $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl<T: RationalInt, R: Into<Rational<T>>> $trait<R> for Rational<T> {
            type Output = Self;
            fn $fn(self, other: R) -> Self {
                self.$call(other.into())
            }
        })*
        $(impl<T: RationalInt, R: Into<Rational<T>>> $trait_assign<R> for Rational<T> {
            fn $fn_assign(&mut self, other: R) {
                *self = *self $op_assign other;
            }
        })*
    }
}
impl_op! {
    Add add = plus,
    Sub sub = minus,
    Mul mul = times,
    Div div = divided_by,
    Rem rem = modulo
    ---
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/),
    RemAssign rem_assign = (%)
}

macro_rules! impl_checked {
    ($($trait:ident $fn:ident),*) => {
        $(impl<T: RationalInt> $trait for Rational<T> {
            fn $fn(&self, other: &Self) -> Option<Self> {
                Rational::$fn(*self, *other)
            }
        })*
    }
}
impl_checked! {
    CheckedAdd checked_add,
    CheckedSub checked_sub,
    CheckedMul checked_mul,
    CheckedDiv checked_div,
    CheckedRem checked_rem
}
impl<T: RationalInt> CheckedNeg for Rational<T> {
    fn checked_neg(&self) -> Option<Self> {
        Rational::checked_neg(*self)
    }
}

impl<T: RationalInt> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
impl<'a, T: RationalInt> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
impl<T: RationalInt> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
impl<'a, T: RationalInt> Product<&'a Rational<T>> for Rational<T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}
