use num_integer::Integer;
use num_traits::{CheckedNeg, PrimInt, Signed};
use std::fmt;

/// The fixed-width signed integers a `Rational` can be built on.
///
/// Everything except the full-width multiply comes from `num-traits` and
/// `num-integer`. The full-width multiply is what lets comparisons stay
/// exact when `a * b` doesn't fit in the integer itself.
pub trait RationalInt:
    PrimInt + Signed + Integer + CheckedNeg + fmt::Display + fmt::Debug
{
    /// Big enough to hold the product of any two values of `Self`
    type Wide: Copy + Ord + fmt::Debug;

    /// Multiply two numbers without any possibility of overflowing
    fn mul_full_width(self, other: Self) -> Self::Wide;
    /// Convert into the wide representation without changing the value
    fn widen(self) -> Self::Wide;
}

macro_rules! impl_rational_int {
    ($($int:ident => $wide:ident),*) => {
        $(impl RationalInt for $int {
            type Wide = $wide;

            fn mul_full_width(self, other: Self) -> Self::Wide {
                self as $wide * other as $wide
            }
            fn widen(self) -> Self::Wide {
                self as $wide
            }
        })*
    }
}
impl_rational_int!(i8 => i16, i16 => i32, i32 => i64, i64 => i128, isize => i128);

/// A 256-bit two's complement integer, only used as the wide type of i128.
/// Field order matters: the derived `Ord` compares the signed high half
/// first, which is exactly the numeric order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct I256 {
    high: i128,
    low: u128
}
impl I256 {
    fn from_magnitude(negative: bool, high: u128, low: u128) -> Self {
        let (high, low) = if negative {
            // -x == !x + 1
            let (low, carry) = (!low).overflowing_add(1);
            ((!high).wrapping_add(carry as u128), low)
        } else {
            (high, low)
        };
        Self {
            high: high as i128,
            low
        }
    }
}

/// Long multiplication of two u128 using 64-bit limbs. Returns (high, low).
fn mul_u128(x: u128, y: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;

    let (x_high, x_low) = (x >> 64, x & MASK);
    let (y_high, y_low) = (y >> 64, y & MASK);

    let low_low = x_low * y_low;
    let high_low = x_high * y_low;
    let low_high = x_low * y_high;
    let high_high = x_high * y_high;

    // At most 3 * (2^64 - 1), no overflow
    let middle = (low_low >> 64) + (high_low & MASK) + (low_high & MASK);

    let low = (middle << 64) | (low_low & MASK);
    let high = high_high + (high_low >> 64) + (low_high >> 64) + (middle >> 64);
    (high, low)
}

impl RationalInt for i128 {
    type Wide = I256;

    fn mul_full_width(self, other: Self) -> Self::Wide {
        let negative = (self < 0) != (other < 0);
        let (high, low) = mul_u128(self.unsigned_abs(), other.unsigned_abs());
        I256::from_magnitude(negative, high, low)
    }
    fn widen(self) -> Self::Wide {
        I256 {
            high: if self < 0 { -1 } else { 0 },
            low: self as u128
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_full_width_native() {
        assert_eq!(i8::MIN.mul_full_width(i8::MIN), 16384i16);
        assert_eq!(i32::MAX.mul_full_width(-2), -4294967294i64);
        assert_eq!(i64::MIN.mul_full_width(i64::MAX), i64::MIN as i128 * i64::MAX as i128);
        assert_eq!(7i16.widen(), 7i32);
    }

    #[test]
    fn mul_u128_limbs() {
        assert_eq!(mul_u128(0, u128::MAX), (0, 0));
        assert_eq!(mul_u128(1 << 64, 1 << 64), (1, 0));
        assert_eq!(mul_u128(u128::MAX, u128::MAX), (u128::MAX - 1, 1));
        assert_eq!(mul_u128(u64::MAX as u128, u64::MAX as u128), (0, (u64::MAX as u128) * (u64::MAX as u128)));
    }

    #[test]
    fn mul_full_width_i128() {
        assert_eq!(3i128.mul_full_width(-4), (-12i128).widen());
        assert_eq!(0i128.mul_full_width(-4), 0i128.widen());
        assert_eq!(i128::MIN.mul_full_width(1), i128::MIN.widen());
        assert_eq!(i128::MIN.mul_full_width(-1), I256 { high: 0, low: 1 << 127 });
        assert_eq!(i128::MAX.mul_full_width(i128::MAX), I256 { high: (1 << 126) - 1, low: 1 });
    }

    #[test]
    fn wide_ordering_i128() {
        let big = i128::MAX.mul_full_width(2);
        let small = i128::MIN.mul_full_width(2);
        assert!(big > i128::MAX.widen());
        assert!(small < i128::MIN.widen());
        assert!((-1i128).widen() < 0i128.widen());
        assert!(i128::MIN.mul_full_width(i128::MIN) > big);
        assert!(i128::MIN.mul_full_width(i128::MAX) < small);
    }
}
