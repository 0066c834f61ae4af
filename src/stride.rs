use crate::{Rational, RationalInt};
use num_traits::Zero;
use std::iter::FusedIterator;

impl<T: RationalInt> Rational<T> {
    /// Alias of `self + step`
    pub fn advanced_by(self, step: Self) -> Self {
        self + step
    }
    /// The step that takes `self` to `other`, so that
    /// `a.advanced_by(a.distance_to(b)) == b`
    pub fn distance_to(self, other: Self) -> Self {
        other - self
    }
}

/// An iterator counting from a start value towards an end value in
/// fixed steps. Created by `stride_to` and `stride_through`.
#[derive(Clone, Debug)]
pub struct Stride<T: RationalInt> {
    next: Option<Rational<T>>,
    end: Rational<T>,
    step: Rational<T>,
    inclusive: bool
}
impl<T: RationalInt> Stride<T> {
    fn new(start: Rational<T>, end: Rational<T>, step: Rational<T>, inclusive: bool) -> Self {
        assert!(!step.is_zero(), "stride step is 0");
        Self {
            next: Some(start),
            end,
            step,
            inclusive
        }
    }
    fn in_range(&self, value: Rational<T>) -> bool {
        match (self.step.is_positive(), self.inclusive) {
            (true, false) => value < self.end,
            (true, true) => value <= self.end,
            (false, false) => value > self.end,
            (false, true) => value >= self.end
        }
    }
}
impl<T: RationalInt> Iterator for Stride<T> {
    type Item = Rational<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if !self.in_range(current) {
            self.next = None;
            return None;
        }
        // Stop rather than overflow when the end is near the type's limits
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
impl<T: RationalInt> FusedIterator for Stride<T> {}

/// Count from `start` up to, but not including, `end`. A negative step
/// counts down instead.
/// ```rust
/// use rational_types::{stride_to, Rational};
/// let quarters: Vec<_> = stride_to(Rational::from(0), Rational::from(1), Rational::new(1, 4)).collect();
/// assert_eq!(quarters, [Rational::from(0), Rational::new(1, 4), Rational::new(1, 2), Rational::new(3, 4)]);
/// ```
///
/// ## Panics
/// Panics if the step is 0
pub fn stride_to<T: RationalInt>(start: Rational<T>, end: Rational<T>, step: Rational<T>) -> Stride<T> {
    Stride::new(start, end, step, false)
}
/// Like `stride_to`, but includes `end` if a step lands on it exactly
///
/// ## Panics
/// Panics if the step is 0
pub fn stride_through<T: RationalInt>(start: Rational<T>, end: Rational<T>, step: Rational<T>) -> Stride<T> {
    Stride::new(start, end, step, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Bounded;

    #[test]
    fn stride_to_quarters() {
        let values: Vec<_> = stride_to(Rational::from(0), Rational::from(1), Rational::new(1, 4)).collect();
        assert_eq!(values, [Rational::from(0), Rational::new(1, 4), Rational::new(1, 2), Rational::new(3, 4)]);
    }

    #[test]
    fn stride_through_quarters() {
        let values: Vec<_> = stride_through(Rational::from(0), Rational::from(1), Rational::new(1, 4)).collect();
        assert_eq!(
            values,
            [Rational::from(0), Rational::new(1, 4), Rational::new(1, 2), Rational::new(3, 4), Rational::from(1)]
        );
    }

    #[test]
    fn stride_down() {
        let values: Vec<_> = stride_through(Rational::from(1), Rational::new(-1, 3), Rational::new(-2, 3)).collect();
        assert_eq!(values, [Rational::from(1), Rational::new(1, 3), Rational::new(-1, 3)]);
        let values: Vec<_> = stride_to(Rational::from(1), Rational::new(-1, 3), Rational::new(-2, 3)).collect();
        assert_eq!(values, [Rational::from(1), Rational::new(1, 3)]);
    }

    #[test]
    fn stride_empty() {
        assert_eq!(stride_to(Rational::from(1), Rational::from(1), Rational::new(1, 2)).count(), 0);
        assert_eq!(stride_through(Rational::from(1), Rational::from(1), Rational::new(1, 2)).count(), 1);
        assert_eq!(stride_to(Rational::from(2), Rational::from(1), Rational::new(1, 2)).count(), 0);
    }

    #[test]
    fn stride_near_max() {
        let max = Rational::<i8>::max_value();
        let values: Vec<_> = stride_through(Rational::from(125), max, Rational::from(1)).collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values.last(), Some(&max));
    }

    #[test]
    #[should_panic(expected = "stride step is 0")]
    fn stride_zero_step() {
        stride_to(Rational::from(0), Rational::from(1), Rational::zero());
    }

    #[test]
    fn advance_distance() {
        let a = Rational::new(1, 3);
        let b = Rational::new(-5, 4);
        assert_eq!(a.advanced_by(Rational::new(1, 6)), Rational::new(1, 2));
        assert_eq!(a.distance_to(b), Rational::new(-19, 12));
        assert_eq!(a.advanced_by(a.distance_to(b)), b);
    }
}
