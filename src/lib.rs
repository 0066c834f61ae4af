//! Exact rational numbers on top of any fixed-width signed integer.
//!
//! ```rust
//! use rational_types::Rational;
//!
//! let third = Rational::new(1, 3);
//! assert_eq!(third * 3, Rational::from(1));
//! assert_eq!((third + Rational::new(1, 6)).to_string(), "1/2");
//! ```

mod error;
mod int;
mod rational;
mod stride;

pub use self::error::*;
pub use self::int::*;
pub use self::rational::*;
pub use self::stride::*;
