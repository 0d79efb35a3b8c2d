//! Arbitrary-precision numeric value types: natural numbers, signed
//! integers, and exact rationals, with decimal text I/O, `f64` conversions,
//! and string-based serde representations.

mod big_int;
mod big_rational;
mod big_uint;
mod error;
mod fraction;

pub use big_int::{BigInt, Sign};
pub use big_rational::BigRational;
pub use big_uint::{BigUint, DIGIT_BITS};
pub use error::{DivideByZeroError, NonFiniteError, ParseNumberError, ParseRationalError,
                UnderflowError};
pub use fraction::Fraction;

pub use num_traits::{One, Zero};
