//! Error types raised by the numeric layers. Each failure mode is its own
//! type so callers can match on the kind rather than inspect messages.

use derive_more::{Display, From};

/// Ill-formed textual input to a number parser.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum ParseNumberError {
    #[display(fmt = "the input is empty")]
    Empty,
    #[display(fmt = "unexpected character '{}'", _0)]
    UnexpectedChar(char),
}

impl std::error::Error for ParseNumberError {}

/// Ill-formed textual input to the rational parser: either a grammar
/// violation or an explicit zero denominator.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
pub enum ParseRationalError {
    #[display(fmt = "{}", _0)]
    Number(ParseNumberError),
    #[display(fmt = "{}", _0)]
    DivideByZero(DivideByZeroError),
}

impl std::error::Error for ParseRationalError {}

/// Natural subtraction with a right-hand side larger than the left.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display(fmt = "attempt to subtract with underflow")]
pub struct UnderflowError;

impl std::error::Error for UnderflowError {}

/// Division or modulo by zero, including a zero rational denominator.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display(fmt = "division by zero")]
pub struct DivideByZeroError;

impl std::error::Error for DivideByZeroError {}

/// A NaN or infinite `f64` offered for exact conversion.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display(fmt = "cannot represent {} as an exact ratio", _0)]
pub struct NonFiniteError(pub f64);

impl std::error::Error for NonFiniteError {}
