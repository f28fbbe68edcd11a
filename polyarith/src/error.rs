//! Error types for polyarith

use thiserror::Error;

use crate::constants::MAX_EXPONENT;

/// Result type alias using polyarith's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by polynomial operations.
///
/// Every operation is atomic: when one of these is returned, no operand has been modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported operand type or operator for the requested operation
    #[error("{0}")]
    Type(String),

    /// Exponent above [`MAX_EXPONENT`]
    #[error(
        "Polynomial exponentiation with exponents higher than {} is not supported",
        MAX_EXPONENT
    )]
    Range {
        /// The rejected exponent
        exponent: i64,
    },

    /// Divisor is the zero polynomial or the scalar 0
    #[error("{0}")]
    DivisionByZero(&'static str),

    /// The coefficient storage a result needs cannot be allocated
    #[error("not enough memory to store the polynomial")]
    OutOfMemory,

    /// Attempt to assign a read-only attribute
    #[error("attribute '{attribute}' of 'Polynomial' objects is not writable")]
    ReadOnly {
        /// Name of the attribute
        attribute: String,
    },
}

impl Error {
    pub(crate) fn unsupported_operands(op: &str, lhs: &str, rhs: &str) -> Self {
        Error::Type(format!(
            "unsupported operand type(s) for {}: '{}' and '{}'",
            op, lhs, rhs
        ))
    }

    pub(crate) fn negative_order(what: &str, order: i64) -> Self {
        Error::Type(format!("{} order must be non-negative, got {}", what, order))
    }

    pub(crate) fn euclidean_division_by_zero() -> Self {
        Error::DivisionByZero("Polynomial Euclidean division by zero is undefined")
    }

    pub(crate) fn scalar_division_by_zero() -> Self {
        Error::DivisionByZero("Cannot divide Polynomial by zero")
    }
}
