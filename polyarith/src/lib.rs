#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! polyarith
//!
//! Univariate polynomials over real and complex coefficients, usable as a numeric type.
//!
//! ```
//! use polyarith::{gcd, Polynomial, X};
//!
//! let p = (1 + X.clone()).pow(2).unwrap();
//! assert_eq!(p, Polynomial::new(vec![1, 2, 1]));
//! assert_eq!(p.repr(), "1 + 2 * X + X**2");
//!
//! let (quotient, remainder) = (1 + X.clone() + X.pow(2).unwrap()).divmod(X.clone() + 1).unwrap();
//! assert_eq!((quotient, remainder), (X.clone(), Polynomial::one()));
//!
//! assert_eq!(gcd(X.pow(6).unwrap() - 1, X.pow(9).unwrap() - 1), X.pow(3).unwrap() - 1);
//! ```

/// limits
pub mod constants;
/// errors
pub mod error;
/// scalars and number formatting
pub(crate) mod numeric;
/// math with polynomials
pub mod polynomials;

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;

pub use error::{Error, Result};
pub use numeric::scalar::Scalar;
pub use polynomials::{
    dispatch::{
        binary_op, call, compare, divmod, get_item, set_item, unary_op, BinaryOp, CompareOp,
        Operand, UnaryOp,
    },
    gcd, gcd_all, Polynomial, X,
};
