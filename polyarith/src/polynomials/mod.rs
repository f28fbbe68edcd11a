/// antiderivatives and derivatives
pub mod calculus;
/// runtime-typed operator table for host bindings
pub mod dispatch;
/// long division and gcd
pub mod division;
/// coefficient storage
pub mod polynomial;
/// ring operations
pub mod polynomial_arithmetic;
/// canonical text rendering
pub mod representation;

pub use division::{gcd, gcd_all};
pub use polynomial::{Polynomial, X};
