//! proptest strategies for polynomials.
//!
//! Coefficients are small integers (or Gaussian integers) so that sums, products and
//! divisions by monic divisors stay exact in `f64`, and properties can be checked with `==`.

use num_complex::Complex64;
use proptest::{collection::vec, prelude::*};

use crate::Polynomial;

/// An integer coefficient in `-20..=20`.
pub fn small_coefficient() -> impl Strategy<Value = i64> {
    -20i64..=20
}

/// A polynomial of degree at most 5 with small integer coefficients, the zero polynomial
/// included.
pub fn small_polynomial() -> impl Strategy<Value = Polynomial> {
    vec(small_coefficient(), 0..=6).prop_map(Polynomial::new)
}

/// Like [`small_polynomial`] but never zero.
pub fn nonzero_polynomial() -> impl Strategy<Value = Polynomial> {
    small_polynomial().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

/// A monic polynomial of degree 1 to 3 with small integer coefficients.
pub fn monic_polynomial() -> impl Strategy<Value = Polynomial> {
    vec(small_coefficient(), 1..=3).prop_map(|mut coefficients| {
        coefficients.push(1);
        Polynomial::new(coefficients)
    })
}

/// A polynomial of degree at most 4 with Gaussian integer coefficients.
pub fn complex_polynomial() -> impl Strategy<Value = Polynomial> {
    vec((-9i32..=9, -9i32..=9), 0..=5).prop_map(|parts| {
        Polynomial::new(
            parts
                .into_iter()
                .map(|(re, im)| Complex64::new(re as f64, im as f64)),
        )
    })
}
