use num_complex::Complex64;

use crate::{
    error::{Error, Result},
    polynomials::{polynomial::try_grow, Polynomial},
};

/// `(low + 1) * (low + 2) * ... * (low + count)`, the falling factorial `(low + count)! / low!`.
#[inline]
fn factorial_ratio(low: usize, count: usize) -> f64 {
    (low + 1..=low + count).fold(1.0, |acc, j| acc * j as f64)
}

fn checked_order(what: &str, order: i64) -> Result<usize> {
    usize::try_from(order).map_err(|_| Error::negative_order(what, order))
}

pub(crate) fn derive(coefficients: &[Complex64], order: usize) -> Vec<Complex64> {
    if order >= coefficients.len() {
        return Vec::new();
    }
    coefficients[order..]
        .iter()
        .enumerate()
        .map(|(i, c)| *c * factorial_ratio(i, order))
        .collect()
}

pub(crate) fn integrate(coefficients: &[Complex64], order: usize) -> Result<Vec<Complex64>> {
    if coefficients.is_empty() {
        return Ok(Vec::new());
    }
    let len = order
        .checked_add(coefficients.len())
        .ok_or(Error::OutOfMemory)?;
    let mut result = Vec::new();
    try_grow(&mut result, len)?;
    for (i, c) in coefficients.iter().enumerate() {
        result[order + i] = *c / factorial_ratio(i, order);
    }
    Ok(result)
}

impl Polynomial {
    /// The `order`-th derivative. Order 0 is the identity.
    ///
    /// # Returns
    /// - `Err(Error::Type)` for a negative order
    pub fn derivative(&self, order: i64) -> Result<Polynomial> {
        let order = checked_order("derivative", order)?;
        Ok(derive(self.coefficients(), order).into())
    }

    /// The `order`-th antiderivative, with a zero integration constant at every step.
    ///
    /// # Returns
    /// - `Err(Error::Type)` for a negative order
    /// - `Err(Error::OutOfMemory)` when the result cannot be stored
    pub fn integral(&self, order: i64) -> Result<Polynomial> {
        let order = checked_order("integral", order)?;
        Ok(integrate(self.coefficients(), order)?.into())
    }
}
