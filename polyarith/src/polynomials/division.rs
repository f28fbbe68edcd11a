use num_complex::Complex64;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    numeric::scalar::complex_div,
    polynomials::{dispatch::Operand, polynomial::trim_trailing_zeros, Polynomial},
};

/// Euclidean division of `dividend` by a normalized, non-empty `divisor`.
///
/// Every step divides the running remainder's top coefficient by the divisor's leading
/// coefficient and pops that top coefficient instead of subtracting it, so the remainder
/// strictly shrinks even when the floating point cancellation is not exact.
///
/// # Returns
/// - `(quotient, remainder)` with `remainder.len() < divisor.len()`, both normalized
pub(crate) fn long_division(
    dividend: &[Complex64],
    divisor: &[Complex64],
) -> (Vec<Complex64>, Vec<Complex64>) {
    let mut remainder = dividend.to_vec();
    trim_trailing_zeros(&mut remainder);
    let divisor_len = divisor.len();
    if divisor_len == 0 || remainder.len() < divisor_len {
        return (Vec::new(), remainder);
    }

    let lead = divisor[divisor_len - 1];
    let mut quotient = vec![Complex64::zero(); remainder.len() - divisor_len + 1];
    while remainder.len() >= divisor_len {
        let shift = remainder.len() - divisor_len;
        let factor = match remainder.pop() {
            Some(top) => complex_div(top, lead),
            None => break,
        };
        quotient[shift] = factor;
        for (i, d) in divisor[..divisor_len - 1].iter().enumerate() {
            remainder[shift + i] -= factor * *d;
        }
        trim_trailing_zeros(&mut remainder);
    }
    trim_trailing_zeros(&mut quotient);
    (quotient, remainder)
}

/// Divides every coefficient by the leading one and pins the leading one to exactly 1.
fn make_monic(coefficients: &mut [Complex64]) {
    if let Some((last, rest)) = coefficients.split_last_mut() {
        let lead = *last;
        for c in rest.iter_mut() {
            *c = complex_div(*c, lead);
        }
        *last = Complex64::one();
    }
}

fn gcd_coefficients(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let (mut a, mut b) = if a.len() >= b.len() {
        (a.to_vec(), b.to_vec())
    } else {
        (b.to_vec(), a.to_vec())
    };
    let mut step = 0usize;
    while !b.is_empty() {
        let (_, remainder) = long_division(&a, &b);
        a = std::mem::replace(&mut b, remainder);
        step += 1;
        trace!(step, degree = a.len() as isize - 1, "euclid step");
    }
    make_monic(&mut a);
    a
}

impl Polynomial {
    /// Euclidean division: `self == divisor * quotient + remainder` with
    /// `deg(remainder) < deg(divisor)`.
    ///
    /// A scalar divisor is promoted to a constant polynomial.
    ///
    /// # Returns
    /// - `(quotient, remainder)`
    /// - `Err(Error::DivisionByZero)` when the divisor is the zero polynomial or 0
    pub fn divmod(&self, divisor: impl Into<Operand>) -> Result<(Polynomial, Polynomial)> {
        let divisor = divisor.into().into_polynomial();
        if divisor.is_zero() {
            return Err(Error::euclidean_division_by_zero());
        }
        debug!(
            dividend_degree = self.degree(),
            divisor_degree = divisor.degree(),
            "euclidean division"
        );
        let (quotient, remainder) = long_division(self.coefficients(), divisor.coefficients());
        Ok((quotient.into(), remainder.into()))
    }

    /// Quotient of the Euclidean division, the `//` operator.
    pub fn floor_div(&self, divisor: impl Into<Operand>) -> Result<Polynomial> {
        self.divmod(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of the Euclidean division, the `%` operator.
    pub fn rem_euclid(&self, divisor: impl Into<Operand>) -> Result<Polynomial> {
        self.divmod(divisor).map(|(_, remainder)| remainder)
    }

    /// This polynomial scaled so its leading coefficient is 1. The zero polynomial stays zero.
    pub fn monic(&self) -> Polynomial {
        let mut coefficients = self.coefficients().to_vec();
        make_monic(&mut coefficients);
        coefficients.into()
    }
}

/// Monic greatest common divisor of two polynomials, by Euclid's algorithm.
///
/// `gcd(P, 0)` is `P` made monic, the gcd with a non-zero constant is 1, and `gcd(0, 0)` is 0.
pub fn gcd(a: impl Into<Operand>, b: impl Into<Operand>) -> Polynomial {
    let a = a.into().into_polynomial();
    let b = b.into().into_polynomial();
    let result: Polynomial = gcd_coefficients(a.coefficients(), b.coefficients()).into();
    debug!(
        lhs_degree = a.degree(),
        rhs_degree = b.degree(),
        gcd_degree = result.degree(),
        "computed gcd"
    );
    result
}

/// Monic greatest common divisor of two or more polynomials.
///
/// # Returns
/// - `Err(Error::Type)` when fewer than two polynomials are given
pub fn gcd_all<I>(polynomials: I) -> Result<Polynomial>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let mut operands = polynomials.into_iter();
    let (first, second) = match (operands.next(), operands.next()) {
        (Some(first), Some(second)) => (first, second),
        _ => {
            return Err(Error::Type(
                "'gcd' takes two or more polynomials as arguments".to_string(),
            ))
        }
    };
    Ok(operands.fold(gcd(first, second), |acc, next| gcd(acc, next)))
}
