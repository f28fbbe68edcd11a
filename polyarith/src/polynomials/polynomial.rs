use std::{iter::FromIterator, ops::Index, slice};

use lazy_static::lazy_static;
use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::{
    error::{Error, Result},
    numeric::scalar::Scalar,
};

static ZERO: Complex64 = Complex64::new(0.0, 0.0);

lazy_static! {
    /// The indeterminate, `0 + 1 * X`.
    pub static ref X: Polynomial = Polynomial::x();
}

/// A univariate polynomial with real or complex coefficients.
///
/// Coefficients are stored in ascending degree order and never end in a zero; the zero
/// polynomial owns no coefficients at all. Every constructor and every mutation goes through
/// [`trim_trailing_zeros`], so the degree is always the stored length minus one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex64>,
}

/// Pads `coefficients` with zeros up to `len`, reporting a failed allocation instead of
/// aborting. Shorter targets leave the vector untouched.
pub(crate) fn try_grow(coefficients: &mut Vec<Complex64>, len: usize) -> Result<()> {
    if len > coefficients.len() {
        coefficients
            .try_reserve_exact(len - coefficients.len())
            .map_err(|_| Error::OutOfMemory)?;
        coefficients.resize(len, Complex64::zero());
    }
    Ok(())
}

/// Drops high-order zero coefficients.
#[inline]
pub(crate) fn trim_trailing_zeros(coefficients: &mut Vec<Complex64>) {
    while coefficients.last().map_or(false, |c| c.is_zero()) {
        coefficients.pop();
    }
}

impl Polynomial {
    /// Builds a polynomial from coefficients in ascending degree order.
    ///
    /// # Arguments
    /// - `coefficients` - index `i` holds the coefficient of `X**i`
    pub fn new<I, S>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        coefficients
            .into_iter()
            .map(|c| c.into().to_complex())
            .collect::<Vec<_>>()
            .into()
    }

    /// The zero polynomial, of degree -1.
    #[inline]
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// The constant polynomial 1.
    #[inline]
    pub fn one() -> Self {
        Self {
            coefficients: vec![Complex64::one()],
        }
    }

    /// The polynomial `X`.
    pub fn x() -> Self {
        Self {
            coefficients: vec![Complex64::zero(), Complex64::one()],
        }
    }

    /// Wraps a bare number as a polynomial of degree 0 (or -1 for 0).
    pub fn constant(value: impl Into<Scalar>) -> Self {
        vec![value.into().to_complex()].into()
    }

    /// `value * X**degree`. A zero `value` gives the zero polynomial whatever the degree.
    ///
    /// # Returns
    /// - `Err(Error::OutOfMemory)` when `degree + 1` coefficients cannot be stored
    pub fn monomial(value: impl Into<Scalar>, degree: usize) -> Result<Self> {
        let value = value.into().to_complex();
        if value.is_zero() {
            return Ok(Self::zero());
        }
        let mut coefficients = Vec::new();
        try_grow(
            &mut coefficients,
            degree.checked_add(1).ok_or(Error::OutOfMemory)?,
        )?;
        coefficients[degree] = value;
        Ok(Self { coefficients })
    }

    /// Index of the highest non-zero coefficient, or -1 for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    /// Whether this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Whether every coefficient has a zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.coefficients.iter().all(|c| c.im == 0.0)
    }

    /// Coefficient of the highest-degree term; 0 for the zero polynomial.
    #[inline]
    pub fn leading_coefficient(&self) -> Complex64 {
        self.coefficients.last().copied().unwrap_or(ZERO)
    }

    /// Coefficient of `X**index`; 0 above the degree.
    #[inline]
    pub fn get(&self, index: usize) -> Complex64 {
        self.coefficients.get(index).copied().unwrap_or(ZERO)
    }

    /// Coefficient of `X**index`, tagged real or complex.
    pub fn coefficient(&self, index: usize) -> Scalar {
        Scalar::from_complex(self.get(index))
    }

    /// Assigns the coefficient of `X**index`, growing the storage when needed and re-trimming
    /// when the top coefficient becomes zero.
    ///
    /// # Returns
    /// - `Err(Error::OutOfMemory)` when the storage cannot grow to `index + 1`; the polynomial
    ///   is left unchanged
    pub fn set_coefficient(&mut self, index: usize, value: impl Into<Scalar>) -> Result<()> {
        let value = value.into().to_complex();
        if index >= self.coefficients.len() {
            if value.is_zero() {
                return Ok(());
            }
            try_grow(
                &mut self.coefficients,
                index.checked_add(1).ok_or(Error::OutOfMemory)?,
            )?;
        }
        self.coefficients[index] = value;
        trim_trailing_zeros(&mut self.coefficients);
        Ok(())
    }

    /// Normalized coefficients, lowest degree first.
    #[inline]
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Takes the normalized coefficient vector, lowest degree first.
    pub fn into_coefficients(self) -> Vec<Complex64> {
        self.coefficients
    }

    /// Iterates over the stored coefficients, lowest degree first.
    pub fn iter(&self) -> slice::Iter<'_, Complex64> {
        self.coefficients.iter()
    }
}

impl From<Vec<Complex64>> for Polynomial {
    fn from(mut coefficients: Vec<Complex64>) -> Self {
        trim_trailing_zeros(&mut coefficients);
        Self { coefficients }
    }
}

impl From<Scalar> for Polynomial {
    fn from(value: Scalar) -> Self {
        Polynomial::constant(value)
    }
}

impl<S: Into<Scalar>> FromIterator<S> for Polynomial {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Polynomial::new(iter)
    }
}

impl Index<usize> for Polynomial {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        self.coefficients.get(index).unwrap_or(&ZERO)
    }
}

impl IntoIterator for Polynomial {
    type Item = Complex64;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Complex64;
    type IntoIter = slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

/// Builds a [`Polynomial`] from coefficients in ascending degree order.
///
/// ```
/// use polyarith::{poly, X};
///
/// assert_eq!(poly![1, 0, 3], 1 + 3 * X.pow(2).unwrap());
/// assert_eq!(poly![].degree(), -1);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Polynomial::zero()
    };
    ($($coefficient:expr),+ $(,)?) => {
        $crate::Polynomial::new(vec![$($crate::Scalar::from($coefficient)),+])
    };
}
