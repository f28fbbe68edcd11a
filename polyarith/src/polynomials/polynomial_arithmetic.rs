use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};
use tracing::debug;

use crate::{
    constants::MAX_EXPONENT,
    error::{Error, Result},
    numeric::{
        bitop::Msb,
        scalar::{complex_div, Scalar},
    },
    polynomials::Polynomial,
};

#[cfg(feature = "multithreading")]
use crate::constants::PARALLEL_MUL_THRESHOLD;

/// Applies `op` term-wise over the longer of the two inputs, missing terms read as 0.
fn zip_terms(
    a: &[Complex64],
    b: &[Complex64],
    op: impl Fn(Complex64, Complex64) -> Complex64,
) -> Vec<Complex64> {
    (0..a.len().max(b.len()))
        .map(|i| {
            op(
                a.get(i).copied().unwrap_or_else(Complex64::zero),
                b.get(i).copied().unwrap_or_else(Complex64::zero),
            )
        })
        .collect()
}

pub(crate) fn add(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    zip_terms(a, b, |x, y| x + y)
}

pub(crate) fn sub(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    zip_terms(a, b, |x, y| x - y)
}

pub(crate) fn scale(coefficients: &[Complex64], factor: Complex64) -> Vec<Complex64> {
    if factor.is_zero() {
        return Vec::new();
    }
    coefficients.iter().map(|c| *c * factor).collect()
}

/// Schoolbook convolution. `result[k]` accumulates `a[i] * b[k - i]` for increasing `i`, zero
/// terms of `a` skipped; the parallel path keeps the same order so both agree bit for bit.
pub(crate) fn multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let size = a.len() + b.len() - 1;

    #[cfg(feature = "multithreading")]
    if size >= PARALLEL_MUL_THRESHOLD {
        return multiply_parallel(a, b, size);
    }

    let mut result = vec![Complex64::zero(); size];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            result[i + j] += *x * *y;
        }
    }
    result
}

#[cfg(feature = "multithreading")]
fn multiply_parallel(a: &[Complex64], b: &[Complex64], size: usize) -> Vec<Complex64> {
    use rayon::prelude::*;

    let mut result = vec![Complex64::zero(); size];
    result
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, coefficient)| {
            let low = k.saturating_sub(b.len() - 1);
            let high = k.min(a.len() - 1);
            for i in low..=high {
                if !a[i].is_zero() {
                    *coefficient += a[i] * b[k - i];
                }
            }
        });
    result
}

/// Left-to-right binary exponentiation: square for every bit below the most significant one,
/// multiply by the base when the bit is set.
pub(crate) fn power(base: &[Complex64], exponent: u32) -> Vec<Complex64> {
    if exponent == 0 {
        return vec![Complex64::one()];
    }
    let mut result = base.to_vec();
    for bit in (0..exponent.get_msb()).rev() {
        result = multiply(&result, &result);
        if (exponent >> bit) & 1 == 1 {
            result = multiply(&result, base);
        }
    }
    result
}

/// Horner's scheme, highest coefficient first.
#[inline]
pub(crate) fn evaluate(coefficients: &[Complex64], x: Complex64) -> Complex64 {
    coefficients
        .iter()
        .rev()
        .fold(Complex64::zero(), |acc, c| acc * x + *c)
}

impl Polynomial {
    /// Evaluates the polynomial at `x` with Horner's scheme.
    ///
    /// The result is [`Scalar::Real`] whenever its imaginary part is zero.
    pub fn eval(&self, x: impl Into<Scalar>) -> Scalar {
        Scalar::from_complex(evaluate(self.coefficients(), x.into().to_complex()))
    }

    /// Multiplies every coefficient by `factor`. A zero factor gives the zero polynomial.
    pub fn scale(&self, factor: impl Into<Scalar>) -> Polynomial {
        scale(self.coefficients(), factor.into().to_complex()).into()
    }

    /// Divides every coefficient by a non-zero scalar.
    ///
    /// # Returns
    /// - `Err(Error::DivisionByZero)` when `divisor` is 0
    pub fn checked_div(&self, divisor: impl Into<Scalar>) -> Result<Polynomial> {
        let divisor = divisor.into().to_complex();
        if divisor.is_zero() {
            return Err(Error::scalar_division_by_zero());
        }
        Ok(self
            .iter()
            .map(|c| complex_div(*c, divisor))
            .collect::<Vec<_>>()
            .into())
    }

    /// Raises the polynomial to a non-negative integer power, `P**0 == 1` for every `P`.
    ///
    /// # Returns
    /// - `Err(Error::Type)` for a negative exponent
    /// - `Err(Error::Range)` for an exponent above [`MAX_EXPONENT`]
    pub fn pow(&self, exponent: i64) -> Result<Polynomial> {
        if exponent < 0 {
            return Err(Error::Type(format!(
                "Polynomial exponent must be a non-negative integer, got {}",
                exponent
            )));
        }
        if exponent > MAX_EXPONENT {
            return Err(Error::Range { exponent });
        }
        debug!(exponent, degree = self.degree(), "raising polynomial to a power");
        Ok(power(self.coefficients(), exponent as u32).into())
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.iter().map(|c| -*c).collect::<Vec<_>>().into()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

macro_rules! impl_polynomial_binop {
    ($trait:ident, $method:ident, $kernel:path) => {
        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $kernel(self.coefficients(), rhs.coefficients()).into()
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_polynomial_binop!(Add, add, add);
impl_polynomial_binop!(Sub, sub, sub);
impl_polynomial_binop!(Mul, mul, multiply);

// a scalar operand acts as a polynomial of degree 0 (or -1 for 0). A single integer type
// keeps `P - 1` inferable without annotations.
macro_rules! impl_scalar_binop {
    ($($scalar:ty),*) => {
        $(
            impl Add<$scalar> for &Polynomial {
                type Output = Polynomial;

                fn add(self, rhs: $scalar) -> Polynomial {
                    self + Polynomial::constant(rhs)
                }
            }

            impl Add<$scalar> for Polynomial {
                type Output = Polynomial;

                fn add(self, rhs: $scalar) -> Polynomial {
                    &self + rhs
                }
            }

            impl Add<&Polynomial> for $scalar {
                type Output = Polynomial;

                fn add(self, rhs: &Polynomial) -> Polynomial {
                    Polynomial::constant(self) + rhs
                }
            }

            impl Add<Polynomial> for $scalar {
                type Output = Polynomial;

                fn add(self, rhs: Polynomial) -> Polynomial {
                    self + &rhs
                }
            }

            impl Sub<$scalar> for &Polynomial {
                type Output = Polynomial;

                fn sub(self, rhs: $scalar) -> Polynomial {
                    self - Polynomial::constant(rhs)
                }
            }

            impl Sub<$scalar> for Polynomial {
                type Output = Polynomial;

                fn sub(self, rhs: $scalar) -> Polynomial {
                    &self - rhs
                }
            }

            impl Sub<&Polynomial> for $scalar {
                type Output = Polynomial;

                fn sub(self, rhs: &Polynomial) -> Polynomial {
                    Polynomial::constant(self) - rhs
                }
            }

            impl Sub<Polynomial> for $scalar {
                type Output = Polynomial;

                fn sub(self, rhs: Polynomial) -> Polynomial {
                    self - &rhs
                }
            }

            impl Mul<$scalar> for &Polynomial {
                type Output = Polynomial;

                fn mul(self, rhs: $scalar) -> Polynomial {
                    self.scale(rhs)
                }
            }

            impl Mul<$scalar> for Polynomial {
                type Output = Polynomial;

                fn mul(self, rhs: $scalar) -> Polynomial {
                    self.scale(rhs)
                }
            }

            impl Mul<&Polynomial> for $scalar {
                type Output = Polynomial;

                fn mul(self, rhs: &Polynomial) -> Polynomial {
                    rhs.scale(self)
                }
            }

            impl Mul<Polynomial> for $scalar {
                type Output = Polynomial;

                fn mul(self, rhs: Polynomial) -> Polynomial {
                    rhs.scale(self)
                }
            }

            impl PartialEq<$scalar> for Polynomial {
                fn eq(&self, other: &$scalar) -> bool {
                    self.degree() <= 0 && self.get(0) == Scalar::from(*other).to_complex()
                }
            }

            impl PartialEq<Polynomial> for $scalar {
                fn eq(&self, other: &Polynomial) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_scalar_binop!(i64, f64, Complex64, Scalar);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomials::X;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn add_mixed_operands() {
        assert_eq!(
            Polynomial::new(vec![1, 2]) + 0.5,
            Polynomial::new(vec![1.5, 2.0])
        );
        assert_eq!(
            Polynomial::new(vec![1, 2]) + c(0.0, 0.5),
            Polynomial::new(vec![c(1.0, 0.5), c(2.0, 0.0)])
        );
        assert_eq!(
            Polynomial::new(vec![1.0, 2.0, 0.5]) + Polynomial::new(vec![2, 3]),
            3 + 5 * X.clone() + 0.5 * X.pow(2).unwrap()
        );
    }

    #[test]
    fn cancellation_renormalizes() {
        let p = Polynomial::new(vec![1, 2, 3]);
        let q = Polynomial::new(vec![0, 0, 3]);
        assert_eq!((&p - &q).degree(), 1);
        assert_eq!((&p - &p).degree(), -1);
        assert_eq!(&p + &(-&p), Polynomial::zero());
    }

    #[test]
    fn multiply_by_zero_is_canonical_zero() {
        let zero = 0 * X.clone();
        assert_eq!(zero, 0);
        assert_eq!(zero.degree(), -1);
        assert!(zero.coefficients().is_empty());
        assert_eq!((X.clone() * Polynomial::zero()).degree(), -1);
        assert_eq!((X.clone() * 0.0).degree(), -1);
    }

    #[test]
    fn complex_multiplication() {
        let lhs = 1 + X.clone() + 2 * X.pow(2).unwrap();
        let rhs = c(-2.0, 1.0) * X.clone() - 2;
        let expected = -2
            + c(-4.0, 1.0) * X.clone()
            + c(-6.0, 1.0) * X.pow(2).unwrap()
            + c(-4.0, 2.0) * X.pow(3).unwrap();
        assert_eq!(lhs * rhs, expected);
    }

    #[test]
    fn power() {
        assert_eq!((1 + X.clone()).pow(2).unwrap(), 1 + 2 * X.clone() + X.pow(2).unwrap());
        assert_eq!(Polynomial::zero().pow(0).unwrap(), 1);
        assert_eq!(Polynomial::zero().pow(3).unwrap(), 0);
        assert_eq!(X.pow(1024).unwrap().degree(), 1024);
        assert_eq!(
            (1 + X.clone()).pow(5).unwrap(),
            Polynomial::new(vec![1, 5, 10, 10, 5, 1])
        );
        assert_eq!(X.pow(1025), Err(Error::Range { exponent: 1025 }));
        assert!(matches!(X.pow(-1), Err(Error::Type(_))));
    }

    #[test]
    fn scalar_division() {
        let p = Polynomial::new(vec![3, 6, 9]);
        assert_eq!(p.checked_div(3).unwrap(), Polynomial::new(vec![1, 2, 3]));
        assert_eq!(
            p.checked_div(c(0.0, 1.0)).unwrap(),
            Polynomial::new(vec![c(0.0, -3.0), c(0.0, -6.0), c(0.0, -9.0)])
        );
        assert!(matches!(p.checked_div(0), Err(Error::DivisionByZero(_))));
        assert!(matches!(p.checked_div(c(0.0, 0.0)), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn horner_evaluation() {
        let p = Polynomial::new(vec![1, -3, 0, 2]);
        assert_eq!(p.eval(2), Scalar::Real(11.0));
        assert_eq!(p.eval(0.5), Scalar::Real(1.0 - 1.5 + 0.25));
        assert_eq!(Polynomial::zero().eval(4), Scalar::Real(0.0));
        assert_eq!(
            (1 + X.pow(2).unwrap()).eval(c(0.0, 1.0)),
            Scalar::Real(0.0)
        );
        assert_eq!(X.eval(c(1.0, 2.0)), Scalar::Complex(c(1.0, 2.0)));
    }

    #[test]
    fn scalar_equality() {
        assert!(Polynomial::zero() == 0);
        assert!(Polynomial::new(vec![2.5]) == 2.5);
        assert!(2.5 == Polynomial::new(vec![2.5]));
        assert!(X.clone() != 0);
        assert!(Polynomial::new(vec![c(1.0, 1.0)]) == c(1.0, 1.0));
    }

    #[test]
    fn negation() {
        assert_eq!(-Polynomial::new(vec![1, -2]), Polynomial::new(vec![-1, 2]));
        assert_eq!(-Polynomial::zero(), Polynomial::zero());
    }

    #[test]
    fn large_product_matches_naive_sum() {
        let a: Vec<Complex64> = (0..400).map(|i| c((i % 7) as f64 - 3.0, 0.0)).collect();
        let b: Vec<Complex64> = (0..300).map(|i| c(0.0, (i % 5) as f64)).collect();
        let product = multiply(&a, &b);
        assert_eq!(product.len(), 699);
        let naive: Complex64 = (0..=200).map(|i| a[i] * b[200 - i]).sum();
        assert_eq!(product[200], naive);
    }

    #[test]
    fn integer_literal_results_take_method_calls() {
        assert_eq!((X.clone() - 1).degree(), 1);
        assert_eq!((2 * X.clone() + 1).eval(3), Scalar::Real(7.0));
        let square = (X.clone() - 1).pow(2).unwrap();
        assert_eq!(square, Polynomial::new(vec![1, -2, 1]));
        assert_eq!((1 - X.clone()).floor_div(-1).unwrap(), X.clone() - 1);
    }

    #[cfg(feature = "multithreading")]
    #[test]
    fn parallel_product_is_bit_identical() {
        let a: Vec<Complex64> = (0..PARALLEL_MUL_THRESHOLD / 2)
            .map(|i| c(((i * 37) % 11) as f64 / 3.0 - 1.7, ((i * 13) % 5) as f64 * 0.1))
            .collect();
        let b: Vec<Complex64> = (0..PARALLEL_MUL_THRESHOLD / 2 + 1)
            .map(|i| c(((i * 29) % 7) as f64 * 0.3 - 0.9, -(((i * 17) % 3) as f64) / 7.0))
            .collect();
        let size = a.len() + b.len() - 1;
        assert_eq!(size, PARALLEL_MUL_THRESHOLD);

        let mut serial = vec![Complex64::zero(); size];
        for (i, x) in a.iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            for (j, y) in b.iter().enumerate() {
                serial[i + j] += *x * *y;
            }
        }

        let parallel = multiply_parallel(&a, &b, size);
        assert_eq!(multiply(&a, &b), parallel);
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.re.to_bits(), p.re.to_bits());
            assert_eq!(s.im.to_bits(), p.im.to_bits());
        }
    }
}
