use std::fmt::{self, Display, Formatter};

use num_complex::Complex64;
use num_traits::Zero;

use crate::numeric::format::{format_g, format_g_signed};

/// A bare number taking part in polynomial arithmetic.
///
/// Integers and reals are promoted to complex values (with a zero imaginary part) once they
/// enter a polynomial; the tag is kept so that results read back from a polynomial can report
/// whether they are real or complex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// An integer
    Int(i64),
    /// A real number
    Real(f64),
    /// A complex number
    Complex(Complex64),
}

impl Scalar {
    /// Tags a complex value read back from a polynomial: real when the imaginary part is zero.
    pub fn from_complex(value: Complex64) -> Self {
        if value.im == 0.0 {
            Scalar::Real(value.re)
        } else {
            Scalar::Complex(value)
        }
    }

    /// The value as a complex number.
    pub fn to_complex(self) -> Complex64 {
        match self {
            Scalar::Int(v) => Complex64::new(v as f64, 0.0),
            Scalar::Real(v) => Complex64::new(v, 0.0),
            Scalar::Complex(v) => v,
        }
    }

    /// Real part.
    pub fn re(self) -> f64 {
        self.to_complex().re
    }

    /// Imaginary part; zero for integers and reals.
    pub fn im(self) -> f64 {
        self.to_complex().im
    }

    /// Whether the value equals 0.
    pub fn is_zero(self) -> bool {
        self.to_complex().is_zero()
    }

    /// Name of the scalar kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Real(_) => "float",
            Scalar::Complex(_) => "complex",
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Int(0)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}

impl From<Scalar> for Complex64 {
    fn from(value: Scalar) -> Self {
        value.to_complex()
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Real(v) => f.write_str(&format_g(v)),
            Scalar::Complex(v) => write!(f, "({}{}j)", format_g(v.re), format_g_signed(v.im)),
        }
    }
}

/// Complex division that leaves a real divisor acting on each part separately, so dividing a
/// real value by a real value gives exactly the real quotient.
#[inline]
pub(crate) fn complex_div(numerator: Complex64, denominator: Complex64) -> Complex64 {
    if denominator.im == 0.0 {
        Complex64::new(numerator.re / denominator.re, numerator.im / denominator.re)
    } else {
        numerator / denominator
    }
}
