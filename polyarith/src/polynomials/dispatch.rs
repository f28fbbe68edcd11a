//! Dynamically typed operator table.
//!
//! Host bindings receive operands whose kind is only known at runtime. Each operation here
//! matches on the [`Operand`] tags explicitly and either promotes scalars to constant
//! polynomials or rejects the combination with [`Error::Type`].

use num_complex::Complex64;

use crate::{
    error::{Error, Result},
    numeric::scalar::Scalar,
    polynomials::Polynomial,
};

/// A value taking part in a dynamically dispatched operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A bare number
    Scalar(Scalar),
    /// A polynomial
    Poly(Polynomial),
}

impl Operand {
    /// Name of the operand kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(s) => s.type_name(),
            Operand::Poly(_) => "Polynomial",
        }
    }

    /// The operand as a polynomial, promoting a scalar to a constant one.
    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Operand::Scalar(s) => Polynomial::constant(s),
            Operand::Poly(p) => p,
        }
    }
}

macro_rules! impl_operand_from_scalar {
    ($($scalar:ty),*) => {
        $(
            impl From<$scalar> for Operand {
                fn from(value: $scalar) -> Self {
                    Operand::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_operand_from_scalar!(i32, i64, f64, Complex64, Scalar);

impl From<Polynomial> for Operand {
    fn from(value: Polynomial) -> Self {
        Operand::Poly(value)
    }
}

impl From<&Polynomial> for Operand {
    fn from(value: &Polynomial) -> Self {
        Operand::Poly(value.clone())
    }
}

/// Binary operators with a polynomial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, only by a scalar
    TrueDiv,
    /// `//`, the Euclidean quotient
    FloorDiv,
    /// `%`, the Euclidean remainder
    Mod,
    /// `**`, by a non-negative integer
    Pow,
}

impl BinaryOp {
    /// Operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::TrueDiv => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-P`
    Neg,
    /// `+P`
    Pos,
}

/// Rich comparison operators. Only the first two are defined on polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

/// Applies `op` to two operands of any kind.
///
/// # Returns
/// - the polynomial result wrapped as [`Operand::Poly`]
/// - `Err(Error::Type)` for `scalar / P`, `P / Q`, a non-integer or polynomial exponent, or a
///   scalar base
/// - `Err(Error::DivisionByZero)`, `Err(Error::Range)` as the underlying operation reports
pub fn binary_op(op: BinaryOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Operand> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let result = match (op, lhs, rhs) {
        (BinaryOp::Add, lhs, rhs) => lhs.into_polynomial() + rhs.into_polynomial(),
        (BinaryOp::Sub, lhs, rhs) => lhs.into_polynomial() - rhs.into_polynomial(),
        (BinaryOp::Mul, lhs, rhs) => lhs.into_polynomial() * rhs.into_polynomial(),
        (BinaryOp::TrueDiv, Operand::Poly(p), Operand::Scalar(s)) => p.checked_div(s)?,
        (BinaryOp::FloorDiv, lhs, rhs) => lhs.into_polynomial().floor_div(rhs)?,
        (BinaryOp::Mod, lhs, rhs) => lhs.into_polynomial().rem_euclid(rhs)?,
        (BinaryOp::Pow, Operand::Poly(p), Operand::Scalar(Scalar::Int(n))) => p.pow(n)?,
        (op, lhs, rhs) => {
            return Err(Error::unsupported_operands(
                op.symbol(),
                lhs.type_name(),
                rhs.type_name(),
            ))
        }
    };
    Ok(Operand::Poly(result))
}

/// `divmod(lhs, rhs)`: quotient and remainder of the Euclidean division in one pass.
pub fn divmod(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<(Polynomial, Polynomial)> {
    lhs.into().into_polynomial().divmod(rhs)
}

/// `-P` or `+P`; `+P` is a copy of `P`.
pub fn unary_op(op: UnaryOp, operand: &Polynomial) -> Polynomial {
    match op {
        UnaryOp::Neg => -operand,
        UnaryOp::Pos => operand.clone(),
    }
}

/// Equality and inequality between polynomials and scalars; the ordering operators are
/// undefined on polynomials.
///
/// # Returns
/// - `Err(Error::Type)` for `<`, `<=`, `>`, `>=`
pub fn compare(op: CompareOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<bool> {
    let equal = || lhs.into().into_polynomial() == rhs.into().into_polynomial();
    match op {
        CompareOp::Eq => Ok(equal()),
        CompareOp::Ne => Ok(!equal()),
        CompareOp::Lt | CompareOp::Le | CompareOp::Gt | CompareOp::Ge => Err(Error::Type(
            "Unsupported operation on polynomials".to_string(),
        )),
    }
}

/// Call-style evaluation `P(x)`.
///
/// # Returns
/// - `Err(Error::Type)` when `x` is a polynomial
pub fn call(polynomial: &Polynomial, x: impl Into<Operand>) -> Result<Scalar> {
    match x.into() {
        Operand::Scalar(s) => Ok(polynomial.eval(s)),
        other => Err(Error::Type(format!(
            "must be a real or complex number, not '{}'",
            other.type_name()
        ))),
    }
}

fn checked_index(index: i64) -> Result<usize> {
    usize::try_from(index)
        .map_err(|_| Error::Type(format!("Polynomial indices must be non-negative, got {}", index)))
}

/// `P[index]`: the coefficient of `X**index`, 0 above the degree.
pub fn get_item(polynomial: &Polynomial, index: i64) -> Result<Scalar> {
    Ok(polynomial.coefficient(checked_index(index)?))
}

/// `P[index] = value`. Rejected before any change when the index is negative, the value is
/// not a scalar, or the storage cannot grow to `index + 1`.
pub fn set_item(polynomial: &mut Polynomial, index: i64, value: impl Into<Operand>) -> Result<()> {
    let index = checked_index(index)?;
    match value.into() {
        Operand::Scalar(s) => polynomial.set_coefficient(index, s),
        Operand::Poly(_) => Err(Error::Type(
            "Incorrect argument for item assignment.".to_string(),
        )),
    }
}

fn no_attribute(name: &str) -> Error {
    Error::Type(format!("'Polynomial' object has no attribute '{}'", name))
}

impl Polynomial {
    /// Attribute lookup for host bindings; `degree` is the only attribute.
    pub fn get_attribute(&self, name: &str) -> Result<Operand> {
        match name {
            "degree" => Ok(Operand::from(self.degree() as i64)),
            _ => Err(no_attribute(name)),
        }
    }

    /// Attribute assignment for host bindings. There are no writable attributes.
    ///
    /// # Returns
    /// - `Err(Error::ReadOnly)` for `degree`
    /// - `Err(Error::Type)` for any other name
    pub fn set_attribute(&mut self, name: &str, _value: impl Into<Operand>) -> Result<()> {
        match name {
            "degree" => Err(Error::ReadOnly {
                attribute: name.to_string(),
            }),
            _ => Err(no_attribute(name)),
        }
    }
}
