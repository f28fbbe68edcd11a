//! Named polynomial families built only from the public `polyarith` operators.

use polyarith::{Error, Polynomial, Result, X};

/// `1 + X + ... + X**n`.
pub fn ones(n: usize) -> Result<Polynomial> {
    (0..=n).try_fold(Polynomial::zero(), |acc, i| Ok(acc + X.pow(i as i64)?))
}

/// Chebyshev polynomial of the first kind, `T(n+1) = 2 * X * T(n) - T(n-1)`.
pub fn chebyshev(n: usize) -> Polynomial {
    let (mut previous, mut current) = (Polynomial::one(), X.clone());
    if n == 0 {
        return previous;
    }
    for _ in 1..n {
        let next = 2 * X.clone() * &current - &previous;
        previous = std::mem::replace(&mut current, next);
    }
    current
}

/// Legendre polynomial, `(n + 1) P(n+1) = (2n + 1) X P(n) - n P(n-1)`.
pub fn legendre(n: usize) -> Result<Polynomial> {
    let (mut previous, mut current) = (Polynomial::one(), X.clone());
    if n == 0 {
        return Ok(previous);
    }
    for k in 1..n as i64 {
        let next = ((2 * k + 1) * X.clone() * &current - k * &previous).checked_div(k + 1)?;
        previous = std::mem::replace(&mut current, next);
    }
    Ok(current)
}

/// Physicists' Hermite polynomial, `H(n+1) = 2 X H(n) - 2n H(n-1)`.
pub fn hermite(n: usize) -> Polynomial {
    let (mut previous, mut current) = (Polynomial::one(), 2 * X.clone());
    if n == 0 {
        return previous;
    }
    for k in 1..n as i64 {
        let next = 2 * X.clone() * &current - 2 * k * &previous;
        previous = std::mem::replace(&mut current, next);
    }
    current
}

/// The `n`-th cyclotomic polynomial, `X**n - 1` divided by every `cyclotomic(d)` with `d`
/// a proper divisor of `n`.
pub fn cyclotomic(n: usize) -> Result<Polynomial> {
    if n == 0 {
        return Err(Error::Type(
            "cyclotomic polynomials are indexed from 1".to_string(),
        ));
    }
    let mut result = X.pow(n as i64)? - 1;
    for d in (1..n).filter(|d| n % d == 0) {
        result = result.floor_div(cyclotomic(d)?)?;
    }
    Ok(result)
}
