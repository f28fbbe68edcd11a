//! Fixture polynomials shared by the criterion benchmarks.

use polyarith::Polynomial;

/// Mostly-zero pair, degrees 12 and 14.
pub fn sparse_pair() -> (Polynomial, Polynomial) {
    (
        Polynomial::new(vec![0, 0, -3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 5]),
        Polynomial::new(vec![0, 0, -3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 5, 0, 9]),
    )
}

/// Fully populated pair, degrees 12 and 14.
pub fn dense_pair() -> (Polynomial, Polynomial) {
    (
        Polynomial::new(vec![1, -8, -3, 2, 5, 1, -1, 9, 8, 2, 3, 4, 5]),
        Polynomial::new(vec![1, -8, -3, 2, 5, 1, -1, 9, 8, 2, 3, 4, 5, -7, 8]),
    )
}

/// A pair of degree `degree` with cycling integer coefficients.
pub fn sized_pair(degree: usize) -> (Polynomial, Polynomial) {
    let make = |offset: i64| {
        Polynomial::new(
            (0..=degree as i64)
                .map(|i| (i + offset) % 100 - 50)
                .collect::<Vec<_>>(),
        )
    };
    (make(0), make(17))
}
