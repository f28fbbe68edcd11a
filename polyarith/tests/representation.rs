use num_complex::Complex64;
use polyarith::{constants::MAX_REPR_LEN, poly, Polynomial, X};

#[test]
fn constants() {
    assert_eq!(poly![0].to_string(), "0");
    assert_eq!(poly![1].to_string(), "1");
    assert_eq!(poly![1.5].to_string(), "1.5");
    assert_eq!(poly![Complex64::new(1.0, 2.0)].to_string(), "1+2j");
}

#[test]
fn polynomials() {
    assert_eq!(X.to_string(), "X");
    assert_eq!(
        poly![Complex64::new(-1.0, 2.5), Complex64::new(1.0, 3.0)].to_string(),
        "-1+2.5j + (1+3j) * X"
    );
    assert_eq!(poly![-1, 0, 3].to_string(), "-1 + 3 * X**2");
    assert_eq!(
        poly![Complex64::new(0.0, -0.2), Complex64::new(-2.0, -3.0)].to_string(),
        "-0.2j - (2+3j) * X"
    );
    assert_eq!(
        poly![1, -3, 0, Complex64::new(0.0, -0.2)].to_string(),
        "1 - 3 * X - 0.2j * X**3"
    );
}

#[test]
fn overflow_is_truncated() {
    let long_repr = Polynomial::new(vec![1; 1000]).repr();
    let full = format!(
        "1 + X + {}",
        (2..1000)
            .map(|i| format!("X**{}", i))
            .collect::<Vec<_>>()
            .join(" + ")
    );
    assert_eq!(long_repr.len(), MAX_REPR_LEN);
    assert_eq!(long_repr, format!("{}... [truncated]", &full[..2032]));
}
