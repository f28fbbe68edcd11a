use num_complex::Complex64;
use polyarith::{
    binary_op, compare, gcd, gcd_all, poly, BinaryOp, CompareOp, Error, Operand, Polynomial,
    Scalar, X,
};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn x_is_the_indeterminate() {
    assert_eq!(*X, Polynomial::new(vec![0, 1]));
    assert_eq!(X.degree(), 1);
}

#[test]
fn degree() -> anyhow::Result<()> {
    assert_eq!(Polynomial::new(vec![0]).degree(), -1);
    assert_eq!(Polynomial::new(vec![1]).degree(), 0);
    assert_eq!((1 + X.clone() - 3 * X.pow(4)?).degree(), 4);

    let mut x = X.clone();
    assert!(matches!(
        x.set_attribute("degree", 3),
        Err(Error::ReadOnly { .. })
    ));
    Ok(())
}

#[test]
fn equality() {
    assert_eq!(*X, *X);
    assert_eq!(Polynomial::zero(), 0);
    assert_eq!(poly![1, 1], poly![1, 1]);
    assert_ne!(poly![1, 2], poly![1, 1]);
    assert_ne!(poly![1, 1, 1], poly![1, 1]);
    for op in [CompareOp::Lt, CompareOp::Gt, CompareOp::Le, CompareOp::Ge] {
        assert!(matches!(compare(op, &*X, &*X), Err(Error::Type(_))));
    }
}

#[test]
fn addition() -> anyhow::Result<()> {
    assert_eq!(poly![1, 2] + 0.5, poly![1.5, 2.0]);
    assert_eq!(poly![1, 2] + c(0.0, 0.5), poly![c(1.0, 0.5), 2]);
    assert_eq!(
        poly![1.0, 2.0, 0.5] + poly![2, 3],
        3 + 5 * X.clone() + 0.5 * X.pow(2)?
    );
    Ok(())
}

#[test]
fn multiplication() -> anyhow::Result<()> {
    let product = (1 + X.clone() + 2 * X.pow(2)?) * (c(-2.0, 1.0) * X.clone() - 2);
    let expected = -2 + c(-4.0, 1.0) * X.clone() + c(-6.0, 1.0) * X.pow(2)? + c(-4.0, 2.0) * X.pow(3)?;
    assert_eq!(product, expected);
    assert_eq!((0 * X.clone()).degree(), -1);
    Ok(())
}

#[test]
fn power() -> anyhow::Result<()> {
    assert_eq!((1 + X.clone()).pow(2)?, 1 + 2 * X.clone() + X.pow(2)?);
    assert_eq!(Polynomial::zero().pow(0)?, 1);
    assert_eq!(X.pow(1025), Err(Error::Range { exponent: 1025 }));
    assert!(matches!(X.pow(-1), Err(Error::Type(_))));
    Ok(())
}

#[test]
fn euclidean_division() -> anyhow::Result<()> {
    let p = 1 + X.clone() + X.pow(2)?;
    assert_eq!(p.divmod(X.clone() + 1)?, (X.clone(), Polynomial::one()));
    assert_eq!(p.rem_euclid(X.clone() + 1)?, 1);
    assert!(matches!(X.rem_euclid(0), Err(Error::DivisionByZero(_))));
    assert!(matches!(
        binary_op(BinaryOp::TrueDiv, 2, &p),
        Err(Error::Type(_))
    ));
    Ok(())
}

#[test]
fn gcd_scenarios() -> anyhow::Result<()> {
    assert_eq!(
        gcd(poly![1, 2, 3], Polynomial::zero()),
        poly![1.0 / 3.0, 2.0 / 3.0, 1.0]
    );
    assert_eq!(gcd(poly![1, 2, 3], poly![5]), poly![1]);
    assert_eq!(gcd(X.pow(6)? - 1, X.pow(9)? - 1), X.pow(3)? - 1);
    assert_eq!(
        gcd(
            (1 + X.clone()).pow(2)? * (2 + X.clone()) * (4 + X.clone()),
            (1 + X.clone()) * (2 + X.clone()) * (3 + X.clone())
        ),
        (1 + X.clone()) * (2 + X.clone())
    );
    assert_eq!(gcd_all([X.pow(4)? - 1, X.pow(2)? - 1, X.clone() + 1])?, X.clone() + 1);
    Ok(())
}

#[test]
fn indexing_and_evaluation() -> anyhow::Result<()> {
    let mut p = poly![1, 2];
    assert_eq!(p.coefficient(10), Scalar::Real(0.0));
    p.set_coefficient(3, c(0.0, 1.0))?;
    assert_eq!(p.degree(), 3);
    assert_eq!(p[3], c(0.0, 1.0));
    p.set_coefficient(3, 0)?;
    assert_eq!(p.degree(), 1);

    assert_eq!(p.eval(2), Scalar::Real(5.0));
    assert_eq!(p.eval(c(0.0, 1.0)), Scalar::Complex(c(1.0, 2.0)));
    assert_eq!(X.get_attribute("degree")?, Operand::Scalar(Scalar::Int(1)));
    Ok(())
}

#[test]
fn calculus() -> anyhow::Result<()> {
    let p = 1 + 2 * X.clone() + 3 * X.pow(2)?;
    assert_eq!(p.derivative(1)?, 2 + 6 * X.clone());
    assert_eq!(p.integral(1)?, X.clone() + X.pow(2)? + X.pow(3)?);
    assert_eq!(p.derivative(1)?.integral(1)?, &p - 1);
    assert!(matches!(p.derivative(-1), Err(Error::Type(_))));
    Ok(())
}
