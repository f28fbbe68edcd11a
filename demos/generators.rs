use demos::{chebyshev, cyclotomic, hermite, legendre, ones};
use polyarith::gcd;

fn main() -> anyhow::Result<()> {
    for n in 0..=6 {
        println!("Ones({n}) = {}", ones(n)?);
        println!("Chebyshev({n}) = {}", chebyshev(n));
        println!("Legendre({n}) = {}", legendre(n)?);
        println!("Hermite({n}) = {}", hermite(n));
    }
    for n in 1..=12 {
        println!("Cyclotomic({n}) = {}", cyclotomic(n)?);
    }
    println!("gcd(Ones(5), Ones(7)) = {}", gcd(ones(5)?, ones(7)?));
    Ok(())
}
