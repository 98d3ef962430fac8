// ============================================================================
// Basic Usage Example
// ============================================================================

use hyperalgebra::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Hyperalgebra Example ===\n");

    let mc = PrecisionConfig::new(12, RoundingMode::HalfEven)?;
    println!("Precision: {} digits, {:?}\n", mc.precision(), mc.rounding());

    // Hypercomplex numbers of different dimension
    let z = DecimalHypercomplex::new(Decimal::from(3), [Decimal::from(4)]);
    let q = DecimalHypercomplex::new(
        Decimal::ONE,
        [Decimal::from(2), Decimal::from(-1), Decimal::new(5, 1)],
    );

    println!("z = {}   ({:?})", z, z.family());
    println!("q = {}   ({:?})", q, q.family());
    println!("z + q = {}", z.add(&q, &mc)?);
    println!("conj(q) = {}", q.conjugate(&mc)?);
    println!("|z| = {}", z.magnitude(&mc)?);
    println!("sqrt(z) = {}", z.sqrt(&mc)?);
    println!("LaTeX: {}", q.to_latex());

    match q.sqrt(&mc) {
        Ok(root) => println!("sqrt(q) = {}", root),
        Err(e) => println!("sqrt(q) failed: {}", e),
    }

    // Vectors
    println!("\n=== Vectors ===");
    let a = DecimalVector::new(vec![Decimal::from(1), Decimal::from(2), Decimal::from(3)]);
    let b = DecimalVector::new(vec![Decimal::from(4), Decimal::from(5), Decimal::from(6)]);
    println!("a + b = {}", a.add(&b, &mc)?);
    println!("a . b = {}", a.dot_product(&b, &mc)?);
    println!("a as hypercomplex = {}", a.to_hypercomplex()?);

    // Matrices
    println!("\n=== Matrices ===");
    let m = DecimalMatrix::from_columns(&[a.clone(), b.clone(), a.subtract(&b, &mc)?])?;
    println!("M = {}", m);
    println!("M^3 = {}", m.pow(3, &mc)?);
    println!("LaTeX: {}", m.to_latex());

    if let Err(e) = m.determinant(&mc) {
        println!("det(M) failed: {}", e);
    }

    // Machine precision
    println!("\n=== Machine precision ===");
    let w = Hypercomplex64::new(-4.0, [0.0]);
    println!("sqrt({}) = {}", w, w.sqrt(&())?);

    Ok(())
}
