use densemat::{MatError, Matrix};

fn main() -> Result<(), MatError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let a = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]])?;
    println!("A =\n{a}");
    println!("det(A) = {}", a.determinant()?);
    println!("cofactors =\n{}", a.calc_complements()?);

    let inv = a.inverse()?;
    println!("A^-1 =\n{inv}");
    println!("A^-1 * A =\n{}", (&inv * &a)?);

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    match singular.inverse() {
        Ok(m) => println!("unexpected inverse:\n{m}"),
        Err(e) => println!("inverse failed: {e}"),
    }

    let mut grown = a.clone();
    grown.set_cols(4)?;
    grown.set_rows(2)?;
    println!("A resized to 2x4 =\n{grown}");
    Ok(())
}
