//! Builds two polynomials, combines them and round-trips the sum through a file.
//!
//! Usage: `walkthrough [PATH]`, where `PATH` defaults to `polynomial.txt`.

use anyhow::{Context, Result};
use sparsepoly::Polynomial;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "polynomial.txt".to_string());

    let zero = Polynomial::zero();
    info!("zero polynomial: {}", zero);

    let p1 = Polynomial::from_terms(&[6.0, -2.0, 5.0], &[0, 1, 3])?;
    let p2 = Polynomial::from_terms(&[5.0, 3.0], &[0, 4])?;

    let sum = p1.add(&p2);
    info!("sum: {}", sum);

    let product = p1.multiply(&p2);
    info!("product: {}", product);

    info!("p1 evaluated at x = 2: {}", p1.evaluate(2.0));
    info!("does p1 have a root at x = 1? {}", p1.has_root(1.0));

    sum.save_to_file(&path)
        .with_context(|| format!("saving to {}", path))?;
    let loaded = Polynomial::from_file(&path)
        .with_context(|| format!("loading from {}", path))?;
    info!("loaded polynomial: {}", loaded);

    anyhow::ensure!(loaded == sum, "{} did not survive the round trip", sum);
    Ok(())
}
