pub(crate) mod codec;
pub(crate) mod polynomial;
pub(crate) mod polynomial_arithmetic;
pub use polynomial::{Polynomial, Term};
