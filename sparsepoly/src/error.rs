use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors raised while building, decoding or persisting a [`Polynomial`](crate::Polynomial).
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// The coefficient and exponent sequences handed to
    /// [`Polynomial::from_terms`](crate::Polynomial::from_terms) differ in length.
    #[error("got {coefficients} coefficients but {exponents} exponents")]
    InvalidArgument {
        /// Number of coefficients supplied.
        coefficients: usize,
        /// Number of exponents supplied.
        exponents: usize,
    },
    /// A term of the textual form could not be decoded.
    #[error("cannot decode term `{term}`")]
    Parse {
        /// The offending term, whitespace removed.
        term: String,
        /// What was wrong with it.
        #[source]
        source: TermError,
    },
    /// The underlying file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a single term fails to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    /// Nothing between two signs, or an empty line.
    #[error("term is empty")]
    Empty,
    /// The coefficient prefix is not a real number literal.
    #[error("bad coefficient: {0}")]
    Coefficient(#[from] ParseFloatError),
    /// The exponent suffix is not a non-negative integer literal.
    #[error("bad exponent: {0}")]
    Exponent(#[from] ParseIntError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolynomialError>;
