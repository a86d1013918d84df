#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! sparsepoly
//!
//! Single-variable polynomials with `f64` coefficients, stored sparsely as
//! `(exponent, coefficient)` terms in canonical form.
//!
//! ```
//! use sparsepoly::Polynomial;
//!
//! let p = Polynomial::from_terms(&[6.0, -2.0, 5.0], &[0, 1, 3]).unwrap();
//! let q: Polynomial = "5+3x^4".parse().unwrap();
//!
//! assert_eq!(p.evaluate(2.0), 42.0);
//! assert_eq!(p.add(&q).to_string(), "11-2x+5x^3+3x^4");
//! assert!(!p.has_root(1.0));
//! ```

/// error taxonomy
pub mod error;
/// saving and loading polynomials
pub mod io;
/// math with polynomials
pub mod polynomials;

pub use error::{PolynomialError, Result, TermError};
pub use polynomials::{Polynomial, Term};

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;
