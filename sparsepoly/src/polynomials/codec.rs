//! The one-line textual form, e.g. `6-2x+5x^3`.
//!
//! Terms are written in increasing exponent order. Each coefficient uses the
//! default `f64` formatting (`5`, `-2`, `0.25`), followed by `x` when the
//! exponent is positive and `^n` when it exceeds one. A `+` separates a
//! positive term from the one before it, negative terms carry their own `-`.
//! The zero polynomial is written `0`.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::error::{PolynomialError, Result, TermError};

use super::polynomial::{Polynomial, Term};

const VARIABLE: char = 'x';
const POWER: char = '^';

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty = true;
        for term in self.nonzero_terms() {
            if !empty && term.coefficient() > 0.0 {
                f.write_str("+")?;
            }
            write!(f, "{}", term.coefficient())?;
            match term.exponent() {
                0 => {}
                1 => write!(f, "{}", VARIABLE)?,
                exponent => write!(f, "{}{}{}", VARIABLE, POWER, exponent)?,
            }
            empty = false;
        }
        if empty {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl Polynomial {
    /// Parses one line of the textual form.
    ///
    /// Whitespace is ignored. A term without a coefficient (`x^2`, `-x`) has
    /// magnitude one and a term without `^` after the `x` has exponent one.
    /// Repeated exponents are summed, so `x+x` parses to `2x`.
    ///
    /// # Errors
    ///
    /// [`PolynomialError::Parse`] naming the first term whose coefficient or
    /// exponent cannot be decoded. No partial polynomial is produced.
    pub fn from_text(content: &str) -> Result<Self> {
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
        let terms = split_terms(&compact)
            .into_iter()
            .map(|term| {
                decode_term(term).map_err(|source| PolynomialError::Parse {
                    term: term.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let polynomial = Polynomial::from_raw_terms(terms);
        debug!("parsed {:?} as {}", content, polynomial);
        Ok(polynomial)
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self> {
        Polynomial::from_text(s)
    }
}

/// Cuts before every `+` or `-` that opens a term. A sign right after an `e`
/// belongs to a scientific-notation literal and does not cut.
fn split_terms(compact: &str) -> Vec<&str> {
    let bytes = compact.as_bytes();
    let mut bounds: Vec<usize> = std::iter::once(0)
        .chain((1..bytes.len()).filter(|&i| {
            matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E')
        }))
        .collect();
    bounds.push(compact.len());
    bounds.windows(2).map(|w| &compact[w[0]..w[1]]).collect()
}

fn decode_term(term: &str) -> std::result::Result<Term, TermError> {
    if term.is_empty() {
        return Err(TermError::Empty);
    }
    let (prefix, suffix) = match term.split_once(VARIABLE) {
        Some(parts) => parts,
        None => return Ok(Term::new(0, term.parse::<f64>()?)),
    };
    let coefficient = match prefix {
        "" | "+" => 1.0,
        "-" => -1.0,
        literal => literal.parse::<f64>()?,
    };
    let suffix = suffix.strip_prefix(POWER).unwrap_or(suffix);
    let exponent = if suffix.is_empty() { 1 } else { suffix.parse::<u32>()? };
    Ok(Term::new(exponent, coefficient))
}
