use std::ops::Index;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PolynomialError, Result};

use super::polynomial_arithmetic;

/// One `coefficient * x^exponent` summand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Term {
    exponent: u32,
    coefficient: f64,
}

impl Term {
    /// Builds the term `coefficient * x^exponent`.
    #[inline]
    pub fn new(exponent: u32, coefficient: f64) -> Self {
        Self {
            exponent,
            coefficient,
        }
    }
    /// Power of `x`.
    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }
    /// Multiplier of `x^exponent`.
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }
}

/// A single-variable polynomial with real coefficients.
///
/// Terms are kept in canonical form: strictly increasing exponents, no zero
/// coefficients. The zero polynomial is the single term `0 * x^0`, so there is
/// always at least one term. Because the form is canonical, derived equality
/// is mathematical equality.
///
/// Instances are never mutated; [`add`](Self::add) and
/// [`multiply`](Self::multiply) return fresh polynomials.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::new(0, 0.0)],
        }
    }

    /// Builds a polynomial from parallel coefficient and exponent slices.
    ///
    /// The input is copied and canonicalized: terms are sorted by exponent,
    /// duplicate exponents are merged by summing their coefficients and zero
    /// coefficients are dropped.
    ///
    /// # Errors
    ///
    /// [`PolynomialError::InvalidArgument`] if the slices differ in length.
    pub fn from_terms(coefficients: &[f64], exponents: &[u32]) -> Result<Self> {
        if coefficients.len() != exponents.len() {
            return Err(PolynomialError::InvalidArgument {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }
        let terms = exponents
            .iter()
            .zip(coefficients)
            .map(|(&exponent, &coefficient)| Term::new(exponent, coefficient))
            .collect();
        Ok(Self::from_raw_terms(terms))
    }

    /// Canonicalizes an arbitrary term list.
    pub(crate) fn from_raw_terms(terms: Vec<Term>) -> Self {
        Self::from_canonical_terms(polynomial_arithmetic::canonicalize(terms))
    }

    /// Wraps terms that are already canonical; an empty list becomes zero.
    pub(crate) fn from_canonical_terms(terms: Vec<Term>) -> Self {
        debug_assert!(polynomial_arithmetic::is_canonical(&terms));
        if terms.is_empty() {
            Self::zero()
        } else {
            Self { terms }
        }
    }

    /// The canonical terms, in increasing exponent order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of stored terms. The zero polynomial stores one.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    /// Highest exponent with a non-zero coefficient, 0 for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.terms.last().map_or(0, Term::exponent)
    }

    /// Terms that contribute to the value; empty for the zero polynomial.
    pub(crate) fn nonzero_terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms.iter().filter(|t| !t.is_zero())
    }

    /// Computes the sum of `coefficient * x^exponent`, in increasing exponent order.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().fold(0.0, |acc, term| {
            acc + term.coefficient * x.powf(f64::from(term.exponent))
        })
    }

    /// True iff the polynomial evaluates to exactly `0.0` at `x`.
    ///
    /// This is an exact comparison, an approximation of an irrational root
    /// will report `false`.
    pub fn has_root(&self, x: f64) -> bool {
        self.evaluate(x) == 0.0
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Polynomial {
    type Output = Term;

    fn index(&self, index: usize) -> &Self::Output {
        &self.terms[index]
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<'a> std::ops::Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a> std::ops::Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Self::Output {
        self.multiply(rhs)
    }
}

// serialized as the text form, e.g. "6-2x+5x^3"
impl Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(D::Error::custom)
    }
}
