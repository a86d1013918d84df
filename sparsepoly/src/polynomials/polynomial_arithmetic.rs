use std::{cmp::Ordering, collections::BTreeMap};

use tracing::{debug, trace};

use super::polynomial::{Polynomial, Term};

/// Strictly increasing exponents, no zero coefficients.
pub(crate) fn is_canonical(terms: &[Term]) -> bool {
    terms.iter().all(|t| !t.is_zero())
        && terms
            .windows(2)
            .all(|pair| pair[0].exponent() < pair[1].exponent())
}

/// Sorts by exponent, sums coefficients of equal exponents and drops zeros.
pub(crate) fn canonicalize(mut terms: Vec<Term>) -> Vec<Term> {
    terms.sort_by_key(Term::exponent);
    let mut res: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        match res.last_mut() {
            Some(last) if last.exponent() == term.exponent() => {
                *last = Term::new(last.exponent(), last.coefficient() + term.coefficient());
            }
            _ => res.push(term),
        }
    }
    res.retain(|t| !t.is_zero());
    res
}

impl Polynomial {
    /// Sum of two polynomials.
    ///
    /// Both term lists are canonical, so this is a linear sorted merge: the
    /// smaller exponent is emitted first and equal exponents are combined,
    /// keeping the sum only when it is non-zero.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut res = Vec::with_capacity(self.len() + other.len());
        let mut lhs_terms = self.nonzero_terms().copied().peekable();
        let mut rhs_terms = other.nonzero_terms().copied().peekable();
        loop {
            match (lhs_terms.peek(), rhs_terms.peek()) {
                (None, None) => break,
                (Some(_), None) => res.extend(lhs_terms.by_ref()),
                (None, Some(_)) => res.extend(rhs_terms.by_ref()),
                (Some(&lhs), Some(&rhs)) => match lhs.exponent().cmp(&rhs.exponent()) {
                    Ordering::Less => {
                        res.push(lhs);
                        lhs_terms.next();
                    }
                    Ordering::Greater => {
                        res.push(rhs);
                        rhs_terms.next();
                    }
                    Ordering::Equal => {
                        let sum = lhs.coefficient() + rhs.coefficient();
                        trace!(
                            "merging x^{}: {} + {} = {}",
                            lhs.exponent(),
                            lhs.coefficient(),
                            rhs.coefficient(),
                            sum
                        );
                        if sum != 0.0 {
                            res.push(Term::new(lhs.exponent(), sum));
                        }
                        lhs_terms.next();
                        rhs_terms.next();
                    }
                },
            }
        }
        let sum = Polynomial::from_canonical_terms(res);
        debug!("({}) + ({}) = {}", self, other, sum);
        sum
    }

    /// Product of two polynomials.
    ///
    /// Every pair of terms contributes `(e1 + e2, c1 * c2)`; contributions are
    /// accumulated per exponent and the result is canonicalized, so products
    /// that cancel to zero are dropped.
    ///
    /// # Panics
    ///
    /// If an exponent sum overflows `u32`.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut accumulated: BTreeMap<u32, f64> = BTreeMap::new();
        for lhs in self.nonzero_terms() {
            for rhs in other.nonzero_terms() {
                let exponent = lhs
                    .exponent()
                    .checked_add(rhs.exponent())
                    .unwrap_or_else(|| {
                        panic!(
                            "exponent overflow: x^{} * x^{}",
                            lhs.exponent(),
                            rhs.exponent()
                        )
                    });
                *accumulated.entry(exponent).or_insert(0.0) +=
                    lhs.coefficient() * rhs.coefficient();
            }
        }
        let terms = accumulated
            .into_iter()
            .map(|(exponent, coefficient)| Term::new(exponent, coefficient))
            .filter(|t| !t.is_zero())
            .collect();
        let product = Polynomial::from_canonical_terms(terms);
        debug!("({}) * ({}) = {}", self, other, product);
        product
    }
}
