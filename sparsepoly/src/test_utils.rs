//! Strategies and fixtures for exercising [`Polynomial`] in tests and benches.

use proptest::{
    collection::{btree_map, vec},
    prelude::*,
};

use crate::{Polynomial, Term};

/// Small integer-valued coefficients, zero included.
///
/// Sums and products of these are exact in `f64`, so algebraic laws can be
/// checked with plain equality.
pub fn small_coefficient() -> impl Strategy<Value = f64> {
    (-50i32..=50).prop_map(f64::from)
}

/// Arbitrary canonical polynomials with up to `max_terms` terms and exponents
/// below `max_exponent`. Duplicate exponents and zero coefficients in the
/// generated input are folded away by construction, so zero shows up too.
pub fn arb_polynomial(max_terms: usize, max_exponent: u32) -> impl Strategy<Value = Polynomial> {
    vec((0..max_exponent, small_coefficient()), 0..=max_terms).prop_map(|pairs| {
        Polynomial::from_raw_terms(pairs.into_iter().map(|(e, c)| Term::new(e, c)).collect())
    })
}

/// Polynomials with arbitrary finite coefficients and unique exponents, for
/// the text codec.
pub fn arb_finite_polynomial(max_terms: usize) -> impl Strategy<Value = Polynomial> {
    btree_map(
        0u32..1000,
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
        0..=max_terms,
    )
    .prop_map(|terms| {
        Polynomial::from_raw_terms(terms.into_iter().map(|(e, c)| Term::new(e, c)).collect())
    })
}

/// `1 - 2x + 3x^2 - ...` with every exponent up to `degree` present.
pub fn alternating_dense(degree: u32) -> Polynomial {
    Polynomial::from_raw_terms(
        (0..=degree)
            .map(|e| {
                let magnitude = f64::from(e) + 1.0;
                Term::new(e, if e % 2 == 0 { magnitude } else { -magnitude })
            })
            .collect(),
    )
}

/// `1 + x^stride + x^(2*stride) + ...` with `terms` terms.
pub fn strided_sparse(terms: u32, stride: u32) -> Polynomial {
    Polynomial::from_raw_terms((0..terms).map(|i| Term::new(i * stride, 1.0)).collect())
}
