use crate::SqError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// Absolute and relative tolerance pair used for float comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SqError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SqError::NonFinite { what, value: v })
    }
}

/// Require a finite, strictly positive value.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, SqError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SqError::InvalidArg { what, value: v })
    }
}

/// Sum a sequence of reals.
///
/// Plain left-to-right summation; compartment counts are small.
pub fn sum<I: IntoIterator<Item = Real>>(values: I) -> Real {
    values.into_iter().fold(0.0, |acc, v| acc + v)
}
