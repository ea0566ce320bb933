use crate::HlError;

/// Floating point type used throughout the estimator
pub type Real = f64;

/// Assumed indoor reference temperature, °C. The heat-loss formula and
/// the data-quality checks agree on this one value.
pub const INDOOR_REFERENCE_TEMP_C: Real = 20.0;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HlError::NonFinite { what, value: v })
    }
}
