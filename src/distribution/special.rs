//! Standard normal helpers, on top of `statrs`.

use std::f64::consts::SQRT_2;

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc;

/// `ln(n choose k)`.
pub(crate) use statrs::function::factorial::ln_binomial as ln_choose;

/// Standard normal density.
#[inline]
pub(crate) fn normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / SQRT_2PI
}

/// Standard normal CDF. `erfc` keeps the far lower tail accurate.
pub(crate) fn normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return 0.5;
    }
    (0.5 * erfc(-z / SQRT_2)).clamp(0.0, 1.0)
}
