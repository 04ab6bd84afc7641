//! Discrete distributions over a number of drops.

mod binomial;
mod poisson_binomial;
mod refined_normal;
mod special;
mod uniform_sum;

pub use binomial::Binomial;
pub use poisson_binomial::PoissonBinomial;
pub use refined_normal::RefinedNormal;
pub use uniform_sum::UniformSumMixture;

use tracing::debug;

/// Anything that can answer `P(X <= k)`.
pub trait CumulativeDistribution {
    /// Probability of `k` or fewer successes. Negative `k` gives 0.
    fn cumulative_probability(&self, k: i64) -> f64;
}

/// When the exact Poisson-binomial gets too expensive.
///
/// These are policy, not numerical limits: the exact DP is O(n²) and long
/// convolution chains lose precision, and the approximation is good enough well
/// before either becomes a problem.
pub mod thresholds {
    /// Above this many successes the refined normal approximation is used.
    pub const NORMAL_APPROX_NUM_SUCCESSES: i64 = 100;

    /// Above this many trials the refined normal approximation is used.
    pub const NORMAL_APPROX_NUM_TRIALS: usize = 200;

    /// Tunable pair of thresholds, defaulting to the constants above.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Thresholds {
        pub num_trials: usize,
        pub num_successes: i64,
    }

    impl Thresholds {
        pub const DEFAULT: Self = Self {
            num_trials: NORMAL_APPROX_NUM_TRIALS,
            num_successes: NORMAL_APPROX_NUM_SUCCESSES,
        };

        /// Whether a query for `P(X <= k)` over `num_trials` trials should be approximated.
        #[inline]
        pub fn use_approximation(&self, num_trials: usize, k: i64) -> bool {
            k > self.num_successes || num_trials > self.num_trials
        }
    }

    impl Default for Thresholds {
        fn default() -> Self {
            Self::DEFAULT
        }
    }
}

/// `P(X <= k)` for a sum of Bernoulli trials, exact or approximate per `thresholds`.
pub fn poisson_binomial_cdf(probabilities: &[f64], k: i64, thresholds: thresholds::Thresholds) -> f64 {
    if thresholds.use_approximation(probabilities.len(), k) {
        debug!(trials = probabilities.len(), k, "using refined normal approximation");
        RefinedNormal::new(probabilities).cumulative_probability(k)
    } else {
        debug!(trials = probabilities.len(), k, "using exact poisson binomial");
        PoissonBinomial::new(probabilities).cumulative_probability(k)
    }
}

#[inline]
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
