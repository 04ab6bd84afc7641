use super::special::ln_choose;
use super::{CumulativeDistribution, clamp_probability};

/// Exact binomial distribution: `trials` independent rolls at the same chance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    trials: u64,
    p: f64,
}

impl Binomial {
    /// `p` is clamped to `[0, 1]`.
    pub fn new(trials: u64, p: f64) -> Self {
        Self { trials, p: clamp_probability(p) }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.p
    }

    /// Probability of exactly `k` successes. Computed in log space, so large
    /// `trials` do not underflow the terms that matter.
    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.trials {
            return 0.0;
        }
        // degenerate chances would otherwise hit 0 * ln(0)
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.trials { 1.0 } else { 0.0 };
        }
        let ln = ln_choose(self.trials, k)
            + k as f64 * self.p.ln()
            + (self.trials - k) as f64 * (-self.p).ln_1p();
        ln.exp()
    }

    /// The whole pmf over `0..=trials`.
    pub fn pmf_vec(&self) -> Vec<f64> {
        (0..=self.trials).map(|k| self.pmf(k)).collect()
    }
}

impl CumulativeDistribution for Binomial {
    fn cumulative_probability(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        let k = k as u64;
        if k >= self.trials {
            return 1.0;
        }
        // sum whichever tail is shorter on the heavy side
        if (k as f64) <= self.mean() {
            (0..=k).map(|i| self.pmf(i)).sum::<f64>().min(1.0)
        } else {
            let upper: f64 = (k + 1..=self.trials).map(|i| self.pmf(i)).sum();
            (1.0 - upper).clamp(0.0, 1.0)
        }
    }
}
