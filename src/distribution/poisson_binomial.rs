use super::{CumulativeDistribution, clamp_probability};

/// Exact distribution of the number of successes among independent trials
/// with (possibly) different chances.
///
/// Built by dynamic programming: after trial `i`,
/// `P(k | i) = P(k | i-1) * (1 - p_i) + P(k-1 | i-1) * p_i`.
/// O(n²) time, O(n) space.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonBinomial {
    pmf: Vec<f64>,
}

impl PoissonBinomial {
    /// One probability per trial. Out-of-range chances are clamped to `[0, 1]`.
    pub fn new(probabilities: &[f64]) -> Self {
        let n = probabilities.len();
        let mut pmf = vec![0.0f64; n + 1];
        pmf[0] = 1.0;

        for (i, &p) in probabilities.iter().enumerate() {
            let p = clamp_probability(p);
            let q = 1.0 - p;
            // walk downwards so pmf[k - 1] still holds the previous row
            for k in (1..=i + 1).rev() {
                pmf[k] = pmf[k] * q + pmf[k - 1] * p;
            }
            pmf[0] *= q;
        }

        Self { pmf }
    }

    pub fn trials(&self) -> usize {
        self.pmf.len() - 1
    }

    pub fn pmf(&self, k: usize) -> f64 {
        self.pmf.get(k).copied().unwrap_or(0.0)
    }

    pub fn pmf_slice(&self) -> &[f64] {
        &self.pmf
    }
}

impl CumulativeDistribution for PoissonBinomial {
    fn cumulative_probability(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        let k = k as usize;
        if k >= self.trials() {
            return 1.0;
        }
        self.pmf[..=k].iter().sum::<f64>().min(1.0)
    }
}
