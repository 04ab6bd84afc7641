use super::special::{normal_cdf, normal_pdf};
use super::{CumulativeDistribution, clamp_probability};

/// Refined normal approximation (RNA) of a Poisson-binomial distribution.
///
/// A plain Gaussian is poor here because drop chances are small and the
/// distribution is far from symmetric, so the CDF is corrected for skewness:
///
/// `G(k) = Φ(x) + γ (1 - x²) φ(x) / 6`, with `x = (k + 0.5 - μ) / σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinedNormal {
    trials: usize,
    mean: f64,
    std_dev: f64,
    skewness: f64,
}

impl RefinedNormal {
    pub fn new(probabilities: &[f64]) -> Self {
        let mut mean = 0.0;
        let mut variance = 0.0;
        let mut third = 0.0;
        for &p in probabilities {
            let p = clamp_probability(p);
            let pq = p * (1.0 - p);
            mean += p;
            variance += pq;
            third += pq * (1.0 - 2.0 * p);
        }
        let std_dev = variance.sqrt();
        let skewness = if std_dev > 0.0 { third / (std_dev * std_dev * std_dev) } else { 0.0 };

        Self { trials: probabilities.len(), mean, std_dev, skewness }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn skewness(&self) -> f64 {
        self.skewness
    }
}

impl CumulativeDistribution for RefinedNormal {
    fn cumulative_probability(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        if k as u64 >= self.trials as u64 {
            return 1.0;
        }
        if self.std_dev == 0.0 {
            // every trial is certain either way; the count is exactly the mean
            return if k as f64 + 0.5 >= self.mean { 1.0 } else { 0.0 };
        }
        let x = (k as f64 + 0.5 - self.mean) / self.std_dev;
        let g = normal_cdf(x) + self.skewness * (1.0 - x * x) * normal_pdf(x) / 6.0;
        g.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cox_probabilities() -> Vec<f64> {
        let regular = 1.0 / 34.5 * 30_000.0 / 867_600.0;
        let challenge = 1.0 / 34.5 * 45_000.0 / 867_600.0;
        let mut probs = vec![regular; 1000];
        probs.extend(std::iter::repeat_n(challenge, 2000));
        probs
    }

    #[test]
    fn close_to_exact_near_the_mean() {
        let rna = RefinedNormal::new(&cox_probabilities());
        assert!((rna.mean() - 4.009).abs() < 0.001);
        // exact: 0.43157 and 0.62707
        assert!((rna.cumulative_probability(3) - 0.4316).abs() < 0.005);
        assert!((rna.cumulative_probability(4) - 0.6271).abs() < 0.005);
    }

    #[test]
    fn stays_a_probability() {
        let rna = RefinedNormal::new(&cox_probabilities());
        for k in 0..40 {
            let c = rna.cumulative_probability(k);
            assert!((0.0..=1.0).contains(&c), "k={k} c={c}");
        }
        assert_eq!(rna.cumulative_probability(-3), 0.0);
        assert_eq!(rna.cumulative_probability(3000), 1.0);
    }

    #[test]
    fn certain_trials() {
        let rna = RefinedNormal::new(&[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(rna.cumulative_probability(1), 0.0);
        assert_eq!(rna.cumulative_probability(2), 1.0);
    }
}
