use super::{Binomial, CumulativeDistribution};

/// Total reward when each of `Binomial(n, p)` successes pays out a uniform
/// amount in `min..=max`.
///
/// `P(total <= t)` is the binomial-weighted mixture of the exact pmfs of
/// `s`-fold uniform sums, for every `s` that can still land at or under `t`.
/// The `s`-fold pmf is built from the `(s-1)`-fold one, so each is computed once
/// per query and only up to `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSumMixture {
    successes: Binomial,
    min: u32,
    max: u32,
}

impl UniformSumMixture {
    /// Callers validate `1 <= min <= max`; see `DropModel::uniform_sum`.
    pub fn new(successes: Binomial, min: u32, max: u32) -> Self {
        debug_assert!(min >= 1 && min <= max);
        Self { successes, min, max }
    }

    pub fn successes(&self) -> Binomial {
        self.successes
    }

    pub fn reward_range(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn mean(&self) -> f64 {
        self.successes.mean() * (self.min as f64 + self.max as f64) / 2.0
    }

    /// Add one more uniform draw to a pmf of partial sums, truncated to `prev.len()`.
    fn add_draw(&self, prev: &[f64]) -> Vec<f64> {
        let len = prev.len();
        let width = (self.max - self.min + 1) as f64;
        let (min, max) = (self.min as usize, self.max as usize);

        let mut prefix = Vec::with_capacity(len + 1);
        prefix.push(0.0);
        let mut acc = 0.0;
        for &p in prev {
            acc += p;
            prefix.push(acc);
        }

        (0..len)
            .map(|v| {
                if v < min {
                    return 0.0;
                }
                let hi = v - min;
                let lo = v.saturating_sub(max);
                (prefix[hi + 1] - prefix[lo]) / width
            })
            .collect()
    }
}

impl CumulativeDistribution for UniformSumMixture {
    fn cumulative_probability(&self, t: i64) -> f64 {
        if t < 0 {
            return 0.0;
        }
        let n = self.successes.trials();
        if t as u128 >= n as u128 * self.max as u128 {
            return 1.0;
        }
        let t = t as usize;
        // more successes than this cannot total t or less
        let max_successes = n.min((t / self.min as usize) as u64);

        let mut sums = vec![0.0f64; t + 1];
        sums[0] = 1.0;
        let mut total = 0.0;
        for s in 0..=max_successes {
            if s > 0 {
                sums = self.add_draw(&sums);
            }
            total += self.successes.pmf(s) * sums.iter().sum::<f64>();
        }
        total.clamp(0.0, 1.0)
    }
}
