//! Alias table over success counts, for O(1) draws of "how many drops would
//! another player have had".
//!
//! Indexed by success count. The far upper tail of a pmf, once its combined mass
//! is below [`TAIL_MASS`], is left out of the table: a few thousand trials at a
//! rare rate only need slots for the handful of counts that can come up.

use rand::Rng;

use crate::distribution::{Binomial, PoissonBinomial};
use crate::error::ProbError;

/// Upper-tail mass (relative to the total) that may be dropped from a table.
pub const TAIL_MASS: f64 = 1e-12;

#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Chance of keeping this slot's own count, in `[0, 1]`.
    keep: f64,
    /// Count returned otherwise.
    alias: u32,
}

#[derive(Debug, Clone)]
pub struct AliasTable {
    slots: Vec<Slot>,
}

impl AliasTable {
    /// Table over `pmf[k] = P(k successes)`. The pmf need not be normalized.
    pub fn from_pmf(pmf: &[f64]) -> Result<Self, ProbError> {
        if pmf.is_empty() {
            return Err(ProbError::Empty);
        }
        if let Some((index, &value)) = pmf.iter().enumerate().find(|(_, p)| p.is_nan() || **p < 0.0) {
            return Err(ProbError::Negative { index, value });
        }
        let total: f64 = pmf.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(ProbError::ZeroSum);
        }

        let pmf = &pmf[..support_len(pmf, total)];
        let n = pmf.len();
        let scale = n as f64 / pmf.iter().sum::<f64>();
        let mut mass: Vec<f64> = pmf.iter().map(|p| p * scale).collect();
        let mut slots = vec![Slot { keep: 1.0, alias: 0 }; n];

        let (mut under, mut over): (Vec<usize>, Vec<usize>) = (0..n).partition(|&k| mass[k] < 1.0);
        // top up each light slot from a heavy one
        while let (Some(&light), Some(&heavy)) = (under.last(), over.last()) {
            under.pop();
            slots[light] = Slot { keep: mass[light], alias: heavy as u32 };
            mass[heavy] -= 1.0 - mass[light];
            if mass[heavy] < 1.0 {
                over.pop();
                under.push(heavy);
            }
        }
        // anything left over is full, up to rounding
        for k in under.into_iter().chain(over) {
            slots[k] = Slot { keep: 1.0, alias: k as u32 };
        }

        Ok(Self { slots })
    }

    pub fn from_binomial(successes: &Binomial) -> Result<Self, ProbError> {
        Self::from_pmf(&successes.pmf_vec())
    }

    pub fn from_poisson_binomial(successes: &PoissonBinomial) -> Result<Self, ProbError> {
        Self::from_pmf(successes.pmf_slice())
    }

    /// Draw a success count. One uniform per draw: its integer part picks the
    /// slot, its fraction decides between the slot and its alias.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let n = self.slots.len();
        let u = rng.random::<f64>() * n as f64;
        let k = (u as usize).min(n - 1);
        let slot = self.slots[k];
        if u - (k as f64) < slot.keep { k as u64 } else { slot.alias as u64 }
    }

    /// How often each success count came up in `draws` draws.
    pub fn histogram<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<u64> {
        let mut counts = vec![0u64; self.slots.len()];
        for _ in 0..draws {
            counts[self.sample(rng) as usize] += 1;
        }
        counts
    }

    /// Largest success count the table can return.
    pub fn max_successes(&self) -> u64 {
        self.slots.len() as u64 - 1
    }
}

/// Length of the pmf once a negligible upper tail is cut. Never below 1.
fn support_len(pmf: &[f64], total: f64) -> usize {
    let mut len = pmf.len();
    let mut tail = 0.0;
    while len > 1 {
        tail += pmf[len - 1];
        if tail > TAIL_MASS * total {
            break;
        }
        len -= 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(AliasTable::from_pmf(&[]), Err(ProbError::Empty)));
        assert!(matches!(AliasTable::from_pmf(&[0.0, 0.0]), Err(ProbError::ZeroSum)));
        assert!(matches!(
            AliasTable::from_pmf(&[-0.1, 0.2]),
            Err(ProbError::Negative { index: 0, .. })
        ));
        assert!(matches!(
            AliasTable::from_pmf(&[0.5, f64::NAN]),
            Err(ProbError::Negative { index: 1, .. })
        ));
    }

    #[test]
    fn coin_flips_match_binomial() {
        let four_flips = Binomial::new(4, 0.5);
        let table = AliasTable::from_binomial(&four_flips).unwrap();
        assert_eq!(table.max_successes(), 4);

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000usize;
        let counts = table.histogram(&mut rng, draws);
        for (k, &c) in counts.iter().enumerate() {
            let emp = c as f64 / draws as f64;
            let p = four_flips.pmf(k as u64);
            assert!((emp - p).abs() < 0.02, "k={k} emp={emp} p={p}");
        }
    }

    #[test]
    fn impossible_counts_never_come_up() {
        // exactly one success out of two trials
        let table = AliasTable::from_poisson_binomial(&PoissonBinomial::new(&[1.0, 0.0])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(table.sample(&mut rng), 1);
        }
    }

    #[test]
    fn negligible_tail_is_cut() {
        // mean of one drop over a thousand trials
        let table = AliasTable::from_binomial(&Binomial::new(1000, 0.001)).unwrap();
        assert!(table.max_successes() > 5);
        assert!(table.max_successes() < 30, "{}", table.max_successes());

        // a certain outcome at the top is kept
        let certain = AliasTable::from_binomial(&Binomial::new(10, 1.0)).unwrap();
        assert_eq!(certain.max_successes(), 10);
    }
}
