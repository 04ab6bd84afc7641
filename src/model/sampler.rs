use rand::Rng;

use crate::alias::AliasTable;

/// Draws alternate outcomes for the same trials: how many items another player
/// with the same kill counts would have.
///
/// The success count comes from an alias table over the exact pmf, so each draw
/// is O(1) for fixed-size drops and O(successes) when rewards are random.
#[derive(Debug, Clone)]
pub struct OutcomeSampler {
    successes: AliasTable,
    stack: u32,
    rewards: Option<(u32, u32)>,
}

impl OutcomeSampler {
    pub(crate) fn new(successes: AliasTable, stack: u32, rewards: Option<(u32, u32)>) -> Self {
        Self {
            successes,
            stack: stack.max(1),
            rewards,
        }
    }

    /// Items received in one simulated run.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let successes = self.successes.sample(rng);
        match self.rewards {
            Some((min, max)) => (0..successes).map(|_| rng.random_range(min..=max) as u64).sum(),
            None => successes * self.stack as u64,
        }
    }

    /// Empirical `(luck, dryness)` for `observed` successes over `draws` runs.
    ///
    /// `observed` is in the model's unit, as returned by
    /// [`DropModel::num_successes`](crate::DropModel::num_successes).
    pub fn estimate<R: Rng + ?Sized>(&self, rng: &mut R, observed: u64, draws: usize) -> (f64, f64) {
        if draws == 0 {
            return (0.0, 0.0);
        }
        let (mut fewer, mut more) = (0usize, 0usize);
        for _ in 0..draws {
            let units = self.sample(rng) / self.stack as u64;
            if units < observed {
                fewer += 1;
            } else if units > observed {
                more += 1;
            }
        }
        (fewer as f64 / draws as f64, more as f64 / draws as f64)
    }
}
