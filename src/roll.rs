use crate::source::TrialSource;

/// One way an item can be rolled for: a trial source, the chance per roll, and
/// how many rolls each unit of the source's count is worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollDescriptor {
    source: TrialSource,
    probability_per_roll: f64,
    rolls_per_unit: f64,
    rewards_per_roll: u32,
}

impl RollDescriptor {
    /// One roll per kill.
    pub const fn new(source: TrialSource, probability_per_roll: f64) -> Self {
        Self {
            source,
            probability_per_roll,
            rolls_per_unit: 1.0,
            rewards_per_roll: 1,
        }
    }

    /// Several rolls per unit of count (e.g. 7 rolls per Barrows chest).
    pub const fn with_rolls(mut self, rolls_per_unit: f64) -> Self {
        self.rolls_per_unit = rolls_per_unit;
        self
    }

    /// Each success gives a fixed stack of this many items.
    pub const fn with_rewards(mut self, rewards_per_roll: u32) -> Self {
        self.rewards_per_roll = rewards_per_roll;
        self
    }

    pub fn source(&self) -> TrialSource {
        self.source
    }

    pub fn probability_per_roll(&self) -> f64 {
        self.probability_per_roll
    }

    pub fn rolls_per_unit(&self) -> f64 {
        self.rolls_per_unit
    }

    pub fn rewards_per_roll(&self) -> u32 {
        self.rewards_per_roll
    }
}
