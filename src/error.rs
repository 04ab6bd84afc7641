/// Errors building an outcome sampler.
#[derive(Debug, thiserror::Error)]
pub enum ProbError {
    #[error("pmf is empty")]
    Empty,
    #[error("pmf has a negative value at {index} successes: {value}")]
    Negative { index: usize, value: f64 },
    #[error("pmf sums to zero")]
    ZeroSum,
    #[error("{trials} trials is past the exact distribution limit of {limit}")]
    TooManyTrials { trials: usize, limit: usize },
}

/// Errors raised while building drop models or the catalog.
///
/// These indicate a badly written catalog and are not expected at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("at least one roll is required")]
    EmptyRolls,
    #[error("roll {index} has a drop chance outside [0, 1]: {value}")]
    InvalidProbability { index: usize, value: f64 },
    #[error("roll {index} has a negative or non-finite rolls per kc: {value}")]
    InvalidRollsPerUnit { index: usize, value: f64 },
    #[error("stack size must be at least 2, got {0}")]
    InvalidStackSize(u32),
    #[error("invalid reward range {min}..={max}")]
    InvalidRewardRange { min: u32, max: u32 },
    #[error("item \"{0}\" appears more than once in the catalog")]
    DuplicateItem(String),
}

/// Recoverable errors from a luck lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LuckError {
    #[error("item {0} is not recognized")]
    UnknownItem(String),
    /// The reason is meant to be shown to the user as-is.
    #[error("{0}")]
    Incalculable(String),
    /// More items than trials: some trial source is not accounted for.
    #[error("unknown error calculating luck for {item}")]
    Indeterminate { item: String },
}
