//! # clogluck
//!
//! How lucky (or how dry) is a collection log?
//!
//! Given how many times a player has done something (kill counts, raid
//! completions, chests opened) and how many of an item they received, this crate
//! answers two questions:
//!
//! * **luck**: the fraction of players with the same kill count who would have
//!   received *fewer* of the item;
//! * **dryness**: the fraction who would have received *more*.
//!
//! Each item in the [`Catalog`] has a [`DropModel`] built from one or more
//! [`RollDescriptor`]s. The model turns a [`TrialLedger`] and an optional
//! [`LuckConfig`] into a distribution over the number of drops, and reads luck
//! and dryness off its CDF.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use clogluck::{CollectionLog, LogItem, LuckCalculator, LuckConfig, NamedEnum, TrialSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let calculator = LuckCalculator::standard()?;
//!
//! let log = CollectionLog::new("Zezima")
//!     .with_kill_count(TrialSource::CerberusKills.name(), 350)
//!     .with_item(LogItem::new(13249, "Key master teleport", 9));
//!
//! let config = LuckConfig::default();
//! let report = calculator.luck(&log, "Key master teleport", Some(&config))?;
//! println!("{:.1}% of players are luckier", report.result.dryness() * 100.0);
//! # Ok(()) }
//! ```
//!
//! ## Distributions
//! * Single-rate drops use an exact [`Binomial`].
//! * Drops shared between activities with different rates use the exact
//!   [`PoissonBinomial`] up to [`thresholds::NORMAL_APPROX_NUM_TRIALS`] trials /
//!   [`thresholds::NORMAL_APPROX_NUM_SUCCESSES`] successes and the
//!   [`RefinedNormal`] approximation beyond that.
//! * Drops with a random stack size use [`UniformSumMixture`].
//!
//! ## Gotchas
//! * A luck or dryness of `-1.0` ([`UNACCOUNTED_TRIALS`]) means the player has
//!   more drops than trials, i.e. some source of the item is missing from the
//!   model. It is not a probability.
//! * Check [`DropModel::incalculable_reason`] before showing a number. The
//!   [`LuckCalculator`] does this for you.
//! * Results are cached per [`Fingerprint`]. A changed kill count or quantity is
//!   a new key, so the cache only needs clearing when the session (or the
//!   configuration) changes.

// lets the derive macro refer to `clogluck::NamedEnum` from inside this crate
extern crate self as clogluck;

mod alias;
mod cache;
mod calculator;
mod catalog;
mod config;
mod distribution;
mod error;
mod hooks;
mod ledger;
mod model;
mod roll;
mod source;

pub use alias::AliasTable;
pub use cache::{Fingerprint, LuckCache, LuckResult, LuckStatus};
pub use calculator::{LuckCalculator, LuckReport};
pub use catalog::Catalog;
pub use config::{ConfigKey, ConfigValue, LuckConfig};
pub use distribution::{
    Binomial, CumulativeDistribution, PoissonBinomial, RefinedNormal, UniformSumMixture, thresholds,
};
pub use error::{LuckError, ModelError, ProbError};
pub use hooks::{Hook, HookRegistry};
pub use ledger::{CollectionLog, LogItem, TrialLedger};
pub use model::{BOLT_RACKS_DISABLED_REASON, DropModel, OTHER_SUBJECT_REASON, OutcomeSampler, UNACCOUNTED_TRIALS};
pub use roll::RollDescriptor;
pub use source::TrialSource;

/// Derive macro imported from `clogluck_macros`.
/// Each variant needs a `#[name = "..."]` attribute.
pub use clogluck_macros::NamedEnum;

/// Trait implemented by the `NamedEnum` derive macro.
///
/// Maps fieldless enum variants to the display names used by the game, so that
/// ledger keys and configuration keys can be matched without caring about case.
pub trait NamedEnum: Sized + Copy + PartialEq + 'static {
    /// All `(variant, name)` pairs, in declaration order.
    const ENTRIES: &'static [(Self, &'static str)];

    /// The display name of this variant.
    fn name(self) -> &'static str {
        Self::ENTRIES
            .iter()
            .find(|(v, _)| *v == self)
            .map(|(_, n)| *n)
            .unwrap_or_default()
    }

    /// Case-insensitive lookup by display name. Surrounding whitespace is ignored.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ENTRIES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(v, _)| *v)
    }

    /// Iterate over every variant.
    fn all() -> impl Iterator<Item = Self> {
        Self::ENTRIES.iter().map(|(v, _)| *v)
    }
}
