//! Drop models: how an item is rolled for, and luck / dryness for a ledger.

mod sampler;

pub use sampler::OutcomeSampler;

use tracing::warn;

use crate::NamedEnum;
use crate::alias::AliasTable;
use crate::config::{ConfigKey, LuckConfig};
use crate::distribution::thresholds::Thresholds;
use crate::distribution::{Binomial, CumulativeDistribution, PoissonBinomial, UniformSumMixture, poisson_binomial_cdf};
use crate::error::{ModelError, ProbError};
use crate::hooks::HookRegistry;
use crate::ledger::{LogItem, TrialLedger};
use crate::roll::RollDescriptor;

/// Returned by [`DropModel::calculate_luck`] and [`DropModel::calculate_dryness`]
/// when the player has more drops than trials. Not a probability: some source of
/// the item is missing from the model.
pub const UNACCOUNTED_TRIALS: f64 = -1.0;

/// Reason given for models that read settings when no configuration is available.
pub const OTHER_SUBJECT_REASON: &str =
    "depends on personal settings, so luck is only available for your own character.";

pub const BOLT_RACKS_DISABLED_REASON: &str = "Barrows bolt racks are disabled in the config settings.";

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Binomial(RollDescriptor),
    PoissonBinomial { rolls: Vec<RollDescriptor>, thresholds: Thresholds },
    FixedStack(RollDescriptor),
    UniformSum { roll: RollDescriptor, min: u32, max: u32 },
    Unsupported(String),
}

/// How an item drops.
///
/// Built once per catalog entry and immutable afterwards. Ledgers and
/// configuration are passed to every query; a missing configuration means the
/// ledger belongs to someone else, in which case hooks are skipped and
/// [`DropModel::incalculable_reason`] says so.
#[derive(Debug, Clone, PartialEq)]
pub struct DropModel {
    kind: Kind,
    options: Vec<ConfigKey>,
}

/// Distribution over the model's success unit, materialized for one query.
enum Outcomes {
    Binomial(Binomial),
    PoissonBinomial { probabilities: Vec<f64>, thresholds: Thresholds },
    UniformSum(UniformSumMixture),
}

impl Outcomes {
    fn cdf(&self, k: i64) -> f64 {
        match self {
            Outcomes::Binomial(b) => b.cumulative_probability(k),
            Outcomes::PoissonBinomial { probabilities, thresholds } => {
                poisson_binomial_cdf(probabilities, k, *thresholds)
            }
            Outcomes::UniformSum(u) => u.cumulative_probability(k),
        }
    }
}

fn validate(index: usize, roll: &RollDescriptor) -> Result<(), ModelError> {
    let p = roll.probability_per_roll();
    if !(0.0..=1.0).contains(&p) {
        return Err(ModelError::InvalidProbability { index, value: p });
    }
    let rolls = roll.rolls_per_unit();
    if !rolls.is_finite() || rolls < 0.0 {
        return Err(ModelError::InvalidRollsPerUnit { index, value: rolls });
    }
    Ok(())
}

impl DropModel {
    /// One roll at a single chance.
    pub fn binomial(roll: RollDescriptor) -> Result<Self, ModelError> {
        validate(0, &roll)?;
        Ok(Self::from_kind(Kind::Binomial(roll)))
    }

    /// Several sources with (possibly) different chances, e.g. a raid's normal
    /// and challenge modes.
    pub fn poisson_binomial(rolls: Vec<RollDescriptor>) -> Result<Self, ModelError> {
        if rolls.is_empty() {
            return Err(ModelError::EmptyRolls);
        }
        for (i, roll) in rolls.iter().enumerate() {
            validate(i, roll)?;
        }
        Ok(Self::from_kind(Kind::PoissonBinomial {
            rolls,
            thresholds: Thresholds::DEFAULT,
        }))
    }

    /// Every success gives `roll.rewards_per_roll()` items.
    pub fn fixed_stack(roll: RollDescriptor) -> Result<Self, ModelError> {
        validate(0, &roll)?;
        if roll.rewards_per_roll() < 2 {
            return Err(ModelError::InvalidStackSize(roll.rewards_per_roll()));
        }
        Ok(Self::from_kind(Kind::FixedStack(roll)))
    }

    /// Every success gives a uniform amount in `min..=max`.
    pub fn uniform_sum(roll: RollDescriptor, min: u32, max: u32) -> Result<Self, ModelError> {
        validate(0, &roll)?;
        if min == 0 || min > max {
            return Err(ModelError::InvalidRewardRange { min, max });
        }
        Ok(Self::from_kind(Kind::UniformSum { roll, min, max }))
    }

    /// An item luck does not apply to. Always incalculable with `reason`.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::from_kind(Kind::Unsupported(reason.into()))
    }

    fn from_kind(kind: Kind) -> Self {
        Self { kind, options: Vec::new() }
    }

    /// Opt into a configuration option. Hooks run in the order options were added.
    pub fn with_option(mut self, option: ConfigKey) -> Self {
        if !matches!(self.kind, Kind::Unsupported(_)) && !self.options.contains(&option) {
            self.options.push(option);
        }
        self
    }

    pub fn with_options(self, options: impl IntoIterator<Item = ConfigKey>) -> Self {
        options.into_iter().fold(self, Self::with_option)
    }

    /// Where the Poisson-binomial switches to the normal approximation. Other
    /// models ignore it.
    pub fn with_thresholds(mut self, new: Thresholds) -> Self {
        if let Kind::PoissonBinomial { thresholds, .. } = &mut self.kind {
            *thresholds = new;
        }
        self
    }

    pub fn options(&self) -> &[ConfigKey] {
        &self.options
    }

    pub fn rolls(&self) -> &[RollDescriptor] {
        match &self.kind {
            Kind::Binomial(roll) | Kind::FixedStack(roll) | Kind::UniformSum { roll, .. } => {
                std::slice::from_ref(roll)
            }
            Kind::PoissonBinomial { rolls, .. } => rolls,
            Kind::Unsupported(_) => &[],
        }
    }

    /// Whether answering needs the local player's settings.
    pub fn requires_config(&self) -> bool {
        !self.options.is_empty()
    }

    /// Why luck cannot be shown for this item, if it cannot.
    pub fn incalculable_reason(&self, item: &LogItem, config: Option<&LuckConfig>) -> Option<String> {
        if let Kind::Unsupported(reason) = &self.kind {
            return Some(reason.clone());
        }
        let Some(config) = config else {
            return self
                .requires_config()
                .then(|| format!("{} {OTHER_SUBJECT_REASON}", item.name));
        };
        if self.options.contains(&ConfigKey::BarrowsBoltRacksEnabled) && !config.barrows_bolt_racks_enabled {
            return Some(BOLT_RACKS_DISABLED_REASON.to_owned());
        }
        None
    }

    fn registry() -> &'static HookRegistry {
        HookRegistry::standard()
    }

    /// Kill count for a roll's source after trial hooks.
    fn adjusted_count(&self, roll: &RollDescriptor, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> f64 {
        let raw = ledger.count(roll.source().name()).unwrap_or(0);
        match config {
            Some(config) => Self::registry().adjust_trials(roll.source(), raw, &self.options, config),
            None => raw as f64,
        }
    }

    fn roll_trials(&self, roll: &RollDescriptor, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> u64 {
        let trials = self.adjusted_count(roll, ledger, config) * roll.rolls_per_unit();
        if trials.is_finite() && trials > 0.0 { trials.round() as u64 } else { 0 }
    }

    fn roll_chance(&self, roll: &RollDescriptor, config: Option<&LuckConfig>) -> f64 {
        match config {
            Some(config) => {
                Self::registry().adjust_chance(roll.source(), roll.probability_per_roll(), &self.options, config)
            }
            None => roll.probability_per_roll(),
        }
    }

    /// Total number of rolls the ledger is worth.
    pub fn num_trials(&self, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> u64 {
        self.rolls().iter().map(|roll| self.roll_trials(roll, ledger, config)).sum()
    }

    /// Observed successes in the model's unit: stacks for fixed-stack drops,
    /// items otherwise.
    pub fn num_successes(&self, item: &LogItem, config: Option<&LuckConfig>) -> u32 {
        let quantity = match config {
            Some(config) => Self::registry().adjust_successes(item.quantity, &self.options, config),
            None => item.quantity,
        };
        match &self.kind {
            Kind::FixedStack(roll) => quantity / roll.rewards_per_roll(),
            Kind::Unsupported(_) => 0,
            _ => quantity,
        }
    }

    /// Upper edge of the "as lucky as this" band, used for dryness.
    pub fn max_equivalent_successes(&self, item: &LogItem, config: Option<&LuckConfig>) -> u32 {
        self.num_successes(item, config)
    }

    fn max_successes(&self, trials: u64) -> u64 {
        match &self.kind {
            Kind::UniformSum { max, .. } => trials.saturating_mul(*max as u64),
            _ => trials,
        }
    }

    fn outcomes(&self, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> Option<Outcomes> {
        match &self.kind {
            Kind::Binomial(roll) | Kind::FixedStack(roll) => Some(Outcomes::Binomial(Binomial::new(
                self.roll_trials(roll, ledger, config),
                self.roll_chance(roll, config),
            ))),
            Kind::PoissonBinomial { rolls, thresholds } => {
                let mut probabilities = Vec::new();
                for roll in rolls {
                    let trials = self.roll_trials(roll, ledger, config) as usize;
                    let p = self.roll_chance(roll, config);
                    probabilities.extend(std::iter::repeat_n(p, trials));
                }
                Some(Outcomes::PoissonBinomial { probabilities, thresholds: *thresholds })
            }
            Kind::UniformSum { roll, min, max } => {
                let successes = Binomial::new(self.roll_trials(roll, ledger, config), self.roll_chance(roll, config));
                Some(Outcomes::UniformSum(UniformSumMixture::new(successes, *min, *max)))
            }
            Kind::Unsupported(_) => None,
        }
    }

    fn unaccounted(&self, successes: u32, trials: u64, item: &LogItem) -> bool {
        let unaccounted = successes as u64 > self.max_successes(trials);
        if unaccounted {
            warn!(item = %item.name, successes, trials, "more drops than trials; a source is missing");
        }
        unaccounted
    }

    /// Fraction of players with the same trials who received fewer.
    ///
    /// Returns [`UNACCOUNTED_TRIALS`] when the quantity cannot be explained by the
    /// trials, and 0 for unsupported items.
    pub fn calculate_luck(&self, item: &LogItem, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> f64 {
        let successes = self.num_successes(item, config);
        if successes == 0 {
            return 0.0;
        }
        let trials = self.num_trials(ledger, config);
        if self.unaccounted(successes, trials, item) {
            return UNACCOUNTED_TRIALS;
        }
        match self.outcomes(ledger, config) {
            Some(outcomes) => outcomes.cdf(successes as i64 - 1),
            None => 0.0,
        }
    }

    /// Fraction of players with the same trials who received more.
    ///
    /// 0 with no trials at all. Otherwise returns [`UNACCOUNTED_TRIALS`] when the
    /// quantity cannot be explained by the trials, and 0 for unsupported items.
    pub fn calculate_dryness(&self, item: &LogItem, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> f64 {
        let trials = self.num_trials(ledger, config);
        if trials == 0 {
            return 0.0;
        }
        let successes = self.num_successes(item, config);
        if self.unaccounted(successes, trials, item) {
            return UNACCOUNTED_TRIALS;
        }
        let max_equivalent = self.max_equivalent_successes(item, config);
        match self.outcomes(ledger, config) {
            Some(outcomes) => (1.0 - outcomes.cdf(max_equivalent as i64)).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// Raw counts behind the model, e.g. `"2000x Chambers of Xeric (CM)
    /// completions, 1000x Chambers of Xeric completions"`. Highest count first.
    pub fn trial_description(&self, ledger: &dyn TrialLedger) -> String {
        let mut counts: Vec<(u32, &str)> = Vec::new();
        for roll in self.rolls() {
            let name = roll.source().name();
            if counts.iter().all(|(_, seen)| *seen != name) {
                counts.push((ledger.count(name).unwrap_or(0), name));
            }
        }
        counts.sort_by(|a, b| b.0.cmp(&a.0));
        counts
            .iter()
            .map(|(count, name)| format!("{count}x {name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every setting the model's hooks read, as `name=value` pairs. Empty when
    /// there are none or no configuration is available.
    pub fn options_description(&self, config: Option<&LuckConfig>) -> String {
        let Some(config) = config else {
            return String::new();
        };
        let mut read: Vec<ConfigKey> = Vec::new();
        for setting in self.options.iter().flat_map(|option| option.reads()) {
            if !read.contains(&setting) {
                read.push(setting);
            }
        }
        read.iter()
            .map(|&setting| format!("{}={}", setting.name(), config.value(setting).describe()))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Precomputes a sampler over alternate outcomes for the same trials.
    ///
    /// Multi-source models need the exact Poisson-binomial pmf, so they refuse
    /// past the model's trial threshold rather than run the quadratic DP.
    pub fn simulator(&self, ledger: &dyn TrialLedger, config: Option<&LuckConfig>) -> Result<OutcomeSampler, ProbError> {
        let (table, stack, rewards) = match (&self.kind, self.outcomes(ledger, config)) {
            (Kind::FixedStack(roll), Some(Outcomes::Binomial(b))) => {
                (AliasTable::from_binomial(&b)?, roll.rewards_per_roll(), None)
            }
            (_, Some(Outcomes::Binomial(b))) => (AliasTable::from_binomial(&b)?, 1, None),
            (_, Some(Outcomes::PoissonBinomial { probabilities, thresholds })) => {
                if probabilities.len() > thresholds.num_trials {
                    return Err(ProbError::TooManyTrials {
                        trials: probabilities.len(),
                        limit: thresholds.num_trials,
                    });
                }
                (AliasTable::from_poisson_binomial(&PoissonBinomial::new(&probabilities))?, 1, None)
            }
            (_, Some(Outcomes::UniformSum(u))) => {
                (AliasTable::from_binomial(&u.successes())?, 1, Some(u.reward_range()))
            }
            (_, None) => return Err(ProbError::Empty),
        };
        Ok(OutcomeSampler::new(table, stack, rewards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CollectionLog;
    use crate::source::TrialSource;
    use proptest::prelude::*;

    fn log(kills: &[(TrialSource, u32)]) -> CollectionLog {
        kills
            .iter()
            .fold(CollectionLog::new("tester"), |log, &(source, count)| log.with_kill_count(source.name(), count))
    }

    fn item(quantity: u32) -> LogItem {
        LogItem::new(1, "Test item", quantity)
    }

    fn cox() -> DropModel {
        DropModel::poisson_binomial(vec![
            RollDescriptor::new(TrialSource::ChambersOfXericCompletions, 1.0 / 34.5),
            RollDescriptor::new(TrialSource::ChambersOfXericCmCompletions, 1.0 / 34.5),
        ])
        .unwrap()
        .with_options([ConfigKey::AvgPersonalCoxPoints, ConfigKey::AvgPersonalCoxCmPoints])
    }

    #[test]
    fn construction_is_validated() {
        assert!(matches!(DropModel::poisson_binomial(vec![]), Err(ModelError::EmptyRolls)));
        assert!(matches!(
            DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, 1.5)),
            Err(ModelError::InvalidProbability { index: 0, .. })
        ));
        assert!(matches!(
            DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, 0.1).with_rolls(-1.0)),
            Err(ModelError::InvalidRollsPerUnit { .. })
        ));
        assert!(matches!(
            DropModel::fixed_stack(RollDescriptor::new(TrialSource::CerberusKills, 0.01)),
            Err(ModelError::InvalidStackSize(1))
        ));
        assert!(matches!(
            DropModel::uniform_sum(RollDescriptor::new(TrialSource::BarrowsChestsOpened, 0.01), 5, 4),
            Err(ModelError::InvalidRewardRange { min: 5, max: 4 })
        ));
    }

    #[test]
    fn binomial_one_drop_in_one_hundred() {
        let model = DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, 0.01)).unwrap();
        let ledger = log(&[(TrialSource::ZulrahKills, 100)]);
        let config = LuckConfig::default();

        assert_eq!(model.num_trials(&ledger, Some(&config)), 100);
        let luck = model.calculate_luck(&item(1), &ledger, Some(&config));
        let dryness = model.calculate_dryness(&item(1), &ledger, Some(&config));
        assert!((luck - 0.3660323).abs() < 1e-5, "{luck}");
        assert!((dryness - 0.2642380).abs() < 1e-5, "{dryness}");
    }

    #[test]
    fn boundary_rules() {
        let model = DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, 0.01)).unwrap();
        let none = log(&[]);
        assert_eq!(model.calculate_luck(&item(0), &none, None), 0.0);
        assert_eq!(model.calculate_dryness(&item(0), &none, None), 0.0);
        // no trials means nobody got more, even when drops are unaccounted for
        assert_eq!(model.calculate_luck(&item(2), &none, None), UNACCOUNTED_TRIALS);
        assert_eq!(model.calculate_dryness(&item(2), &none, None), 0.0);

        let two = log(&[(TrialSource::ZulrahKills, 2)]);
        assert_eq!(model.calculate_luck(&item(5), &two, None), UNACCOUNTED_TRIALS);
        assert_eq!(model.calculate_dryness(&item(5), &two, None), UNACCOUNTED_TRIALS);
        // exactly as many drops as trials is fine
        assert!(model.calculate_luck(&item(2), &two, None) > 0.99);
        assert_eq!(model.calculate_dryness(&item(2), &two, None), 0.0);
    }

    #[test]
    fn chambers_of_xeric_mixed_modes() {
        let ledger = log(&[
            (TrialSource::ChambersOfXericCompletions, 1000),
            (TrialSource::ChambersOfXericCmCompletions, 2000),
        ]);
        let config = LuckConfig::default();
        let model = cox();

        assert_eq!(model.num_trials(&ledger, Some(&config)), 3000);
        let luck = model.calculate_luck(&item(4), &ledger, Some(&config));
        let dryness = model.calculate_dryness(&item(4), &ledger, Some(&config));
        assert!((luck - 0.43).abs() < 0.01, "{luck}");
        assert!((dryness - 0.37).abs() < 0.01, "{dryness}");

        let exact = model.with_thresholds(Thresholds { num_trials: usize::MAX, num_successes: i64::MAX });
        let luck = exact.calculate_luck(&item(4), &ledger, Some(&config));
        let dryness = exact.calculate_dryness(&item(4), &ledger, Some(&config));
        assert!((luck - 0.43157).abs() < 1e-4, "{luck}");
        assert!((dryness - 0.37293).abs() < 1e-4, "{dryness}");
    }

    #[test]
    fn fixed_stack_snaps_to_whole_stacks() {
        let model =
            DropModel::fixed_stack(RollDescriptor::new(TrialSource::CerberusKills, 0.01).with_rewards(3)).unwrap();
        let ledger = log(&[(TrialSource::CerberusKills, 350)]);

        assert_eq!(model.num_successes(&item(11), None), 3);
        let luck = model.calculate_luck(&item(9), &ledger, None);
        let dryness = model.calculate_dryness(&item(9), &ledger, None);
        assert!((luck - 0.319453).abs() < 1e-5, "{luck}");
        assert!((dryness - 0.463909).abs() < 1e-5, "{dryness}");

        // a partial stack changes nothing
        assert_eq!(model.calculate_dryness(&item(11), &ledger, None), dryness);

        assert_eq!(model.calculate_luck(&item(0), &ledger, None), 0.0);
        let dryness = model.calculate_dryness(&item(0), &ledger, None);
        assert!((dryness - 0.970330).abs() < 1e-5, "{dryness}");
    }

    #[test]
    fn uniform_sum_with_wasted_chests() {
        let model = DropModel::uniform_sum(
            RollDescriptor::new(TrialSource::BarrowsChestsOpened, 0.01).with_rolls(7.0),
            20,
            30,
        )
        .unwrap()
        .with_option(ConfigKey::NumInvalidBarrowsKc);
        let ledger = log(&[(TrialSource::BarrowsChestsOpened, 135)]);
        let config = LuckConfig::default().with_invalid_barrows_kc(35);

        assert_eq!(model.num_trials(&ledger, Some(&config)), 700);
        let luck = model.calculate_luck(&item(175), &ledger, Some(&config));
        let dryness = model.calculate_dryness(&item(175), &ledger, Some(&config));
        assert!((luck - 0.5).abs() < 0.03, "{luck}");
        assert!((dryness - 0.5).abs() < 0.03, "{dryness}");

        // quantity bounded by trials * max reward, not by trials
        let few = log(&[(TrialSource::BarrowsChestsOpened, 1)]);
        assert_ne!(model.calculate_luck(&item(100), &few, Some(&config)), UNACCOUNTED_TRIALS);
        assert_eq!(model.calculate_luck(&item(211), &few, Some(&config)), UNACCOUNTED_TRIALS);
    }

    #[test]
    fn incalculable_reasons() {
        let bolt_racks = DropModel::uniform_sum(
            RollDescriptor::new(TrialSource::BarrowsChestsOpened, 0.01).with_rolls(7.0),
            35,
            40,
        )
        .unwrap()
        .with_option(ConfigKey::BarrowsBoltRacksEnabled);
        let rack = LogItem::new(4740, "Bolt rack", 100);

        let disabled = LuckConfig::default();
        assert_eq!(
            bolt_racks.incalculable_reason(&rack, Some(&disabled)).as_deref(),
            Some(BOLT_RACKS_DISABLED_REASON)
        );
        assert_eq!(bolt_racks.incalculable_reason(&rack, Some(&disabled.with_bolt_racks(true))), None);

        let reason = bolt_racks.incalculable_reason(&rack, None).unwrap();
        assert!(reason.starts_with("Bolt rack"));
        assert!(reason.contains("only available for your own character"));

        let plain = DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, 0.01)).unwrap();
        assert_eq!(plain.incalculable_reason(&rack, None), None);

        let unsupported = DropModel::unsupported("This item is obtained in a non-luck-based way.")
            .with_option(ConfigKey::AvgNexContribution);
        assert!(unsupported.options().is_empty());
        assert_eq!(
            unsupported.incalculable_reason(&rack, Some(&LuckConfig::default())).as_deref(),
            Some("This item is obtained in a non-luck-based way.")
        );
        assert_eq!(unsupported.calculate_luck(&rack, &log(&[]), None), 0.0);
    }

    #[test]
    fn descriptions() {
        let ledger = log(&[
            (TrialSource::ChambersOfXericCompletions, 1000),
            (TrialSource::ChambersOfXericCmCompletions, 2000),
        ]);
        assert_eq!(
            cox().trial_description(&ledger),
            "2000x Chambers of Xeric (CM) completions, 1000x Chambers of Xeric completions"
        );

        let config = LuckConfig::default();
        assert_eq!(
            cox().options_description(Some(&config)),
            "avg_personal_cox_points=30000;avg_personal_cox_cm_points=45000"
        );
        assert_eq!(cox().options_description(None), "");
    }

    #[test]
    fn missing_config_uses_raw_rates() {
        let ledger = log(&[(TrialSource::ChambersOfXericCompletions, 100)]);
        let with = cox().calculate_dryness(&item(0), &ledger, Some(&LuckConfig::default()));
        let without = cox().calculate_dryness(&item(0), &ledger, None);
        assert!(without > with);
    }

    #[test]
    fn simulator_agrees_with_analytic_luck() {
        use rand::{SeedableRng, rngs::StdRng};

        let model =
            DropModel::fixed_stack(RollDescriptor::new(TrialSource::CerberusKills, 0.01).with_rewards(3)).unwrap();
        let ledger = log(&[(TrialSource::CerberusKills, 350)]);
        let sampler = model.simulator(&ledger, None).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sampler.sample(&mut rng) % 3, 0);

        let (luck, dryness) = sampler.estimate(&mut rng, 3, 20_000);
        assert!((luck - 0.319453).abs() < 0.02, "{luck}");
        assert!((dryness - 0.463909).abs() < 0.02, "{dryness}");

        assert!(matches!(
            DropModel::unsupported("no").simulator(&ledger, None),
            Err(ProbError::Empty)
        ));
    }

    #[test]
    fn simulator_respects_exact_trial_limit() {
        use rand::SeedableRng;

        let small = log(&[
            (TrialSource::ChambersOfXericCompletions, 120),
            (TrialSource::ChambersOfXericCmCompletions, 80),
        ]);
        assert!(cox().simulator(&small, None).is_ok());

        let large = log(&[
            (TrialSource::ChambersOfXericCompletions, 5000),
            (TrialSource::ChambersOfXericCmCompletions, 2000),
        ]);
        assert!(matches!(
            cox().simulator(&large, None),
            Err(ProbError::TooManyTrials { trials: 7000, limit: 200 })
        ));

        let raised = cox().with_thresholds(Thresholds { num_trials: 10_000, num_successes: 100 });
        let sampler = raised.simulator(&large, None).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        // mean is about 203 drops at the raw rate
        let drops = sampler.sample(&mut rng);
        assert!((100..320).contains(&drops), "{drops}");
    }

    #[test]
    fn settings_read_by_item_options_are_described() {
        let nid = DropModel::binomial(RollDescriptor::new(TrialSource::AraxxorKills, 1.0 / 3000.0))
            .unwrap()
            .with_option(ConfigKey::Nid);
        let before = nid.options_description(Some(&LuckConfig::default()));
        let after = nid.options_description(Some(&LuckConfig::default().with_araxxor_destroyed(300)));
        assert_eq!(before, "num_araxxor_destroyed=0");
        assert_ne!(before, after);

        let nightmare = DropModel::binomial(RollDescriptor::new(TrialSource::NightmareKills, 1.0 / 2000.0))
            .unwrap()
            .with_options([ConfigKey::AvgNightmareContribution, ConfigKey::JarOfDreams]);
        assert_eq!(
            nightmare.options_description(Some(&LuckConfig::default())),
            "avg_nightmare_contribution=0.202;avg_nightmare_team_size=5"
        );
    }

    proptest! {
        #[test]
        fn results_are_probabilities_or_sentinel(kc in 0u32..500, quantity in 0u32..20, p in 0.0f64..=1.0) {
            let model = DropModel::binomial(RollDescriptor::new(TrialSource::ZulrahKills, p)).unwrap();
            let ledger = log(&[(TrialSource::ZulrahKills, kc)]);
            let luck = model.calculate_luck(&item(quantity), &ledger, None);
            let dryness = model.calculate_dryness(&item(quantity), &ledger, None);
            if kc == 0 {
                prop_assert_eq!(dryness, 0.0);
            }
            if quantity > kc {
                prop_assert_eq!(luck, UNACCOUNTED_TRIALS);
                prop_assert_eq!(dryness, if kc == 0 { 0.0 } else { UNACCOUNTED_TRIALS });
            } else {
                prop_assert!((0.0..=1.0).contains(&luck));
                prop_assert!((0.0..=1.0).contains(&dryness));
                prop_assert!(luck + dryness <= 1.0 + 1e-9);
            }
        }

        #[test]
        fn wasted_trials_clamp(kc in 0u32..1000, wasted in -100i64..5000) {
            let model = DropModel::binomial(RollDescriptor::new(TrialSource::BarrowsChestsOpened, 0.01))
                .unwrap()
                .with_option(ConfigKey::NumInvalidBarrowsKc);
            let config = LuckConfig::default().with_invalid_barrows_kc(wasted);
            let ledger = log(&[(TrialSource::BarrowsChestsOpened, kc)]);
            let trials = model.num_trials(&ledger, Some(&config));
            prop_assert!(trials <= kc as u64);
            if wasted >= kc as i64 {
                prop_assert_eq!(trials, 0);
            }
        }
    }
}
