use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{Fingerprint, LuckCache, LuckResult, LuckStatus};
use crate::catalog::Catalog;
use crate::config::LuckConfig;
use crate::error::{LuckError, ModelError};
use crate::ledger::{LogItem, TrialLedger};

/// A luck lookup that went through.
#[derive(Debug, Clone)]
pub struct LuckReport {
    pub result: Arc<LuckResult>,
    /// Set when the ledger is someone else's and the local settings were used
    /// in place of theirs.
    pub warning: Option<String>,
    /// Counts the result is based on, e.g. `"350x Cerberus kills"`.
    pub trial_description: String,
}

/// Catalog plus cache: the entry point for "how lucky is this item".
#[derive(Debug)]
pub struct LuckCalculator {
    catalog: Catalog,
    cache: LuckCache,
    local_config: LuckConfig,
}

impl LuckCalculator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache: LuckCache::new(),
            local_config: LuckConfig::default(),
        }
    }

    pub fn standard() -> Result<Self, ModelError> {
        Ok(Self::new(Catalog::standard()?))
    }

    /// Settings to fall back on when looking at another player's log.
    pub fn with_local_config(mut self, config: LuckConfig) -> Self {
        self.local_config = config;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &LuckCache {
        &self.cache
    }

    /// Luck for `item_name` in `ledger`.
    ///
    /// `config` is `None` for another player's log. Items that read settings are
    /// then computed with the local settings and the report carries a warning.
    pub fn luck(
        &self,
        ledger: &dyn TrialLedger,
        item_name: &str,
        config: Option<&LuckConfig>,
    ) -> Result<LuckReport, LuckError> {
        let model = self
            .catalog
            .get(item_name)
            .ok_or_else(|| LuckError::UnknownItem(item_name.to_owned()))?;
        // not in the log yet: nothing received, and no id to key on beyond the name
        let item = ledger
            .item(item_name)
            .cloned()
            .unwrap_or_else(|| LogItem::new(0, item_name.trim(), 0));

        let (config, warning) = match config {
            None if model.requires_config() => (Some(&self.local_config), model.incalculable_reason(&item, None)),
            config => (config, None),
        };
        if let Some(reason) = model.incalculable_reason(&item, config) {
            debug!(item = %item.name, %reason, "luck is incalculable");
            return Err(LuckError::Incalculable(reason));
        }

        let trial_description = model.trial_description(ledger);
        let key = Fingerprint::new(
            ledger.subject(),
            &item,
            trial_description.clone(),
            model.options_description(config),
        );
        let result = self.cache.get_or_compute(key, || {
            LuckResult::new(
                model.calculate_luck(&item, ledger, config),
                model.calculate_dryness(&item, ledger, config),
            )
        });

        if result.status() == LuckStatus::Unaccounted {
            return Err(LuckError::Indeterminate { item: item.name });
        }
        Ok(LuckReport {
            result,
            warning,
            trial_description,
        })
    }

    /// Forget every cached result at a session boundary, e.g. on logout.
    pub fn clear_session(&self) {
        info!(entries = self.cache.len(), "clearing luck session");
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CollectionLog;
    use crate::source::TrialSource;
    use crate::NamedEnum;

    fn calculator() -> LuckCalculator {
        LuckCalculator::standard().unwrap()
    }

    #[test]
    fn unknown_item() {
        let log = CollectionLog::new("Zezima");
        assert_eq!(
            calculator().luck(&log, "Bronze dagger", None).unwrap_err(),
            LuckError::UnknownItem("Bronze dagger".into())
        );
    }

    #[test]
    fn unsupported_item_is_incalculable() {
        let log = CollectionLog::new("Zezima").with_item(LogItem::new(6570, "Fire cape", 1));
        let err = calculator().luck(&log, "fire cape", Some(&LuckConfig::default())).unwrap_err();
        assert_eq!(err, LuckError::Incalculable("This item is obtained in a non-luck-based way.".into()));
    }

    #[test]
    fn other_players_log_uses_local_settings() {
        let log = CollectionLog::new("Someone else")
            .with_kill_count(TrialSource::ChambersOfXericCompletions.name(), 1000)
            .with_kill_count(TrialSource::ChambersOfXericCmCompletions.name(), 2000)
            .with_item(LogItem::new(20997, "Twisted bow", 4));
        let calculator = calculator();

        let theirs = calculator.luck(&log, "Twisted bow", None).unwrap();
        let warning = theirs.warning.as_deref().unwrap();
        assert!(warning.contains("only available for your own character"));

        let mine = calculator.luck(&log, "Twisted bow", Some(&LuckConfig::default())).unwrap();
        assert!(mine.warning.is_none());
        // same inputs, same cache entry
        assert!(Arc::ptr_eq(&theirs.result, &mine.result));
        assert_eq!(calculator.cache().len(), 1);
    }

    #[test]
    fn more_drops_than_kills_is_indeterminate() {
        let log = CollectionLog::new("Zezima")
            .with_kill_count(TrialSource::ZulrahKills.name(), 1)
            .with_item(LogItem::new(12921, "Pet snakeling", 3));
        assert_eq!(
            calculator().luck(&log, "Pet snakeling", None).unwrap_err(),
            LuckError::Indeterminate { item: "Pet snakeling".into() }
        );
    }

    #[test]
    fn bolt_racks_need_enabling() {
        let log = CollectionLog::new("Zezima")
            .with_kill_count(TrialSource::BarrowsChestsOpened.name(), 100)
            .with_item(LogItem::new(4740, "Bolt rack", 2000));
        let calculator = calculator();
        let config = LuckConfig::default();
        assert!(matches!(
            calculator.luck(&log, "Bolt rack", Some(&config)),
            Err(LuckError::Incalculable(_))
        ));
        let report = calculator.luck(&log, "Bolt rack", Some(&config.with_bolt_racks(true))).unwrap();
        assert_eq!(report.trial_description, "100x Barrows Chests opened");
        assert!((0.0..=1.0).contains(&report.result.luck()));
    }

    #[test]
    fn unobtained_items_on_one_source_keep_their_own_results() {
        let catalog = Catalog::new()
            .with_item(
                "Tanzanite fang",
                crate::DropModel::binomial(crate::RollDescriptor::new(TrialSource::ZulrahKills, 0.1)).unwrap(),
            )
            .unwrap()
            .with_item(
                "Pet snakeling",
                crate::DropModel::binomial(crate::RollDescriptor::new(TrialSource::ZulrahKills, 1.0 / 4000.0))
                    .unwrap(),
            )
            .unwrap();
        let calculator = LuckCalculator::new(catalog);
        let log = CollectionLog::new("Zezima").with_kill_count(TrialSource::ZulrahKills.name(), 100);

        let fang = calculator.luck(&log, "Tanzanite fang", None).unwrap();
        let pet = calculator.luck(&log, "Pet snakeling", None).unwrap();
        assert!(fang.result.dryness() > 0.999);
        assert!((pet.result.dryness() - 0.02469).abs() < 1e-4, "{}", pet.result.dryness());
        assert_eq!(calculator.cache().len(), 2);
    }

    #[test]
    fn changed_setting_is_not_a_stale_hit() {
        let calculator = calculator();
        let log = CollectionLog::new("Zezima").with_kill_count(TrialSource::AraxxorKills.name(), 300);

        let before = calculator.luck(&log, "Nid", Some(&LuckConfig::default())).unwrap();
        let destroyed = LuckConfig::default().with_araxxor_destroyed(300);
        let after = calculator.luck(&log, "Nid", Some(&destroyed)).unwrap();

        // 300 kills against 600 at 1/3000
        assert!((before.result.dryness() - 0.09518).abs() < 1e-4, "{}", before.result.dryness());
        assert!((after.result.dryness() - 0.18130).abs() < 1e-4, "{}", after.result.dryness());
        assert_eq!(calculator.cache().len(), 2);
    }

    #[test]
    fn session_clear_recomputes() {
        let log = CollectionLog::new("Zezima")
            .with_kill_count(TrialSource::CerberusKills.name(), 350)
            .with_item(LogItem::new(13249, "Key master teleport", 9));
        let calculator = calculator();
        let first = calculator.luck(&log, "Key master teleport", None).unwrap();
        calculator.clear_session();
        assert!(calculator.cache().is_empty());
        let second = calculator.luck(&log, "Key master teleport", None).unwrap();
        assert!(!Arc::ptr_eq(&first.result, &second.result));
        assert_eq!(first.result, second.result);
    }
}
