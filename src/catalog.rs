//! Item name to drop model.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ConfigKey as K;
use crate::error::ModelError;
use crate::model::DropModel;
use crate::roll::RollDescriptor as Roll;
use crate::source::TrialSource as S;

/// Read-only after construction. Names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<String, (String, DropModel)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Fails if an item with the same name (ignoring case) exists.
    pub fn insert(&mut self, name: impl Into<String>, model: DropModel) -> Result<(), ModelError> {
        let name = name.into();
        let key = name.trim().to_lowercase();
        if self.items.contains_key(&key) {
            return Err(ModelError::DuplicateItem(name));
        }
        self.items.insert(key, (name, model));
        Ok(())
    }

    pub fn with_item(mut self, name: impl Into<String>, model: DropModel) -> Result<Self, ModelError> {
        self.insert(name, model)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&DropModel> {
        self.items.get(&name.trim().to_lowercase()).map(|(_, model)| model)
    }

    /// Item names as first inserted, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.values().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Representative items covering every kind of drop and every hook.
    pub fn standard() -> Result<Self, ModelError> {
        let single = |source, p| DropModel::binomial(Roll::new(source, p));

        let catalog = Self::new()
            // raids
            .with_item(
                "Twisted bow",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::ChambersOfXericCompletions, 1.0 / 34.5),
                    Roll::new(S::ChambersOfXericCmCompletions, 1.0 / 34.5),
                ])?
                .with_options([K::AvgPersonalCoxPoints, K::AvgPersonalCoxCmPoints]),
            )?
            .with_item(
                "Scythe of vitur (uncharged)",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::TheatreOfBloodCompletions, 1.0 / 172.9),
                    Roll::new(S::TheatreOfBloodHardCompletions, 1.0 / 138.6),
                ])?
                .with_options([K::AvgPersonalTobPoints, K::AvgPersonalTobHmPoints]),
            )?
            .with_item(
                "Tumeken's shadow (uncharged)",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::TombsOfAmascutEntryCompletions, 1.0 / 24.0),
                    Roll::new(S::TombsOfAmascutCompletions, 1.0 / 24.0),
                    Roll::new(S::TombsOfAmascutExpertCompletions, 1.0 / 24.0),
                ])?
                .with_options([K::EntryToaUniqueChance, K::RegularToaUniqueChance, K::ExpertToaUniqueChance]),
            )?
            .with_item(
                "Tumeken's guardian",
                // base rate is replaced by the pet chance hook
                DropModel::poisson_binomial(vec![
                    Roll::new(S::TombsOfAmascutEntryCompletions, 0.0),
                    Roll::new(S::TombsOfAmascutCompletions, 0.0),
                    Roll::new(S::TombsOfAmascutExpertCompletions, 0.0),
                ])?
                .with_option(K::TumekensGuardian),
            )?
            // group bosses
            .with_item(
                "Nexling",
                single(S::NexKills, 1.0 / 500.0)?.with_option(K::AvgNexContribution),
            )?
            .with_item(
                "Jar of dreams",
                single(S::NightmareKills, 1.0 / 2000.0)?.with_options([K::JarOfDreams, K::NightmareKcPreBuff]),
            )?
            .with_item(
                "Little nightmare",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::NightmareKills, 1.0 / 800.0),
                    Roll::new(S::PhosanisNightmareKills, 1.0 / 1400.0),
                ])?
                .with_options([K::LittleNightmare, K::NightmareKcPreBuff, K::PhosanisNightmareKcPreBuff]),
            )?
            .with_item(
                "Inquisitor's mace",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::NightmareKills, 1.0 / 1200.0),
                    Roll::new(S::PhosanisNightmareKills, 1.0 / 1129.0),
                ])?
                .with_options([K::AvgNightmareContribution, K::NightmareKcPreBuff, K::PhosanisNightmareKcPreBuff]),
            )?
            .with_item(
                "Huberte",
                single(S::HueycoatlKills, 1.0 / 400.0)?.with_option(K::AvgHueycoatlContribution),
            )?
            .with_item(
                "Bran",
                single(S::RoyalTitanKills, 1.0 / 3000.0)?.with_option(K::Bran),
            )?
            .with_item(
                "Giantsoul amulet (uncharged)",
                single(S::RoyalTitanKills, 1.0 / 48.0)?
                    .with_options([K::NumRoyalTitansSacrificed, K::AvgRoyalTitansContribution]),
            )?
            .with_item(
                "Smolcano",
                single(S::ZalcanoKills, 1.0 / 2250.0)?.with_option(K::AvgZalcanoContribution),
            )?
            .with_item(
                "Zalcano shard",
                single(S::ZalcanoKills, 1.0 / 1500.0)?.with_option(K::AvgZalcanoPoints),
            )?
            .with_item(
                "Callisto cub",
                single(S::CallistoKills, 1.0 / 1500.0)?.with_option(K::AvgCallistoContribution),
            )?
            .with_item(
                "Venenatis spiderling",
                single(S::VenenatisKills, 1.0 / 1500.0)?.with_option(K::AvgVenenatisContribution),
            )?
            .with_item(
                "Vet'ion jr.",
                single(S::VetionKills, 1.0 / 1500.0)?.with_option(K::AvgVetionContribution),
            )?
            .with_item(
                "Scurry",
                single(S::ScurriusKills, 1.0 / 3000.0)?.with_option(K::AvgScurriusMvpRate),
            )?
            // kill count adjustments
            .with_item(
                "Nid",
                single(S::AraxxorKills, 1.0 / 3000.0)?.with_option(K::Nid),
            )?
            .with_item(
                "Araxyte fang",
                single(S::AraxxorKills, 1.0 / 600.0)?.with_option(K::NumAraxxorDestroyed),
            )?
            .with_item(
                "Smol heredit",
                single(S::SolHereditKills, 1.0 / 200.0)?.with_option(K::NumDizanasQuiversSacrificed),
            )?
            .with_item(
                "Tzrek-jad",
                single(S::TztokJadKills, 1.0 / 200.0)?.with_option(K::NumFireCapesSacrificed),
            )?
            .with_item(
                "Jal-nib-rek",
                single(S::TzkalZukKills, 1.0 / 100.0)?.with_option(K::NumInfernalCapesSacrificed),
            )?
            .with_item(
                "Jar of darkness",
                single(S::SkotizoKills, 1.0 / 200.0)?.with_option(K::SkotizoKcPreBuff),
            )?
            .with_item(
                "Dragon pickaxe",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::KalphiteQueenKills, 1.0 / 400.0),
                    Roll::new(S::KingBlackDragonKills, 1.0 / 1000.0),
                ])?
                .with_options([K::KqKcPreDPickBuff, K::KbdKcPreDPickBuff]),
            )?
            .with_item("Pet snakeling", single(S::ZulrahKills, 1.0 / 4000.0)?)?
            .with_item(
                "Key master teleport",
                DropModel::fixed_stack(Roll::new(S::CerberusKills, 1.0 / 64.0).with_rewards(3))?,
            )?
            .with_item(
                "Bolt rack",
                DropModel::uniform_sum(Roll::new(S::BarrowsChestsOpened, 1.0 / 8.096).with_rolls(7.0), 35, 40)?
                    .with_options([K::BarrowsBoltRacksEnabled, K::NumInvalidBarrowsKc]),
            )?
            .with_item(
                "Ahrim's hood",
                single(S::BarrowsChestsOpened, 1.0 / 2448.0)?
                    .with_option(K::NumInvalidBarrowsKc),
            )?
            // bought or drop
            .with_item(
                "Crystal weapon seed",
                DropModel::poisson_binomial(vec![
                    Roll::new(S::GauntletCompletionCount, 1.0 / 120.0),
                    Roll::new(S::CorruptedGauntletCompletionCount, 1.0 / 50.0),
                ])?
                .with_option(K::NumCrystalWeaponSeedsPurchased),
            )?
            .with_item(
                "Abyssal lantern",
                single(S::RiftsSearches, 1.0 / 1000.0)?.with_option(K::NumAbyssalLanternsPurchased),
            )?
            .with_item(
                "Fire cape",
                DropModel::unsupported("This item is obtained in a non-luck-based way."),
            )?
            .with_item(
                "Infernal cape",
                DropModel::unsupported("This item is obtained in a non-luck-based way."),
            )?;

        debug!(items = catalog.len(), "built standard catalog");
        Ok(catalog)
    }
}
