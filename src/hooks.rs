//! Config-driven adjustments to kill counts, drop chances and item counts.
//!
//! Each hook is a pure function registered under a `(trial source, option)`
//! pair. A drop model lists the options it opts into; at evaluation time every
//! listed option with a hook for the roll's source is applied, in option order.
//! Results are always kept in range: counts never go negative and chances stay
//! in `[0, 1]`.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::trace;

use crate::config::{ConfigKey, LuckConfig};
use crate::source::TrialSource;

/// Maps a (raw or already adjusted) kill count to an adjusted one.
pub type TrialTransform = fn(f64, &LuckConfig) -> f64;

/// Maps a per-roll drop chance to an adjusted one.
pub type ChanceTransform = fn(f64, &LuckConfig) -> f64;

/// Maps the received quantity to the quantity that counts for luck.
pub type SuccessTransform = fn(u32, &LuckConfig) -> u32;

/// A hook bound to one trial source.
#[derive(Clone, Copy)]
pub enum Hook {
    Trials(TrialTransform),
    Chance(ChanceTransform),
}

impl std::fmt::Debug for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hook::Trials(_) => f.write_str("Hook::Trials"),
            Hook::Chance(_) => f.write_str("Hook::Chance"),
        }
    }
}

/// Registry of hooks. [`HookRegistry::standard`] holds the game's rules.
#[derive(Debug, Default)]
pub struct HookRegistry {
    by_source: HashMap<(TrialSource, ConfigKey), Hook>,
    successes: HashMap<ConfigKey, SuccessTransform>,
}

static STANDARD: LazyLock<HookRegistry> = LazyLock::new(HookRegistry::build_standard);

impl HookRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared registry with every known rule.
    pub fn standard() -> &'static HookRegistry {
        &STANDARD
    }

    pub fn register(&mut self, source: TrialSource, option: ConfigKey, hook: Hook) -> &mut Self {
        self.by_source.insert((source, option), hook);
        self
    }

    pub fn register_successes(&mut self, option: ConfigKey, transform: SuccessTransform) -> &mut Self {
        self.successes.insert(option, transform);
        self
    }

    pub fn get(&self, source: TrialSource, option: ConfigKey) -> Option<Hook> {
        self.by_source.get(&(source, option)).copied()
    }

    /// Kill count for `source` after every trial hook the options select.
    pub fn adjust_trials(&self, source: TrialSource, count: u32, options: &[ConfigKey], config: &LuckConfig) -> f64 {
        let mut kc = count as f64;
        for &option in options {
            if let Some(Hook::Trials(f)) = self.get(source, option) {
                let adjusted = f(kc, config);
                let adjusted = if adjusted.is_finite() { adjusted.max(0.0) } else { kc };
                trace!(%source, %option, from = kc, to = adjusted, "adjusted trials");
                kc = adjusted;
            }
        }
        kc
    }

    /// Drop chance for a roll on `source` after every chance hook the options select.
    pub fn adjust_chance(&self, source: TrialSource, chance: f64, options: &[ConfigKey], config: &LuckConfig) -> f64 {
        let mut p = chance;
        for &option in options {
            if let Some(Hook::Chance(f)) = self.get(source, option) {
                let adjusted = crate::distribution::clamp_probability(f(p, config));
                trace!(%source, %option, from = p, to = adjusted, "adjusted drop chance");
                p = adjusted;
            }
        }
        p
    }

    /// Received quantity after every success hook the options select.
    pub fn adjust_successes(&self, quantity: u32, options: &[ConfigKey], config: &LuckConfig) -> u32 {
        options
            .iter()
            .filter_map(|option| self.successes.get(option))
            .fold(quantity, |q, f| f(q, config).min(q))
    }

    fn build_standard() -> Self {
        use ConfigKey as K;
        use Hook::{Chance, Trials};
        use TrialSource as S;

        let mut r = Self::empty();

        // kill counts
        r.register(S::BarrowsChestsOpened, K::NumInvalidBarrowsKc, Trials(|kc, c| subtract_clamped(kc, c.num_invalid_barrows_kc)))
            .register(S::AraxxorKills, K::Nid, Trials(|kc, c| add_clamped(kc, c.num_araxxor_destroyed)))
            .register(S::AraxxorKills, K::NumAraxxorDestroyed, Trials(|kc, c| subtract_clamped(kc, c.num_araxxor_destroyed)))
            // sacrificing doubles the roll; counted as an extra kill rather than a doubled chance
            .register(S::RoyalTitanKills, K::Bran, Trials(|kc, c| add_clamped(kc, c.num_royal_titans_sacrificed)))
            .register(S::RoyalTitanKills, K::NumRoyalTitansSacrificed, Trials(|kc, c| subtract_clamped(kc, c.num_royal_titans_sacrificed)))
            .register(S::SolHereditKills, K::NumDizanasQuiversSacrificed, Trials(|kc, c| add_clamped(kc, c.num_dizanas_quivers_sacrificed)))
            .register(S::TztokJadKills, K::NumFireCapesSacrificed, Trials(|kc, c| add_clamped(kc, c.num_fire_capes_sacrificed)))
            .register(S::TzkalZukKills, K::NumInfernalCapesSacrificed, Trials(|kc, c| add_clamped(kc, c.num_infernal_capes_sacrificed)));

        // kills before a drop rate change count at the old rate
        r.register(S::SkotizoKills, K::SkotizoKcPreBuff, Trials(|kc, c| pre_buff(kc, c.skotizo_kc_pre_buff, 200.0 / 1000.0)))
            .register(S::KalphiteQueenKills, K::KqKcPreDPickBuff, Trials(|kc, c| pre_buff(kc, c.kq_kc_pre_d_pick_buff, 0.0)))
            .register(S::KingBlackDragonKills, K::KbdKcPreDPickBuff, Trials(|kc, c| pre_buff(kc, c.kbd_kc_pre_d_pick_buff, 1000.0 / 1500.0)))
            // old rates not modelled; those kills are left out
            .register(S::NightmareKills, K::NightmareKcPreBuff, Trials(|kc, c| pre_buff(kc, c.nightmare_kc_pre_buff, 0.0)))
            .register(S::PhosanisNightmareKills, K::PhosanisNightmareKcPreBuff, Trials(|kc, c| pre_buff(kc, c.phosanis_nightmare_kc_pre_buff, 0.0)));

        // raids
        r.register(S::ChambersOfXericCompletions, K::AvgPersonalCoxPoints, Chance(|p, c| p * cox_unique_share(c.avg_personal_cox_points)))
            .register(S::ChambersOfXericCmCompletions, K::AvgPersonalCoxCmPoints, Chance(|p, c| p * cox_unique_share(c.avg_personal_cox_cm_points)))
            .register(S::TheatreOfBloodCompletions, K::AvgPersonalTobPoints, Chance(|p, c| p * clamp_contribution(c.avg_personal_tob_points)))
            .register(S::TheatreOfBloodHardCompletions, K::AvgPersonalTobHmPoints, Chance(|p, c| p * clamp_contribution(c.avg_personal_tob_hm_points)))
            .register(S::TombsOfAmascutEntryCompletions, K::EntryToaUniqueChance, Chance(|p, c| p * toa_unique_chance(c.entry_toa_unique_chance)))
            .register(S::TombsOfAmascutCompletions, K::RegularToaUniqueChance, Chance(|p, c| p * toa_unique_chance(c.regular_toa_unique_chance)))
            .register(S::TombsOfAmascutExpertCompletions, K::ExpertToaUniqueChance, Chance(|p, c| p * toa_unique_chance(c.expert_toa_unique_chance)))
            // the pet chance replaces the base rate outright
            .register(S::TombsOfAmascutEntryCompletions, K::TumekensGuardian, Chance(|_, c| toa_pet_chance(c.entry_toa_unique_chance)))
            .register(S::TombsOfAmascutCompletions, K::TumekensGuardian, Chance(|_, c| toa_pet_chance(c.regular_toa_unique_chance)))
            .register(S::TombsOfAmascutExpertCompletions, K::TumekensGuardian, Chance(|_, c| toa_pet_chance(c.expert_toa_unique_chance)));

        // group bosses
        r.register(S::NightmareKills, K::AvgNightmareContribution, Chance(|p, c| {
            p * nightmare_unique_share(c.avg_nightmare_team_size, c.avg_nightmare_contribution)
        }))
        .register(S::NightmareKills, K::JarOfDreams, Chance(|p, c| p * nightmare_jar_modifier(c.avg_nightmare_team_size)))
        .register(S::NightmareKills, K::LittleNightmare, Chance(|p, c| p * nightmare_pet_share(c.avg_nightmare_team_size)))
        .register(S::NexKills, K::AvgNexContribution, Chance(|p, c| p * clamp_contribution(c.avg_nex_contribution)))
        .register(S::HueycoatlKills, K::AvgHueycoatlContribution, Chance(|p, c| p * clamp_contribution(c.avg_hueycoatl_contribution)))
        .register(S::RoyalTitanKills, K::AvgRoyalTitansContribution, Chance(|p, c| p * clamp_contribution(c.avg_royal_titans_contribution)))
        .register(S::ZalcanoKills, K::AvgZalcanoContribution, Chance(|p, c| p * clamp_contribution(c.avg_zalcano_contribution)))
        .register(S::ZalcanoKills, K::AvgZalcanoPoints, Chance(|p, c| p * zalcano_shard_boost(c.avg_zalcano_points)))
        .register(S::CallistoKills, K::AvgCallistoContribution, Chance(|p, c| p * clamp_contribution(c.avg_callisto_contribution)))
        .register(S::VenenatisKills, K::AvgVenenatisContribution, Chance(|p, c| p * clamp_contribution(c.avg_venenatis_contribution)))
        .register(S::VetionKills, K::AvgVetionContribution, Chance(|p, c| p * clamp_contribution(c.avg_vetion_contribution)))
        .register(S::ScurriusKills, K::AvgScurriusMvpRate, Chance(|p, c| p * clamp_contribution(c.avg_scurrius_mvp_rate)));

        // bought items do not count as drops
        r.register_successes(K::NumCrystalWeaponSeedsPurchased, |q, c| subtract_count(q, c.num_crystal_weapon_seeds_purchased))
            .register_successes(K::NumAbyssalLanternsPurchased, |q, c| subtract_count(q, c.num_abyssal_lanterns_purchased));

        r
    }
}

/// `kc - n`, with `n` clamped to `[0, kc]`.
pub fn subtract_clamped(kc: f64, n: i64) -> f64 {
    kc - (n as f64).clamp(0.0, kc)
}

/// `kc + n`, with `n` clamped to `[0, kc]`: you cannot destroy or sacrifice more
/// than you killed.
pub fn add_clamped(kc: f64, n: i64) -> f64 {
    kc + (n as f64).clamp(0.0, kc)
}

fn subtract_count(quantity: u32, n: i64) -> u32 {
    let n = n.clamp(0, quantity as i64) as u32;
    quantity - n
}

/// The first `pre` kills (clamped to `[0, kc]`) are worth `ratio` of a kill now.
pub fn pre_buff(kc: f64, pre: i64, ratio: f64) -> f64 {
    let pre = (pre as f64).clamp(0.0, kc);
    kc - pre + pre * ratio.clamp(0.0, 1.0)
}

pub fn clamp_contribution(fraction: f64) -> f64 {
    if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
}

/// Share of the CoX unique rate earned by a personal point total, capped at 570k.
pub fn cox_unique_share(points: i64) -> f64 {
    points.clamp(0, 570_000) as f64 / 867_600.0
}

/// ToA unique chance, capped at the maximum unique rate.
pub fn toa_unique_chance(chance: f64) -> f64 {
    if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 0.55) }
}

/// Pet chance estimated from the unique chance by a quadratic fit. Inaccurate
/// below 50 or above 550 invocation.
pub fn toa_pet_chance(unique_chance: f64) -> f64 {
    let x = toa_unique_chance(unique_chance);
    9.266e-2 * x * x + 2.539e-2 * x + 1.269e-4
}

/// Teams above five get a bonus unique roll chance, one percent per extra player
/// up to 75; the player's share of it is their contribution.
pub fn nightmare_unique_share(team_size: f64, contribution: f64) -> f64 {
    let bonus = 1.0 + (team_size - 5.0).clamp(0.0, 75.0) / 100.0;
    bonus * clamp_contribution(contribution)
}

/// MVP gets a 5% boost to the jar; assumes an average MVP rate for the team size.
pub fn nightmare_jar_modifier(team_size: f64) -> f64 {
    let team = team_size.clamp(1.0, 5.0);
    1.0 + 0.05 / team
}

pub fn nightmare_pet_share(team_size: f64) -> f64 {
    1.0 / team_size.clamp(1.0, 5.0)
}

/// Linear from 1x at 150 points to 2x at 1000 points.
pub fn zalcano_shard_boost(points: i64) -> f64 {
    let fraction = (points as f64 - 150.0) / (1000.0 - 150.0);
    1.0 + fraction.clamp(0.0, 1.0)
}
