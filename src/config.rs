//! Per-player settings that adjust drop models.
//!
//! Every knob has a default that only makes sense for the local player. When
//! luck is computed for someone else the configuration is absent altogether
//! (`Option<&LuckConfig>::None`), which models treat as "cannot calculate" rather
//! than falling back to these defaults.

use serde::{Deserialize, Serialize};

use crate::NamedEnum;

/// Names of the options a drop model may read.
///
/// Most options map onto a [`LuckConfig`] field of the same name. The item
/// options (`Nid`, `Bran`, ...) do not; they select an item-specific variant of a
/// hook that reads other fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, NamedEnum)]
pub enum ConfigKey {
    #[name = "num_invalid_barrows_kc"]
    NumInvalidBarrowsKc,
    #[name = "barrows_bolt_racks_enabled"]
    BarrowsBoltRacksEnabled,
    #[name = "avg_personal_cox_points"]
    AvgPersonalCoxPoints,
    #[name = "avg_personal_cox_cm_points"]
    AvgPersonalCoxCmPoints,
    #[name = "avg_personal_tob_points"]
    AvgPersonalTobPoints,
    #[name = "avg_personal_tob_hm_points"]
    AvgPersonalTobHmPoints,
    #[name = "entry_toa_unique_chance"]
    EntryToaUniqueChance,
    #[name = "regular_toa_unique_chance"]
    RegularToaUniqueChance,
    #[name = "expert_toa_unique_chance"]
    ExpertToaUniqueChance,
    #[name = "avg_nightmare_team_size"]
    AvgNightmareTeamSize,
    #[name = "avg_nightmare_contribution"]
    AvgNightmareContribution,
    #[name = "avg_nex_contribution"]
    AvgNexContribution,
    #[name = "avg_hueycoatl_contribution"]
    AvgHueycoatlContribution,
    #[name = "avg_royal_titans_contribution"]
    AvgRoyalTitansContribution,
    #[name = "avg_zalcano_contribution"]
    AvgZalcanoContribution,
    #[name = "avg_zalcano_points"]
    AvgZalcanoPoints,
    #[name = "avg_callisto_contribution"]
    AvgCallistoContribution,
    #[name = "avg_venenatis_contribution"]
    AvgVenenatisContribution,
    #[name = "avg_vetion_contribution"]
    AvgVetionContribution,
    #[name = "avg_scurrius_mvp_rate"]
    AvgScurriusMvpRate,
    #[name = "num_fire_capes_sacrificed"]
    NumFireCapesSacrificed,
    #[name = "num_infernal_capes_sacrificed"]
    NumInfernalCapesSacrificed,
    #[name = "num_dizanas_quivers_sacrificed"]
    NumDizanasQuiversSacrificed,
    #[name = "num_araxxor_destroyed"]
    NumAraxxorDestroyed,
    #[name = "num_royal_titans_sacrificed"]
    NumRoyalTitansSacrificed,
    #[name = "num_crystal_weapon_seeds_purchased"]
    NumCrystalWeaponSeedsPurchased,
    #[name = "num_abyssal_lanterns_purchased"]
    NumAbyssalLanternsPurchased,
    #[name = "skotizo_kc_pre_buff"]
    SkotizoKcPreBuff,
    #[name = "kq_kc_pre_d_pick_buff"]
    KqKcPreDPickBuff,
    #[name = "kbd_kc_pre_d_pick_buff"]
    KbdKcPreDPickBuff,
    #[name = "nightmare_kc_pre_buff"]
    NightmareKcPreBuff,
    #[name = "phosanis_nightmare_kc_pre_buff"]
    PhosanisNightmareKcPreBuff,

    // item options
    #[name = "Nid"]
    Nid,
    #[name = "Bran"]
    Bran,
    #[name = "Tumeken's guardian"]
    TumekensGuardian,
    #[name = "Jar of dreams"]
    JarOfDreams,
    #[name = "Little nightmare"]
    LittleNightmare,
}

impl ConfigKey {
    /// Stored settings a hook selected by this option reads. Item options read
    /// other settings; every other option reads itself.
    pub fn reads(self) -> Vec<ConfigKey> {
        use ConfigKey::*;

        match self {
            Nid => vec![NumAraxxorDestroyed],
            Bran => vec![NumRoyalTitansSacrificed],
            TumekensGuardian => vec![EntryToaUniqueChance, RegularToaUniqueChance, ExpertToaUniqueChance],
            JarOfDreams | LittleNightmare => vec![AvgNightmareTeamSize],
            AvgNightmareContribution => vec![AvgNightmareContribution, AvgNightmareTeamSize],
            setting => vec![setting],
        }
    }
}

/// A single configuration value, as read by name.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigValue {
    Int(i64),
    Real(f64),
    Bool(bool),
    /// The key does not name a stored setting (item options).
    None,
}

impl ConfigValue {
    /// Canonical text used in cache fingerprints.
    pub fn describe(self) -> String {
        match self {
            ConfigValue::Int(v) => v.to_string(),
            ConfigValue::Real(v) => format!("{v}"),
            ConfigValue::Bool(v) => v.to_string(),
            ConfigValue::None => "-".to_owned(),
        }
    }
}

/// The local player's luck settings.
///
/// Deserializes from any partial document; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckConfig {
    /// Average personal points per Chambers of Xeric raid.
    pub avg_personal_cox_points: i64,
    /// Average personal points per Chambers of Xeric Challenge Mode raid.
    pub avg_personal_cox_cm_points: i64,
    /// Average fraction (0 to 1) of max team points per Theatre of Blood raid, MVP included.
    pub avg_personal_tob_points: f64,
    /// As above, for Hard Mode.
    pub avg_personal_tob_hm_points: f64,
    /// Unique chance (0 to 1) for a typical Entry mode Tombs of Amascut raid.
    pub entry_toa_unique_chance: f64,
    pub regular_toa_unique_chance: f64,
    pub expert_toa_unique_chance: f64,
    /// Average team size at the Nightmare. Fractions allowed.
    pub avg_nightmare_team_size: f64,
    pub avg_nightmare_contribution: f64,
    pub avg_nex_contribution: f64,
    pub avg_hueycoatl_contribution: f64,
    /// Defaults to a duo with even contribution.
    pub avg_royal_titans_contribution: f64,
    pub avg_zalcano_contribution: f64,
    /// Average points per Zalcano kill.
    pub avg_zalcano_points: i64,
    pub avg_callisto_contribution: f64,
    pub avg_venenatis_contribution: f64,
    pub avg_vetion_contribution: f64,
    /// Fraction of Scurrius kills where you were MVP. 1 if you always solo.
    pub avg_scurrius_mvp_rate: f64,
    /// Effective Barrows KC wasted by killing fewer than six brothers.
    pub num_invalid_barrows_kc: i64,
    pub barrows_bolt_racks_enabled: bool,
    pub num_fire_capes_sacrificed: i64,
    pub num_infernal_capes_sacrificed: i64,
    pub num_dizanas_quivers_sacrificed: i64,
    pub num_araxxor_destroyed: i64,
    pub num_royal_titans_sacrificed: i64,
    /// Seeds bought from the Last Man Standing shop.
    pub num_crystal_weapon_seeds_purchased: i64,
    /// Lanterns bought from the Guardians of the Rift shop.
    pub num_abyssal_lanterns_purchased: i64,
    pub skotizo_kc_pre_buff: i64,
    pub kq_kc_pre_d_pick_buff: i64,
    pub kbd_kc_pre_d_pick_buff: i64,
    pub nightmare_kc_pre_buff: i64,
    pub phosanis_nightmare_kc_pre_buff: i64,
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            avg_personal_cox_points: 30_000,
            avg_personal_cox_cm_points: 45_000,
            avg_personal_tob_points: 0.25,
            avg_personal_tob_hm_points: 0.2,
            entry_toa_unique_chance: 0.0076,
            regular_toa_unique_chance: 0.0202,
            expert_toa_unique_chance: 0.0440,
            avg_nightmare_team_size: 5.0,
            avg_nightmare_contribution: 0.202,
            avg_nex_contribution: 0.204,
            avg_hueycoatl_contribution: 0.367,
            avg_royal_titans_contribution: 0.5,
            avg_zalcano_contribution: 0.25,
            avg_zalcano_points: 300,
            avg_callisto_contribution: 0.2,
            avg_venenatis_contribution: 0.5,
            avg_vetion_contribution: 0.5,
            avg_scurrius_mvp_rate: 1.0,
            num_invalid_barrows_kc: 0,
            barrows_bolt_racks_enabled: false,
            num_fire_capes_sacrificed: 0,
            num_infernal_capes_sacrificed: 0,
            num_dizanas_quivers_sacrificed: 0,
            num_araxxor_destroyed: 0,
            num_royal_titans_sacrificed: 0,
            num_crystal_weapon_seeds_purchased: 0,
            num_abyssal_lanterns_purchased: 0,
            skotizo_kc_pre_buff: 0,
            kq_kc_pre_d_pick_buff: 0,
            kbd_kc_pre_d_pick_buff: 0,
            nightmare_kc_pre_buff: 0,
            phosanis_nightmare_kc_pre_buff: 0,
        }
    }
}

impl LuckConfig {
    /// Read a setting by key.
    pub fn value(&self, key: ConfigKey) -> ConfigValue {
        use ConfigKey::*;
        use ConfigValue::{Bool, Int, Real};

        match key {
            NumInvalidBarrowsKc => Int(self.num_invalid_barrows_kc),
            BarrowsBoltRacksEnabled => Bool(self.barrows_bolt_racks_enabled),
            AvgPersonalCoxPoints => Int(self.avg_personal_cox_points),
            AvgPersonalCoxCmPoints => Int(self.avg_personal_cox_cm_points),
            AvgPersonalTobPoints => Real(self.avg_personal_tob_points),
            AvgPersonalTobHmPoints => Real(self.avg_personal_tob_hm_points),
            EntryToaUniqueChance => Real(self.entry_toa_unique_chance),
            RegularToaUniqueChance => Real(self.regular_toa_unique_chance),
            ExpertToaUniqueChance => Real(self.expert_toa_unique_chance),
            AvgNightmareTeamSize => Real(self.avg_nightmare_team_size),
            AvgNightmareContribution => Real(self.avg_nightmare_contribution),
            AvgNexContribution => Real(self.avg_nex_contribution),
            AvgHueycoatlContribution => Real(self.avg_hueycoatl_contribution),
            AvgRoyalTitansContribution => Real(self.avg_royal_titans_contribution),
            AvgZalcanoContribution => Real(self.avg_zalcano_contribution),
            AvgZalcanoPoints => Int(self.avg_zalcano_points),
            AvgCallistoContribution => Real(self.avg_callisto_contribution),
            AvgVenenatisContribution => Real(self.avg_venenatis_contribution),
            AvgVetionContribution => Real(self.avg_vetion_contribution),
            AvgScurriusMvpRate => Real(self.avg_scurrius_mvp_rate),
            NumFireCapesSacrificed => Int(self.num_fire_capes_sacrificed),
            NumInfernalCapesSacrificed => Int(self.num_infernal_capes_sacrificed),
            NumDizanasQuiversSacrificed => Int(self.num_dizanas_quivers_sacrificed),
            NumAraxxorDestroyed => Int(self.num_araxxor_destroyed),
            NumRoyalTitansSacrificed => Int(self.num_royal_titans_sacrificed),
            NumCrystalWeaponSeedsPurchased => Int(self.num_crystal_weapon_seeds_purchased),
            NumAbyssalLanternsPurchased => Int(self.num_abyssal_lanterns_purchased),
            SkotizoKcPreBuff => Int(self.skotizo_kc_pre_buff),
            KqKcPreDPickBuff => Int(self.kq_kc_pre_d_pick_buff),
            KbdKcPreDPickBuff => Int(self.kbd_kc_pre_d_pick_buff),
            NightmareKcPreBuff => Int(self.nightmare_kc_pre_buff),
            PhosanisNightmareKcPreBuff => Int(self.phosanis_nightmare_kc_pre_buff),
            Nid | Bran | TumekensGuardian | JarOfDreams | LittleNightmare => ConfigValue::None,
        }
    }

    pub fn with_cox_points(mut self, regular: i64, challenge_mode: i64) -> Self {
        self.avg_personal_cox_points = regular;
        self.avg_personal_cox_cm_points = challenge_mode;
        self
    }

    pub fn with_tob_point_fractions(mut self, regular: f64, hard_mode: f64) -> Self {
        self.avg_personal_tob_points = regular;
        self.avg_personal_tob_hm_points = hard_mode;
        self
    }

    pub fn with_invalid_barrows_kc(mut self, kc: i64) -> Self {
        self.num_invalid_barrows_kc = kc;
        self
    }

    pub fn with_bolt_racks(mut self, enabled: bool) -> Self {
        self.barrows_bolt_racks_enabled = enabled;
        self
    }

    pub fn with_nightmare(mut self, team_size: f64, contribution: f64) -> Self {
        self.avg_nightmare_team_size = team_size;
        self.avg_nightmare_contribution = contribution;
        self
    }

    pub fn with_araxxor_destroyed(mut self, n: i64) -> Self {
        self.num_araxxor_destroyed = n;
        self
    }

    pub fn with_royal_titans_sacrificed(mut self, n: i64) -> Self {
        self.num_royal_titans_sacrificed = n;
        self
    }

    pub fn with_crystal_weapon_seeds_purchased(mut self, n: i64) -> Self {
        self.num_crystal_weapon_seeds_purchased = n;
        self
    }

    pub fn with_abyssal_lanterns_purchased(mut self, n: i64) -> Self {
        self.num_abyssal_lanterns_purchased = n;
        self
    }
}
