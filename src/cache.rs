//! Memoized luck results.
//!
//! The key holds every input a result depends on, so the cache never needs
//! invalidating when a count or quantity changes: the new inputs are simply a
//! new key. [`LuckCache::clear`] drops everything at session boundaries.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::ledger::LogItem;
use crate::model::UNACCOUNTED_TRIALS;

/// Above this, a luck or dryness is more likely a modelling error than real.
const SUSPICIOUS_PROBABILITY: f64 = 0.999_999_99;

/// Everything a luck result depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    subject: String,
    item: String,
    item_id: u32,
    quantity: u32,
    trials: String,
    options: String,
}

impl Fingerprint {
    /// `trials` is the model's trial description, `options` its options
    /// description for the configuration in use. The item is keyed by name as
    /// well as id, since items missing from a log have no id.
    pub fn new(subject: &str, item: &LogItem, trials: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            subject: subject.to_owned(),
            item: item.name.trim().to_lowercase(),
            item_id: item.id,
            quantity: item.quantity,
            trials: trials.into(),
            options: options.into(),
        }
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}|{}|{}", self.subject, self.item, self.item_id, self.quantity, self.trials)?;
        if !self.options.is_empty() {
            write!(f, "|{}", self.options)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckStatus {
    Valid,
    /// Luck or dryness is so close to 1 that the inputs are probably wrong.
    Suspicious,
    /// More drops than trials.
    Unaccounted,
}

/// Luck and dryness for one fingerprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckResult {
    luck: f64,
    dryness: f64,
}

impl LuckResult {
    pub fn new(luck: f64, dryness: f64) -> Self {
        Self { luck, dryness }
    }

    pub fn luck(&self) -> f64 {
        self.luck
    }

    pub fn dryness(&self) -> f64 {
        self.dryness
    }

    pub fn status(&self) -> LuckStatus {
        let in_range = |x: f64| (0.0..=1.0).contains(&x);
        if !in_range(self.luck) || !in_range(self.dryness) {
            LuckStatus::Unaccounted
        } else if self.luck > SUSPICIOUS_PROBABILITY || self.dryness > SUSPICIOUS_PROBABILITY {
            LuckStatus::Suspicious
        } else {
            LuckStatus::Valid
        }
    }

    /// Mid-rank percentile: players with fewer drops, plus half of those tied.
    /// [`UNACCOUNTED_TRIALS`] when the result is not a probability.
    pub fn overall_luck(&self) -> f64 {
        if self.status() == LuckStatus::Unaccounted {
            return UNACCOUNTED_TRIALS;
        }
        (self.luck + 1.0 - self.dryness) / 2.0
    }
}

/// Thread-safe map from fingerprint to result.
///
/// Two threads missing on the same key both compute; the results are identical
/// and the first one stored wins.
#[derive(Debug, Default)]
pub struct LuckCache {
    results: RwLock<HashMap<Fingerprint, Arc<LuckResult>>>,
}

impl LuckCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &Fingerprint) -> Option<Arc<LuckResult>> {
        let results = self.results.read().unwrap_or_else(PoisonError::into_inner);
        results.get(key).cloned()
    }

    /// Cached result for `key`, calling `compute` only on a miss.
    pub fn get_or_compute(&self, key: Fingerprint, compute: impl FnOnce() -> LuckResult) -> Arc<LuckResult> {
        if let Some(hit) = self.get(&key) {
            debug!(%key, "luck cache hit");
            return hit;
        }
        debug!(%key, "luck cache miss");
        let result = Arc::new(compute());
        let mut results = self.results.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(results.entry(key).or_insert(result))
    }

    pub fn len(&self) -> usize {
        self.results.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut results = self.results.write().unwrap_or_else(PoisonError::into_inner);
        debug!(entries = results.len(), "clearing luck cache");
        results.clear();
    }
}
