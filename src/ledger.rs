//! What the player has done and what they have received.

use std::collections::HashMap;

/// Read-only view of a player's counters and items.
///
/// Both lookups ignore case. A missing counter is not an error; models treat it
/// as zero trials.
pub trait TrialLedger {
    /// Whose log this is. Part of every cache key.
    fn subject(&self) -> &str;

    /// The count for a named trial source, if the log shows one.
    fn count(&self, source: &str) -> Option<u32>;

    /// A collection log item by name.
    fn item(&self, name: &str) -> Option<&LogItem>;
}

/// An item slot in the collection log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Independent of quantity: some items unlock the slot without being counted.
    pub obtained: bool,
}

impl LogItem {
    /// An item with `quantity` received, marked obtained when non-zero.
    pub fn new(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            obtained: quantity > 0,
        }
    }

    pub fn with_obtained(mut self, obtained: bool) -> Self {
        self.obtained = obtained;
        self
    }
}

/// In-memory ledger.
///
/// A counter or item can show up on several log pages; the highest value seen
/// wins.
#[derive(Debug, Clone, Default)]
pub struct CollectionLog {
    subject: String,
    kill_counts: HashMap<String, (String, u32)>,
    items: HashMap<String, LogItem>,
}

impl CollectionLog {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_kill_count(mut self, source: &str, count: u32) -> Self {
        self.record_kill_count(source, count);
        self
    }

    pub fn with_item(mut self, item: LogItem) -> Self {
        self.record_item(item);
        self
    }

    pub fn record_kill_count(&mut self, source: &str, count: u32) {
        let key = fold(source);
        match self.kill_counts.get_mut(&key) {
            Some((_, existing)) if *existing >= count => {}
            Some(entry) => entry.1 = count,
            None => {
                self.kill_counts.insert(key, (source.trim().to_owned(), count));
            }
        }
    }

    pub fn record_item(&mut self, item: LogItem) {
        let key = fold(&item.name);
        match self.items.get(&key) {
            Some(existing) if existing.quantity >= item.quantity => {}
            _ => {
                self.items.insert(key, item);
            }
        }
    }

    /// Counters as `(name as first recorded, count)`.
    pub fn kill_counts(&self) -> impl Iterator<Item = (&str, u32)> {
        self.kill_counts.values().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn items(&self) -> impl Iterator<Item = &LogItem> {
        self.items.values()
    }
}

impl TrialLedger for CollectionLog {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn count(&self, source: &str) -> Option<u32> {
        self.kill_counts.get(&fold(source)).map(|(_, count)| *count)
    }

    fn item(&self, name: &str) -> Option<&LogItem> {
        self.items.get(&fold(name))
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
