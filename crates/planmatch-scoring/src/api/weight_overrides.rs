// Runtime rule weight configuration.
//
// Allows adjusting rule weights without recompiling.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use planmatch_config::MatcherConfig;
use planmatch_core::{MatchScore, WeightKey};

// Holds runtime overrides for rule weights.
//
// Keys that are not overridden fall back to `WeightKey::default_weight`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WeightOverrides {
    weights: HashMap<WeightKey, MatchScore>,
}

impl Debug for WeightOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightOverrides")
            .field("count", &self.weights.len())
            .finish()
    }
}

impl WeightOverrides {
    // Creates an empty overrides container.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    // Creates overrides from an iterator of (key, weight) pairs.
    pub fn from_pairs<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (WeightKey, MatchScore)>,
    {
        Self {
            weights: iter.into_iter().collect(),
        }
    }

    // Collects the `[weights]` table of a validated config.
    //
    // Names `MatcherConfig::validate` would reject are skipped.
    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::from_pairs(config.weights.iter().filter_map(|(name, weight)| {
            WeightKey::from_name(name).map(|key| (key, MatchScore::of(*weight)))
        }))
    }

    // Sets the weight for a key.
    pub fn put(&mut self, key: WeightKey, weight: MatchScore) {
        self.weights.insert(key, weight);
    }

    // Removes the override for a key.
    pub fn remove(&mut self, key: WeightKey) -> Option<MatchScore> {
        self.weights.remove(&key)
    }

    // Gets the overridden weight, or the stock weight if not overridden.
    pub fn get_or_default(&self, key: WeightKey) -> MatchScore {
        self.weights
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_weight())
    }

    // Gets the overridden weight if present.
    pub fn get(&self, key: WeightKey) -> Option<MatchScore> {
        self.weights.get(&key).copied()
    }

    // Returns true if this key has an override.
    pub fn contains(&self, key: WeightKey) -> bool {
        self.weights.contains_key(&key)
    }

    // Returns the number of overrides.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    // Returns true if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    // Clears all overrides.
    pub fn clear(&mut self) {
        self.weights.clear();
    }

    // Creates an Arc-wrapped version for sharing across threads.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

// Source of rule weights.
pub trait WeightProvider: Send + Sync {
    // Gets the weight for a key, if this provider sets one.
    fn weight(&self, key: WeightKey) -> Option<MatchScore>;

    // Gets the weight or returns the stock weight.
    fn weight_or_default(&self, key: WeightKey) -> MatchScore {
        self.weight(key).unwrap_or_else(|| key.default_weight())
    }
}

impl WeightProvider for WeightOverrides {
    fn weight(&self, key: WeightKey) -> Option<MatchScore> {
        self.get(key)
    }
}

impl WeightProvider for Arc<WeightOverrides> {
    fn weight(&self, key: WeightKey) -> Option<MatchScore> {
        self.get(key)
    }
}
