use crate::error::{ChainMapError, Result};

/// Number of buckets a map starts with when no capacity is given
pub const DEFAULT_INITIAL_CAPACITY: usize = 5;

/// Ratio of entries to buckets above which the table grows
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`ChainedHashMap`](crate::ChainedHashMap)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    initial_capacity: usize,
    load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets the table starts with
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the maximum `len / capacity` ratio tolerated after an insertion
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Checks that the configuration describes a usable table
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ChainMapError::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(ChainMapError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
