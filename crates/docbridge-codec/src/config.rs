//! Resolver configuration

use serde::{Deserialize, Serialize};

fn default_max_category_hops() -> usize {
    16
}

fn default_width_cache_capacity() -> usize {
    16
}

/// Tunables of `TypeResolver`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Category substitutions (domain to base type, enum to `anyenum`, ...) allowed before
    /// resolution is abandoned as malformed catalog data
    #[serde(default = "default_max_category_hops")]
    pub max_category_hops: usize,

    /// Number of distinct widths whose synthesized fixed-length codecs are kept for reuse
    #[serde(default = "default_width_cache_capacity")]
    pub width_cache_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_category_hops: default_max_category_hops(),
            width_cache_capacity: default_width_cache_capacity(),
        }
    }
}

impl ResolverConfig {
    pub fn with_max_category_hops(mut self, hops: usize) -> Self {
        self.max_category_hops = hops;
        self
    }

    pub fn with_width_cache_capacity(mut self, capacity: usize) -> Self {
        self.width_cache_capacity = capacity;
        self
    }
}
