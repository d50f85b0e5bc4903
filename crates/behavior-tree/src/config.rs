//! Evaluation settings for a [`Tree`](crate::Tree).
use std::env;

/// Tree evaluation configuration.
#[derive(Clone, Debug)]
pub struct TreeConfig {
    /// Seed for random selectors. `None` seeds from OS entropy, so shuffles
    /// differ between processes; `Some` makes them reproducible.
    pub shuffle_seed: Option<u64>,

    /// Maximum nesting of node evaluations before the run is aborted with
    /// [`TreeError::DepthExceeded`](crate::TreeError::DepthExceeded).
    ///
    /// `None` (the default) lets recursive trees nest as deep as they need;
    /// set a limit to catch cyclic wiring that never bottoms out.
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BT_SHUFFLE_SEED` - Seed for random selectors (default: entropy)
    /// - `BT_MAX_DEPTH` - Maximum evaluation depth (default: unlimited, minimum: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("BT_SHUFFLE_SEED") {
            config.shuffle_seed = Some(seed);
        }
        if let Some(depth) = read_env::<usize>("BT_MAX_DEPTH") {
            config.max_depth = Some(depth.max(1));
        }

        config
    }

    /// Returns this configuration with a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Returns this configuration with a different depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            max_depth: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
