//! Engine configuration
//!
//! Depth is the main knob: every extra ply makes the computer stronger and
//! slower. Configs can be built in code or loaded from a TOML file:
//!
//! ```toml
//! depth = 3
//! seed = 42
//! think_delay_ms = 250
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Plies searched when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search accepted; beyond this a move takes far too long
pub const MAX_DEPTH: u8 = 6;

/// Pause before the computer replies, so the human move shows first
pub const DEFAULT_THINK_DELAY_MS: u64 = 500;

/// Configuration for the computer opponent.
///
/// # Examples
///
/// ```
/// use gomoku::EngineConfig;
///
/// let config = EngineConfig::default().with_depth(3).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search plies from the computer's move
    pub depth: u8,
    /// Seed for the random fallback move; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Delay before the computer's reply in interactive play
    pub think_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_think_delay_ms(mut self, delay_ms: u64) -> Self {
        self.think_delay_ms = delay_ms;
        self
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
