//! Query configuration.
//!
//! Only the default level interval handed to every single-tag pool lives
//! here; the tag-count limit is fixed by the recruitment screen.

use serde::{Deserialize, Serialize};

use crate::error::{RecruitError, RecruitResult};
use crate::pool::LevelRange;

/// Maximum number of tags that can be selected at once.
pub const MAX_SELECTED_TAGS: usize = 5;

/// Configuration for building tag pools.
///
/// ```toml
/// level_floor = 3
/// level_ceiling = 6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitConfig {
    /// Lowest level a single-tag pool admits
    pub level_floor: i32,
    /// Highest level a single-tag pool admits
    pub level_ceiling: i32,
}

impl Default for RecruitConfig {
    fn default() -> Self {
        Self {
            level_floor: 1,
            level_ceiling: 6,
        }
    }
}

impl RecruitConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::Config`] for malformed TOML and
    /// [`RecruitError::InvalidConfig`] for an inverted default interval.
    pub fn from_toml_str(content: &str) -> RecruitResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a default interval with `level_floor > level_ceiling`.
    ///
    /// Folded pools may legitimately end up inverted, but the starting
    /// interval must not.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::InvalidConfig`] when the interval is inverted.
    pub fn validate(&self) -> RecruitResult<()> {
        if self.level_floor > self.level_ceiling {
            return Err(RecruitError::InvalidConfig(format!(
                "level_floor {} is above level_ceiling {}",
                self.level_floor, self.level_ceiling
            )));
        }
        Ok(())
    }

    /// Default interval as a [`LevelRange`].
    #[must_use]
    pub const fn level_range(&self) -> LevelRange {
        LevelRange::new(self.level_floor, self.level_ceiling)
    }
}
