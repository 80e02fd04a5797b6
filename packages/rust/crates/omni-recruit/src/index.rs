//! Per-tag operator pools.

use std::collections::BTreeMap;

use crate::catalog::OperatorCatalog;
use crate::config::RecruitConfig;
use crate::pool::{LevelRange, TagPool};

/// Builds single-tag pools over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct TagIndex<'a> {
    catalog: &'a OperatorCatalog,
    default_range: LevelRange,
}

impl<'a> TagIndex<'a> {
    /// Index with an explicit default level interval.
    #[must_use]
    pub const fn new(catalog: &'a OperatorCatalog, default_range: LevelRange) -> Self {
        Self {
            catalog,
            default_range,
        }
    }

    /// Index using the configured default interval.
    #[must_use]
    pub const fn with_config(catalog: &'a OperatorCatalog, config: &RecruitConfig) -> Self {
        Self::new(catalog, config.level_range())
    }

    /// The catalog this index reads from.
    #[must_use]
    pub const fn catalog(&self) -> &'a OperatorCatalog {
        self.catalog
    }

    /// Interval given to every single-tag pool.
    #[must_use]
    pub const fn default_range(&self) -> LevelRange {
        self.default_range
    }

    /// Pool of every operator carrying `label`.
    ///
    /// A label unknown to the catalog gives an empty pool.
    #[must_use]
    pub fn pool_for(&self, label: &str) -> TagPool {
        let operators = self
            .catalog
            .operators()
            .filter(|op| op.has_tag(label))
            .cloned();
        TagPool::single(label, operators, self.default_range)
    }

    /// Single-tag pools keyed by label.
    #[must_use]
    pub fn pools_for<I, S>(&self, labels: I) -> BTreeMap<String, TagPool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| {
                let label = label.as_ref();
                (label.to_string(), self.pool_for(label))
            })
            .collect()
    }
}
