//! Immutable operator catalog.
//!
//! Built once from records supplied by a loader; validation rejects
//! tagless records and names bound to conflicting records.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::{RecruitError, RecruitResult};
use crate::operator::OperatorRecord;

/// Catalog document shape accepted by [`OperatorCatalog::from_json_str`].
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    operators: Vec<OperatorRecord>,
}

/// Every recruitable operator, plus the tag and archetype vocabularies.
#[derive(Debug, Clone, Default)]
pub struct OperatorCatalog {
    operators: BTreeMap<String, OperatorRecord>,
    tags: BTreeSet<String>,
    archetypes: BTreeSet<String>,
}

impl OperatorCatalog {
    /// Build and validate a catalog.
    ///
    /// Records that repeat an earlier record exactly are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::MalformedCatalog`] when a record has no tags,
    /// or when two records share a name but differ in any other field.
    pub fn new<I>(records: I) -> RecruitResult<Self>
    where
        I: IntoIterator<Item = OperatorRecord>,
    {
        let mut catalog = Self::default();

        for record in records {
            if record.tags.is_empty() {
                return Err(RecruitError::MalformedCatalog(format!(
                    "operator '{}' has no tags",
                    record.name
                )));
            }

            match catalog.operators.entry(record.name.clone()) {
                Entry::Occupied(existing) => {
                    if !existing.get().same_fields(&record) {
                        return Err(RecruitError::MalformedCatalog(format!(
                            "operator '{}' is defined twice with different fields",
                            record.name
                        )));
                    }
                    log::warn!("Collapsing duplicate catalog entry for '{}'", record.name);
                }
                Entry::Vacant(slot) => {
                    catalog.tags.extend(record.tags.iter().cloned());
                    catalog.archetypes.insert(record.archetype.clone());
                    slot.insert(record);
                }
            }
        }

        log::info!(
            "Loaded recruit catalog: {} operators, {} tags, {} archetypes",
            catalog.operators.len(),
            catalog.tags.len(),
            catalog.archetypes.len()
        );

        Ok(catalog)
    }

    /// Parse a `{ "operators": [...] }` JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::Parse`] for invalid JSON or missing fields,
    /// and the errors of [`OperatorCatalog::new`].
    pub fn from_json_str(content: &str) -> RecruitResult<Self> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Self::new(document.operators)
    }

    /// All records, ordered by name.
    pub fn operators(&self) -> impl ExactSizeIterator<Item = &OperatorRecord> {
        self.operators.values()
    }

    /// Distinct tag labels.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Distinct archetype labels.
    #[must_use]
    pub const fn archetypes(&self) -> &BTreeSet<String> {
        &self.archetypes
    }

    /// Look up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OperatorRecord> {
        self.operators.get(name)
    }

    /// Number of distinct operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the catalog has no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
