//! Operator records as loaded from the recruitment catalog.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One recruitable operator.
///
/// Identity is the `name`: equality, hashing and ordering only look at it, so
/// set algebra over operators deduplicates by name. The catalog guarantees
/// that two records with the same name are field-for-field identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Unique display identifier
    pub name: String,
    /// Secondary (localized) display name
    #[serde(rename = "name_en", default)]
    pub name_localized: String,
    /// Class / role label
    #[serde(rename = "type")]
    pub archetype: String,
    /// Rarity level
    pub level: u32,
    /// Informational only, never used for matching
    #[serde(rename = "sex", default)]
    pub gender: String,
    /// Recruitment tags carried by this operator
    pub tags: BTreeSet<String>,
    /// Excluded from normal display; matching ignores it
    #[serde(default)]
    pub hidden: bool,
}

impl OperatorRecord {
    /// Create a visible record with empty informational fields.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, archetype: impl Into<String>, level: u32, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            name_localized: String::new(),
            archetype: archetype.into(),
            level,
            gender: String::new(),
            tags: tags.into_iter().map(Into::into).collect(),
            hidden: false,
        }
    }

    /// Set the localized name.
    #[must_use]
    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.name_localized = name.into();
        self
    }

    /// Set the gender label.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Mark the record as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Whether this operator carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Field-for-field comparison, unlike `==` which only compares names.
    #[must_use]
    pub fn same_fields(&self, other: &Self) -> bool {
        self.name == other.name
            && self.name_localized == other.name_localized
            && self.archetype == other.archetype
            && self.level == other.level
            && self.gender == other.gender
            && self.tags == other.tags
            && self.hidden == other.hidden
    }
}

impl PartialEq for OperatorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for OperatorRecord {}

impl Hash for OperatorRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for OperatorRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperatorRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
