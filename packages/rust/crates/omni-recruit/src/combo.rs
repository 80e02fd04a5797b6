//! Subset enumeration over a tag selection.
//!
//! Every non-empty subset of the selection gets its own pool, folded from
//! the single-tag pools of its members. Folds are independent and run on
//! the rayon pool.

use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::MAX_SELECTED_TAGS;
use crate::error::{RecruitError, RecruitResult};
use crate::index::TagIndex;
use crate::operator::OperatorRecord;
use crate::pool::{TagPool, merge_all};

/// One subset of the selection and its pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboResult {
    /// Subset members, sorted
    pub tags: Vec<String>,
    /// Operators satisfying every member
    pub pool: TagPool,
}

impl ComboResult {
    /// At least one operator matches and the level interval is not inverted.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        !self.pool.is_empty() && !self.pool.has_inverted_interval()
    }

    /// Matching operators not flagged as hidden.
    pub fn visible_operators(&self) -> impl Iterator<Item = &OperatorRecord> {
        self.pool.visible_operators()
    }
}

/// Enumerates tag subsets against a [`TagIndex`].
#[derive(Debug, Clone, Copy)]
pub struct ComboEnumerator<'a> {
    index: TagIndex<'a>,
}

impl<'a> ComboEnumerator<'a> {
    /// Enumerator over `index`.
    #[must_use]
    pub const fn new(index: TagIndex<'a>) -> Self {
        Self { index }
    }

    /// Pool for every non-empty subset of `selected`.
    ///
    /// Duplicate labels in `selected` count once. Returns `2^n - 1` results
    /// for `n` distinct labels, ordered by subset bitmask over the sorted
    /// selection (bit `i` set means the `i`-th label is a member). The order
    /// carries no ranking.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::EmptySelection`] when nothing is selected and
    /// [`RecruitError::TooManyTags`] when more than [`MAX_SELECTED_TAGS`]
    /// distinct labels are selected.
    pub fn enumerate<I, S>(&self, selected: I) -> RecruitResult<Vec<ComboResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selection: BTreeSet<String> = selected
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();

        if selection.is_empty() {
            return Err(RecruitError::EmptySelection);
        }
        if selection.len() > MAX_SELECTED_TAGS {
            return Err(RecruitError::TooManyTags {
                selected: selection.len(),
                limit: MAX_SELECTED_TAGS,
            });
        }

        // BTreeMap values come back in label order, matching `selection`.
        let singles: Vec<TagPool> = self.index.pools_for(&selection).into_values().collect();
        let subset_count = (1_u32 << singles.len()) - 1;

        log::debug!(
            "Enumerating {subset_count} tag combinations for {:?}",
            selection
        );

        let results = (1..=subset_count)
            .into_par_iter()
            .filter_map(|mask| {
                let members = singles
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, pool)| pool);
                merge_all(members).map(|pool| ComboResult {
                    tags: pool.tag_labels().to_vec(),
                    pool,
                })
            })
            .collect();

        Ok(results)
    }
}

/// Shorthand for [`ComboEnumerator::enumerate`].
///
/// # Errors
///
/// See [`ComboEnumerator::enumerate`].
pub fn enumerate<I, S>(selected: I, index: &TagIndex<'_>) -> RecruitResult<Vec<ComboResult>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ComboEnumerator::new(*index).enumerate(selected)
}
