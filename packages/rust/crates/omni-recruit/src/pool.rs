//! Tag pools and the merge algebra.
//!
//! A [`TagPool`] is "the operators compatible with these tags". [`merge`]
//! combines two pools by unioning labels, intersecting operators and
//! narrowing the level interval. It is associative and commutative, so any
//! fold order over a set of single-tag pools gives the same pool.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::operator::OperatorRecord;

/// Closed level interval `[floor, ceiling]`.
///
/// May be inverted (`floor > ceiling`) after narrowing, meaning no level
/// satisfies every constituent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LevelRange {
    /// Lower bound, inclusive
    pub floor: i32,
    /// Upper bound, inclusive
    pub ceiling: i32,
}

impl LevelRange {
    /// Create an interval. Inverted bounds are accepted as-is.
    #[must_use]
    pub const fn new(floor: i32, ceiling: i32) -> Self {
        Self { floor, ceiling }
    }

    /// Intersection: highest floor, lowest ceiling.
    #[must_use]
    pub fn narrow(self, other: Self) -> Self {
        Self {
            floor: self.floor.max(other.floor),
            ceiling: self.ceiling.min(other.ceiling),
        }
    }

    /// Whether `floor > ceiling`.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.floor > self.ceiling
    }

    /// Whether `level` lies inside the interval.
    #[must_use]
    pub fn contains(self, level: u32) -> bool {
        i64::from(self.floor) <= i64::from(level) && i64::from(level) <= i64::from(self.ceiling)
    }
}

/// Mean operator level of a pool.
///
/// An empty pool has no average; it is never reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum AverageLevel {
    /// Mean over a non-empty operator set
    Defined(f64),
    /// Operator set is empty
    Undefined,
}

impl AverageLevel {
    #[allow(clippy::cast_precision_loss)]
    fn of<'a>(operators: impl ExactSizeIterator<Item = &'a OperatorRecord>) -> Self {
        let count = operators.len();
        if count == 0 {
            return Self::Undefined;
        }
        let sum: u64 = operators.map(|op| u64::from(op.level)).sum();
        Self::Defined(sum as f64 / count as f64)
    }

    /// The numeric mean, if defined.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// Whether a mean exists.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

/// Operators certified for a set of tag labels, plus summary statistics.
///
/// Fields are private so that `average_level` always matches `operators`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPool {
    tag_labels: Vec<String>,
    operators: BTreeSet<OperatorRecord>,
    level_range: LevelRange,
    average_level: AverageLevel,
}

impl TagPool {
    /// Pool certifying exactly one label.
    #[must_use]
    pub fn single<I>(label: impl Into<String>, operators: I, level_range: LevelRange) -> Self
    where
        I: IntoIterator<Item = OperatorRecord>,
    {
        Self::new([label.into()], operators, level_range)
    }

    /// Pool from arbitrary labels; labels are sorted and deduplicated,
    /// operators deduplicated by name.
    #[must_use]
    pub fn new<L, I>(labels: L, operators: I, level_range: LevelRange) -> Self
    where
        L: IntoIterator<Item = String>,
        I: IntoIterator<Item = OperatorRecord>,
    {
        let tag_labels: BTreeSet<String> = labels.into_iter().collect();
        Self::from_parts(
            tag_labels.into_iter().collect(),
            operators.into_iter().collect(),
            level_range,
        )
    }

    fn from_parts(
        tag_labels: Vec<String>,
        operators: BTreeSet<OperatorRecord>,
        level_range: LevelRange,
    ) -> Self {
        let average_level = AverageLevel::of(operators.iter());
        Self {
            tag_labels,
            operators,
            level_range,
            average_level,
        }
    }

    /// Sorted, duplicate-free tag labels.
    #[must_use]
    pub fn tag_labels(&self) -> &[String] {
        &self.tag_labels
    }

    /// Operators satisfying every label, ordered by name.
    #[must_use]
    pub const fn operators(&self) -> &BTreeSet<OperatorRecord> {
        &self.operators
    }

    /// Operator names in name order.
    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.name.as_str())
    }

    /// Level interval.
    #[must_use]
    pub const fn level_range(&self) -> LevelRange {
        self.level_range
    }

    /// Lower level bound.
    #[must_use]
    pub const fn level_floor(&self) -> i32 {
        self.level_range.floor
    }

    /// Upper level bound.
    #[must_use]
    pub const fn level_ceiling(&self) -> i32 {
        self.level_range.ceiling
    }

    /// Mean operator level.
    #[must_use]
    pub const fn average_level(&self) -> AverageLevel {
        self.average_level
    }

    /// Lowest operator level, `None` for an empty pool.
    #[must_use]
    pub fn min_operator_level(&self) -> Option<u32> {
        self.operators.iter().map(|op| op.level).min()
    }

    /// Highest operator level, `None` for an empty pool.
    #[must_use]
    pub fn max_operator_level(&self) -> Option<u32> {
        self.operators.iter().map(|op| op.level).max()
    }

    /// No operator satisfies every label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Level constraints of the constituent tags cannot all hold.
    #[must_use]
    pub const fn has_inverted_interval(&self) -> bool {
        self.level_range.is_inverted()
    }

    /// Whether `name` is in the pool.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operators.iter().any(|op| op.name == name)
    }

    /// Operators not flagged as hidden.
    pub fn visible_operators(&self) -> impl Iterator<Item = &OperatorRecord> {
        self.operators.iter().filter(|op| !op.hidden)
    }
}

/// Combine two pools.
///
/// Labels are unioned (sorted), operators intersected by name, and the level
/// interval narrowed to `[max floor, min ceiling]`. The average is recomputed
/// and is [`AverageLevel::Undefined`] when the intersection is empty.
#[must_use]
pub fn merge(a: &TagPool, b: &TagPool) -> TagPool {
    let labels: BTreeSet<&String> = a.tag_labels.iter().chain(&b.tag_labels).collect();
    let operators: BTreeSet<OperatorRecord> =
        a.operators.intersection(&b.operators).cloned().collect();

    TagPool::from_parts(
        labels.into_iter().cloned().collect(),
        operators,
        a.level_range.narrow(b.level_range),
    )
}

/// Fold [`merge`] over `pools`. Returns `None` for an empty sequence; a
/// single pool is returned unchanged.
#[must_use]
pub fn merge_all<'a, I>(pools: I) -> Option<TagPool>
where
    I: IntoIterator<Item = &'a TagPool>,
{
    let mut iter = pools.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, pool| merge(&acc, pool)))
}
