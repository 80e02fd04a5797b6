//! omni-recruit - Recruitment tag-combination engine
//!
//! Given a catalog of operators and a selection of up to five recruitment
//! tags, computes the operator pool for every non-empty subset of the
//! selection.
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-recruit/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # RecruitError (thiserror)
//! ├── config.rs   # RecruitConfig, MAX_SELECTED_TAGS
//! ├── operator.rs # OperatorRecord
//! ├── catalog.rs  # OperatorCatalog (validation, JSON ingestion)
//! ├── index.rs    # TagIndex (single-tag pools)
//! ├── pool.rs     # TagPool, LevelRange, AverageLevel, merge
//! └── combo.rs    # ComboEnumerator (subset folding with rayon)
//! ```
//!
//! # Example
//!
//! ```rust
//! use omni_recruit::{ComboEnumerator, OperatorCatalog, OperatorRecord, RecruitConfig, TagIndex};
//!
//! let catalog = OperatorCatalog::new([
//!     OperatorRecord::new("O1", "Guard", 3, ["Melee", "Defense"]),
//!     OperatorRecord::new("O2", "Medic", 5, ["Melee", "Support"]),
//! ])?;
//! let index = TagIndex::with_config(&catalog, &RecruitConfig::default());
//! let combos = ComboEnumerator::new(index).enumerate(["Melee", "Defense"])?;
//!
//! assert_eq!(combos.len(), 3);
//! # Ok::<(), omni_recruit::RecruitError>(())
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod catalog;
mod combo;
mod config;
mod error;
mod index;
mod operator;
mod pool;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use catalog::OperatorCatalog;
pub use combo::{ComboEnumerator, ComboResult, enumerate};
pub use config::{MAX_SELECTED_TAGS, RecruitConfig};
pub use error::{RecruitError, RecruitResult};
pub use index::TagIndex;
pub use operator::OperatorRecord;
pub use pool::{AverageLevel, LevelRange, TagPool, merge, merge_all};
