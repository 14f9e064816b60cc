//! Day sequence reconciliation
//!
//! Pure, synchronous transformations over a trip's ordered day sequence.
//! Every structural mutation (append, remove, reorder, merge, replace)
//! goes through this module so that derived fields stay consistent and
//! day identities are preserved.

pub mod merge;
pub mod reconciler;

pub use merge::{bulk_merge, replace_all, MergeError, MergeKey, MergeOutcome};
pub use reconciler::{
    append, placeholder_sequence, recompute, remove, reorder, ReconcileError,
};
