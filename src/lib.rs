//! # Grimoire: an in-memory spell index
//!
//! Exact lookup by two different keys plus an ordered top-K query, built
//! from three composed structures:
//!
//! 1. **[`AvlTree`]**: one self-balancing tree per category, keyed by
//!    power level
//! 2. **[`DoubleHashTable`]**: fixed-capacity open addressing over spell
//!    names, probing with two independent hashes
//! 3. **[`SpellTable`]**: category buckets, each owning the trees of the
//!    categories that hash into it
//!
//! Everything is synchronous and in-memory; "not present" is always an
//! `Option`, never an error, and records are immutable once constructed.
//!
//! ## Usage
//!
//! ```
//! use grimoire::{Spell, SpellTable};
//!
//! let mut table = SpellTable::new(10);
//! table.add_spell(Spell::new("fireball", "fire", 10, "fireball!"));
//! table.add_spell(Spell::new("flamethrower", "fire", 15, "foooooooo!"));
//!
//! let top = table.top_k("fire", 1).unwrap();
//! assert_eq!(top[0].name(), "flamethrower");
//! assert_eq!(table.search("fire", "fireball", 10).unwrap().words(), "fireball!");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - one per index structure
pub mod avl; // Per-category balanced tree
pub mod double_hash; // Double-hashed name index
pub mod spell; // Immutable value records
pub mod table; // Category-bucketed composite

// Re-exports for convenience
pub use avl::AvlTree;
pub use double_hash::DoubleHashTable;
pub use spell::{Spell, SpellSimple};
pub use table::SpellTable;

use thiserror::Error;

/// Errors surfaced by the index structures.
///
/// Misses are never errors; the only runtime failure is a double-hash
/// configuration that cannot terminate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrimoireError {
    /// The probe sequence revisited its starting slot without finding a
    /// free one: the step hash shares a nontrivial factor with the table
    /// capacity, so part of the table is unreachable for this key.
    #[error(
        "probe sequence cycled after {steps} probes without reaching a free slot \
         (capacity {capacity})"
    )]
    ProbeCycle {
        /// Probes attempted before giving up (equals the capacity).
        steps: usize,
        /// Capacity of the misconfigured table.
        capacity: usize,
    },
}
