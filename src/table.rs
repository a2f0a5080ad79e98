//! Category-bucketed spell table
//!
//! The top-level index: a fixed number of buckets, each holding a short
//! list of per-category [`AvlTree`]s. The category hash is a plain sum of
//! char codes, so distinct categories are expected to collide; a bucket
//! resolves them by linear scan, never by rehashing. At most one tree per
//! category exists across the whole table.

use tracing::debug;

use crate::avl::AvlTree;
use crate::spell::Spell;

/// Hash table from category to its [`AvlTree`], with per-bucket collision
/// lists.
#[derive(Debug)]
pub struct SpellTable {
    /// An empty list stands for a bucket no category has hashed to yet.
    buckets: Vec<Vec<AvlTree>>,
    num_spells: usize,
}

impl SpellTable {
    /// Create a table with `bucket_count` buckets; trees are allocated
    /// lazily on the first insert per category.
    ///
    /// # Panics
    ///
    /// Panics when `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            num_spells: 0,
        }
    }

    /// Additive category hash: sum of char codes mod bucket count.
    fn bucket_of(&self, category: &str) -> usize {
        let sum: u64 = category.chars().map(|c| u64::from(c as u32)).sum();
        (sum % self.buckets.len() as u64) as usize
    }

    /// Tree holding `category`, if one exists.
    fn tree_for(&self, category: &str) -> Option<&AvlTree> {
        self.buckets[self.bucket_of(category)]
            .iter()
            .find(|tree| tree.category() == category)
    }

    /// Add a spell, routing it to its category's tree (created on first
    /// use).
    ///
    /// The running total counts every call, including inserts the tree
    /// absorbs as duplicate power levels.
    pub fn add_spell(&mut self, spell: Spell) {
        let index = self.bucket_of(spell.category());
        let bucket = &mut self.buckets[index];

        match bucket
            .iter_mut()
            .find(|tree| tree.category() == spell.category())
        {
            Some(tree) => tree.insert(spell),
            None => {
                debug!(category = spell.category(), bucket = index, "new category tree");
                bucket.push(AvlTree::new(spell));
            }
        }
        self.num_spells += 1;
    }

    /// Exact lookup by category, name, and power level.
    pub fn search(&self, category: &str, name: &str, power_level: i32) -> Option<&Spell> {
        self.tree_for(category)?.search(name, power_level)
    }

    /// Total number of `add_spell` calls across all categories.
    #[inline]
    pub fn total_spells(&self) -> usize {
        self.num_spells
    }

    /// Number of spells stored under `category`; 0 when the category is
    /// unknown.
    pub fn spells_in_category(&self, category: &str) -> usize {
        self.tree_for(category).map_or(0, AvlTree::size)
    }

    /// The `min(k, size)` highest-powered spells of `category` in
    /// descending order, or `None` when the category is unknown.
    pub fn top_k(&self, category: &str, k: usize) -> Option<Vec<&Spell>> {
        self.tree_for(category).map(|tree| tree.top_k(k))
    }
}
