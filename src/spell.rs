//! Immutable spell records
//!
//! Two value types shared by the index structures:
//! - [`Spell`]: full record, ordered by power level inside its category
//! - [`SpellSimple`]: name/words pair for the double-hashed name index
//!
//! Records are never mutated after construction; the index structures hand
//! out `&` borrows, so one record may back any number of query results.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full spell record.
///
/// `power_level` is the ordering key within the spell's category tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spell {
    name: String,
    category: String,
    power_level: i32,
    words: String,
}

impl Spell {
    /// Create a spell record. `name` must be non-empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        power_level: i32,
        words: impl Into<String>,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "spell name must be non-empty");
        Self {
            name,
            category: category.into(),
            power_level,
            words: words.into(),
        }
    }

    /// Name of the spell.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category the spell belongs to.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Power level, the per-category ordering key.
    #[inline]
    pub fn power_level(&self) -> i32 {
        self.power_level
    }

    /// Incantation used to cast the spell.
    #[inline]
    pub fn words(&self) -> &str {
        &self.words
    }
}

impl fmt::Display for Spell {
    /// Renders the stable summary line:
    /// `<name> (<category>) - Power Level: <powerLevel>, to cast say: <words>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Power Level: {}, to cast say: {}",
            self.name, self.category, self.power_level, self.words
        )
    }
}

/// A reduced spell record holding only the name and the casting words.
///
/// Independent of [`Spell`]; stored exclusively in
/// [`DoubleHashTable`](crate::DoubleHashTable) slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpellSimple {
    name: String,
    words: String,
}

impl SpellSimple {
    /// Create a name/words record.
    pub fn new(name: impl Into<String>, words: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: words.into(),
        }
    }

    /// Name of the spell.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Incantation used to cast the spell.
    #[inline]
    pub fn words(&self) -> &str {
        &self.words
    }
}
