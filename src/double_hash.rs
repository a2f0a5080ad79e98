//! Double-hashed name index
//!
//! Fixed-capacity open addressing over [`SpellSimple`] records. Two
//! independent char-code hashes combine into the probe sequence
//! `index(step) = (h1 + step * h2) mod capacity`; slots fill monotonically
//! (there is no delete, so an empty slot proves a name absent).
//!
//! The table keeps a diagnostic step counter that records how far the most
//! recent put or lookup had to probe.

use tracing::trace;

use crate::spell::SpellSimple;
use crate::GrimoireError;

/// Open-addressing hash table keyed by spell name, probing with double
/// hashing.
#[derive(Debug)]
pub struct DoubleHashTable {
    slots: Vec<Option<SpellSimple>>,
    size: usize,
    steps: usize,
}

impl DoubleHashTable {
    /// Create an empty table with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics when `capacity <= 2`; the step hash is taken modulo
    /// `capacity - 2`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 2, "capacity must exceed 2 for the step hash");
        Self {
            slots: vec![None; capacity],
            size: 0,
            steps: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the table holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Probe count of the most recent `put` or `cast_words`, not
    /// cumulative.
    #[inline]
    pub fn last_steps(&self) -> usize {
        self.steps
    }

    /// Insert a record at the first free slot along its probe sequence.
    ///
    /// Returns `Ok(false)` without touching the table when it is already
    /// full. Duplicate names are not detected; inserting the same name
    /// twice stores two records, and lookups find whichever the probe
    /// sequence reaches first.
    ///
    /// When the step hash shares a factor with the capacity the probe
    /// sequence can cycle over a strict subset of the slots; rather than
    /// spin, the probe count is capped at the capacity and the condition
    /// is reported as [`GrimoireError::ProbeCycle`].
    pub fn put(&mut self, spell: SpellSimple) -> Result<bool, GrimoireError> {
        if self.size >= self.capacity() {
            return Ok(false);
        }

        self.steps = 0;
        let h1 = hash_slot(spell.name(), self.capacity());
        let h2 = hash_step(spell.name(), self.capacity());

        let mut index = h1;
        while self.slots[index].is_some() {
            self.steps += 1;
            if self.steps >= self.capacity() {
                return Err(GrimoireError::ProbeCycle {
                    steps: self.steps,
                    capacity: self.capacity(),
                });
            }
            index = (h1 + self.steps * h2) % self.capacity();
        }

        trace!(name = spell.name(), index, steps = self.steps, "placed record");
        self.slots[index] = Some(spell);
        self.size += 1;
        Ok(true)
    }

    /// Look up the casting words for `name`.
    ///
    /// Probes the same sequence as `put`, giving up once the step count
    /// exceeds the number of occupied slots or an empty slot is reached.
    pub fn cast_words(&mut self, name: &str) -> Option<&str> {
        self.steps = 0;
        if self.size == 0 {
            return None;
        }

        let h1 = hash_slot(name, self.capacity());
        let h2 = hash_step(name, self.capacity());

        let mut index = h1;
        let found = loop {
            let matches = match &self.slots[index] {
                Some(occupant) => occupant.name() == name,
                // Slots are never cleared, so the record cannot be further
                // along the sequence.
                None => return None,
            };
            if matches {
                break index;
            }
            self.steps += 1;
            index = (h1 + self.steps * h2) % self.capacity();
            if self.steps > self.size {
                return None;
            }
        };

        trace!(name, index = found, steps = self.steps, "found record");
        self.slots[found].as_ref().map(SpellSimple::words)
    }
}

/// Primary hash: slot of step 0. `h1 = (Σ 31·code) mod capacity`.
fn hash_slot(name: &str, capacity: usize) -> usize {
    let sum: u64 = name.chars().map(|c| 31 * u64::from(c as u32)).sum();
    (sum % capacity as u64) as usize
}

/// Step hash: probe stride, never zero.
/// `h2 = 1 + (Σ 13·code) mod (capacity − 2)`.
fn hash_step(name: &str, capacity: usize) -> usize {
    let sum: u64 = name.chars().map(|c| 13 * u64::from(c as u32)).sum();
    1 + (sum % (capacity as u64 - 2)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_places_and_lookup_returns_words() {
        let mut table = DoubleHashTable::new(7);
        assert!(table
            .put(SpellSimple::new("Abracadabra", "Avada Kedavra"))
            .unwrap());
        assert!(table
            .put(SpellSimple::new("Shazam", "24K Magic in the air"))
            .unwrap());
        assert_eq!(table.cast_words("Shazam"), Some("24K Magic in the air"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn colliding_lookup_reports_probe_steps() {
        // "Wingardium Leviosa" and "Shazam" both hash to slot 2 at
        // capacity 7; finding the latter takes one probe step.
        let mut table = DoubleHashTable::new(7);
        for (name, words) in [
            ("Abracadabra", "Avada Kedavra"),
            ("Expecto Patronum", "Im gonna stand here like a unicorn"),
            ("Wingardium Leviosa", "Get up, stand up"),
            ("Shazam", "24K Magic in the air"),
        ] {
            assert!(table.put(SpellSimple::new(name, words)).unwrap());
        }
        assert_eq!(table.cast_words("Shazam"), Some("24K Magic in the air"));
        assert_eq!(table.last_steps(), 1);
    }

    #[test]
    fn lookup_on_empty_table_misses() {
        let mut table = DoubleHashTable::new(5);
        assert_eq!(table.cast_words("Anything"), None);
    }

    #[test]
    fn lookup_of_absent_name_misses() {
        let mut table = DoubleHashTable::new(7);
        table
            .put(SpellSimple::new("Abracadabra", "Avada Kedavra"))
            .unwrap();
        assert_eq!(table.cast_words("Aloha"), None);
    }

    #[test]
    fn put_on_full_table_is_rejected_without_mutation() {
        let mut table = DoubleHashTable::new(3);
        for name in ["a", "b", "c"] {
            assert!(table.put(SpellSimple::new(name, "w")).unwrap());
        }
        assert!(!table.put(SpellSimple::new("d", "w")).unwrap());
        assert_eq!(table.len(), 3);
        assert_eq!(table.cast_words("a"), Some("w"));
    }

    #[test]
    fn cycling_probe_sequence_is_a_hard_error() {
        // 'D' (code 68) probes 2, 5, 8, 2, ... at capacity 9 (stride 3
        // shares a factor with 9). Occupy exactly that cycle; the table
        // still has free slots, but the sequence never reaches them.
        let mut table = DoubleHashTable::new(9);
        for index in [2, 5, 8] {
            table.slots[index] = Some(SpellSimple::new("blocker", "w"));
            table.size += 1;
        }
        let err = table.put(SpellSimple::new("D", "w")).unwrap_err();
        assert!(matches!(
            err,
            GrimoireError::ProbeCycle {
                steps: 9,
                capacity: 9
            }
        ));
    }

    #[test]
    #[should_panic(expected = "capacity must exceed 2")]
    fn tiny_capacity_is_rejected() {
        let _ = DoubleHashTable::new(2);
    }
}
