//! WordTable: open-addressing table keyed by borrowed byte views.
//!
//! Every key is hashed with 32-bit FNV-1a and placed at `hash % capacity`;
//! collisions walk forward one slot at a time, wrapping at the end. Entries
//! are never removed, so an empty slot on a probe path proves the key is
//! absent and no tombstones are needed.

use crate::config::TableConfig;
use crate::error::{AllocError, AllocStage, Error};
use crate::view::StrView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a, V> {
    pub key: StrView<'a>,
    pub value: V,
}

/// Result of a single insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Key placed at `index`, `displacement` slots past its home bucket.
    Inserted { index: usize, displacement: usize },
    /// Key already present at `index`; the stored value was kept.
    Duplicate { index: usize },
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }

    /// Whether the key collided with at least one other key on its way in.
    pub fn collided(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { displacement, .. } if *displacement > 0)
    }
}

enum Probe {
    Occupied(usize),
    Vacant { index: usize, displacement: usize },
    Exhausted,
}

type Slots<'a, V> = Vec<Option<Entry<'a, V>>>;

pub struct WordTable<'a, V = i64> {
    slots: Slots<'a, V>,
    count: usize,
    config: TableConfig,
}

impl<'a, V> WordTable<'a, V> {
    /// Table with the default configuration (256 slots, 0.75, x2).
    pub fn new() -> Result<Self, Error> {
        Self::with_config(TableConfig::default())
    }

    /// Validate `config`, then allocate `config.initial_capacity` empty slots.
    pub fn with_config(config: TableConfig) -> Result<Self, Error> {
        config.validate()?;
        let slots = alloc_slots(config.initial_capacity, AllocStage::TableAlloc)?;
        Ok(Self {
            slots,
            count: 0,
            config,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Whether placing one more key would push the load past the configured
    /// threshold. Callers must `expand` first when this is true.
    pub fn needs_expand(&self) -> bool {
        (self.count + 1) as f64 / self.capacity() as f64 > self.config.load_factor
    }

    /// Insert `key` unless it is already present.
    ///
    /// Never grows the table. The caller must guarantee headroom (see
    /// `needs_expand`); inserting an absent key into a table with no empty
    /// slot is a contract violation and panics.
    pub fn insert(&mut self, key: StrView<'a>, value: V) -> InsertOutcome {
        assert!(!key.is_empty(), "empty keys cannot be stored");
        let probe = probe(&self.slots, key);
        self.place(probe, key, value)
    }

    /// Insert `key`, expanding first if a new entry would breach the load
    /// factor. Duplicates never trigger an expansion.
    pub fn insert_growing(&mut self, key: StrView<'a>, value: V) -> Result<InsertOutcome, AllocError> {
        assert!(!key.is_empty(), "empty keys cannot be stored");
        let probe = probe(&self.slots, key);
        if let Probe::Occupied(index) = probe {
            return Ok(InsertOutcome::Duplicate { index });
        }
        if self.needs_expand() {
            self.expand()?;
            return Ok(self.insert(key, value));
        }
        Ok(self.place(probe, key, value))
    }

    pub fn get(&self, key: StrView<'_>) -> Option<&V> {
        match probe(&self.slots, key) {
            Probe::Occupied(i) => self.slots[i].as_ref().map(|e| &e.value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: StrView<'_>) -> bool {
        self.slot_of(key).is_some()
    }

    /// Slot index currently holding `key`.
    pub fn slot_of(&self, key: StrView<'_>) -> Option<usize> {
        match probe(&self.slots, key) {
            Probe::Occupied(i) => Some(i),
            _ => None,
        }
    }

    pub(crate) fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Option::is_some)
    }

    /// Grow to `capacity * scale_factor` slots and rehash every entry.
    ///
    /// Entries are re-placed in ascending slot order of the old array. On
    /// allocation failure the table is untouched.
    pub fn expand(&mut self) -> Result<(), AllocError> {
        let from = self.capacity();
        let to = from
            .checked_mul(self.config.scale_factor)
            .ok_or(AllocError {
                stage: AllocStage::TableExpand,
                requested: usize::MAX,
            })?;
        let fresh = alloc_slots(to, AllocStage::TableExpand)?;
        let old = core::mem::replace(&mut self.slots, fresh);

        let mut moved = 0;
        for entry in old.into_iter().flatten() {
            match probe(&self.slots, entry.key) {
                Probe::Vacant { index, .. } => self.slots[index] = Some(entry),
                Probe::Occupied(_) => unreachable!("duplicate key found while rehashing"),
                Probe::Exhausted => unreachable!("rehash target has fewer slots than entries"),
            }
            moved += 1;
        }
        debug_assert_eq!(moved, self.count, "rehash must neither drop nor duplicate");
        tracing::debug!(from, to, count = self.count, "table expanded");
        Ok(())
    }

    /// Occupied entries in slot order.
    pub fn iter(&self) -> Iter<'_, 'a, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    fn place(&mut self, probe: Probe, key: StrView<'a>, value: V) -> InsertOutcome {
        match probe {
            Probe::Occupied(index) => InsertOutcome::Duplicate { index },
            Probe::Vacant {
                index,
                displacement,
            } => {
                self.slots[index] = Some(Entry { key, value });
                self.count += 1;
                InsertOutcome::Inserted {
                    index,
                    displacement,
                }
            }
            Probe::Exhausted => panic!(
                "insert into a full table (capacity {}); expand before inserting",
                self.capacity()
            ),
        }
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for WordTable<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over occupied slots of a `WordTable`.
pub struct Iter<'t, 'a, V> {
    it: core::slice::Iter<'t, Option<Entry<'a, V>>>,
}

impl<'t, 'a, V> Iterator for Iter<'t, 'a, V> {
    type Item = (StrView<'a>, &'t V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .flatten()
            .next()
            .map(|e| (e.key, &e.value))
    }
}

fn alloc_slots<'a, V>(capacity: usize, stage: AllocStage) -> Result<Slots<'a, V>, AllocError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).map_err(|_| AllocError {
        stage,
        requested: capacity,
    })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

/// Walk from the home bucket until the key or an empty slot turns up.
/// Visits each slot at most once.
fn probe<V>(slots: &[Option<Entry<'_, V>>], key: StrView<'_>) -> Probe {
    let cap = slots.len();
    let home = key.hash32() as usize % cap;
    for displacement in 0..cap {
        let index = (home + displacement) % cap;
        match &slots[index] {
            None => return Probe::Vacant {
                index,
                displacement,
            },
            Some(e) if e.key == key => return Probe::Occupied(index),
            Some(_) => {}
        }
    }
    Probe::Exhausted
}
