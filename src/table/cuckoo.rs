// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::marker::PhantomData;

use crate::common::RandomSource;
use crate::common::XorShift64;
use crate::common::next_prime;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::HashFamily;

/// Maximum load factor; the table grows before an insert would reach it.
pub const MAX_LOAD: f64 = 0.40;

/// Displacements allowed per placement attempt before escalating.
pub const COUNT_LIMIT: usize = 100;

/// Consecutive same-capacity rehashes allowed before forcing an expansion.
pub const ALLOWED_REHASHES: u32 = 5;

/// Default capacity hint; rounded up to a prime at construction.
pub const DEFAULT_CAPACITY: usize = 101;

/// Best-effort re-rolls to avoid evicting the slot vacated by the previous
/// displacement, which would otherwise invite two-element oscillation.
const EVICTION_RETRIES: usize = 5;

/// Smallest capacity the table will size to.
const MIN_CAPACITY: usize = 3;

/// One slot of the table. Removal only clears the flag; stale storage in an
/// inactive slot is overwritten by the next placement there.
#[derive(Debug, Clone)]
struct Slot<K> {
    element: Option<K>,
    is_active: bool,
}

impl<K> Slot<K> {
    fn empty() -> Self {
        Self {
            element: None,
            is_active: false,
        }
    }

    fn occupied(element: K) -> Self {
        Self {
            element: Some(element),
            is_active: true,
        }
    }
}

fn empty_slots<K>(len: usize) -> Vec<Slot<K>> {
    std::iter::repeat_with(Slot::empty).take(len).collect()
}

/// True if placing one more element would push the load factor to the
/// threshold or beyond. Compared against the exact product so small prime
/// capacities, where truncation would round the limit down to the exact
/// boundary, still grow one insert early.
fn reaches_load_limit(num_active: usize, capacity: usize) -> bool {
    (num_active + 1) as f64 >= capacity as f64 * MAX_LOAD
}

/// A cuckoo hash table.
///
/// Every key lives at one of the `d` candidate positions derived from the
/// hash family `F`, so lookups and removals probe at most `d` slots. The
/// slot array's length is always prime, and the load factor stays below
/// [`MAX_LOAD`]: the table expands to `next_prime(capacity / MAX_LOAD)`
/// before an insert would cross the threshold.
///
/// Inserting into a fully occupied candidate set evicts a random occupant
/// and re-places it. The walk is capped at [`COUNT_LIMIT`] displacements;
/// on reaching the cap the table regenerates its hash functions and
/// rebuilds in place, and after [`ALLOWED_REHASHES`] consecutive rebuilds
/// it expands instead. Each attempt is bounded, and every escalation
/// changes table state, so the engine makes observable progress even on
/// adversarial key sets.
///
/// # Examples
///
/// ```
/// use cuckoo_hash::hash::StringHashFamily;
/// use cuckoo_hash::table::CuckooHashTable;
///
/// let mut table: CuckooHashTable<String, StringHashFamily<3>> = CuckooHashTable::new();
///
/// assert!(table.insert("apple".to_string()));
/// assert!(!table.insert("apple".to_string()));
/// assert!(table.contains(&"apple".to_string()));
///
/// assert!(table.remove(&"apple".to_string()));
/// assert!(!table.contains(&"apple".to_string()));
/// ```
#[derive(Debug)]
pub struct CuckooHashTable<K, F> {
    slots: Vec<Slot<K>>,
    num_active: usize,
    num_functions: usize,
    rehashes: u32,
    rng: XorShift64,
    family: F,
}

impl<K, F> CuckooHashTable<K, F>
where
    K: Eq,
    F: HashFamily<K>,
{
    /// Creates a table with the default capacity hint of 101.
    pub fn new() -> Self
    where
        F: Default,
    {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table sized to the next prime at or above `capacity`.
    pub fn with_capacity(capacity: usize) -> Self
    where
        F: Default,
    {
        Self::with_family(F::default(), capacity, XorShift64::default())
    }

    /// Create a new builder for CuckooHashTable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cuckoo_hash::hash::StringHashFamily;
    /// # use cuckoo_hash::table::CuckooHashTable;
    /// let table: CuckooHashTable<String, StringHashFamily<3>> = CuckooHashTable::builder()
    ///     .capacity(50)
    ///     .seed(7)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(table.capacity(), 53);
    /// ```
    pub fn builder() -> CuckooHashTableBuilder<K, F>
    where
        F: Default,
    {
        CuckooHashTableBuilder::default()
    }

    /// Create a table with explicit family and random source.
    ///
    /// # Panics
    ///
    /// Panics if the family reports zero hash functions.
    fn with_family(family: F, capacity: usize, rng: XorShift64) -> Self {
        let num_functions = family.num_functions();
        assert!(
            num_functions > 0,
            "hash family must provide at least one function"
        );
        let capacity = next_prime(capacity.max(MIN_CAPACITY));
        Self {
            slots: empty_slots(capacity),
            num_active: 0,
            num_functions,
            rehashes: 0,
            rng,
            family,
        }
    }

    /// Returns true if `key` is in the table.
    ///
    /// Probes the `d` candidate slots; never mutates.
    pub fn contains(&self, key: &K) -> bool {
        self.find_pos(key).is_some()
    }

    /// Inserts `key`, returning false if it is already present.
    ///
    /// If placing the key would push the load factor to [`MAX_LOAD`], the
    /// table expands first, so the bound holds after every insert. Always
    /// returns true for a new key; the placement walk cannot fail, only
    /// escalate.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }

        if reaches_load_limit(self.num_active, self.slots.len()) {
            self.expand();
        }

        self.place(key);
        true
    }

    /// Removes `key`, returning false if it is not present.
    ///
    /// Deletion is lazy: the slot's flag is cleared and its storage left in
    /// place. Removal never shrinks the table.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(pos) = self.find_pos(key) else {
            return false;
        };
        self.slots[pos].is_active = false;
        self.num_active -= 1;
        true
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.num_active
    }

    /// Returns true if the table holds no elements.
    pub fn is_empty(&self) -> bool {
        self.num_active == 0
    }

    /// Returns the length of the slot array. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `d`, the number of hash functions in use.
    pub fn num_functions(&self) -> usize {
        self.num_functions
    }

    /// Returns the current load factor.
    pub fn load_factor(&self) -> f64 {
        self.num_active as f64 / self.slots.len() as f64
    }

    /// Deactivates every slot without shrinking the array.
    pub fn clear(&mut self) {
        self.num_active = 0;
        for slot in &mut self.slots {
            slot.is_active = false;
        }
    }

    /// Returns the index of the active slot holding `key`, if any.
    fn find_pos(&self, key: &K) -> Option<usize> {
        for which in 0..self.num_functions {
            let pos = self.slot_index(key, which);
            let slot = &self.slots[pos];
            if slot.is_active && slot.element.as_ref() == Some(key) {
                return Some(pos);
            }
        }
        None
    }

    /// Candidate slot for `key` under function `which`.
    fn slot_index(&self, key: &K, which: usize) -> usize {
        (self.family.hash(key, which) % self.slots.len() as u64) as usize
    }

    /// Candidate slot for `key` under a uniformly random function.
    fn random_candidate(&mut self, key: &K) -> usize {
        let which = self.rng.next_below(self.num_functions as u64) as usize;
        self.slot_index(key, which)
    }

    /// Random-walk cuckoo placement of a key known to be absent.
    ///
    /// Runs up to [`COUNT_LIMIT`] displacement rounds; if no free slot turns
    /// up, escalates to a same-capacity rehash (or an expansion once
    /// [`ALLOWED_REHASHES`] consecutive rehashes have failed) and retries
    /// placement of whichever key is currently in hand.
    fn place(&mut self, key: K) {
        let mut current = key;
        loop {
            let mut last_pos = None;

            for _ in 0..COUNT_LIMIT {
                for which in 0..self.num_functions {
                    let pos = self.slot_index(&current, which);
                    if !self.slots[pos].is_active {
                        self.slots[pos] = Slot::occupied(current);
                        self.num_active += 1;
                        return;
                    }
                }

                // All candidates occupied: evict one at random, preferring a
                // slot other than the one vacated by the previous round.
                let mut pos = self.random_candidate(&current);
                let mut retries = 0;
                while Some(pos) == last_pos && retries < EVICTION_RETRIES {
                    pos = self.random_candidate(&current);
                    retries += 1;
                }
                last_pos = Some(pos);

                let Some(evicted) = self.slots[pos].element.replace(current) else {
                    unreachable!("an active slot always holds an element");
                };
                current = evicted;
            }

            // Ceiling reached. A rehash breaks the eviction cycle by giving
            // every key a fresh candidate set; repeated failures mean the
            // table is too crowded for its functions, so expand.
            self.rehashes += 1;
            if self.rehashes > ALLOWED_REHASHES {
                self.expand();
            } else {
                self.rehash();
            }
        }
    }

    /// Rebuilds at `next_prime(capacity / MAX_LOAD)`, sized so the load
    /// factor lands well under the threshold. Resets the rehash counter.
    fn expand(&mut self) {
        let target = (self.slots.len() as f64 / MAX_LOAD) as usize;
        self.rehashes = 0;
        self.rebuild(target);
    }

    /// Regenerates the hash family and rebuilds at the same capacity,
    /// giving every key a new candidate set.
    fn rehash(&mut self) {
        self.family.regenerate(&mut self.rng);
        let capacity = self.slots.len();
        self.rebuild(capacity);
    }

    /// Replaces the slot array and re-places every active element.
    ///
    /// Re-placement may itself escalate; the rehash counter lives on the
    /// table, so progress carries across nested rebuilds.
    fn rebuild(&mut self, capacity: usize) {
        let capacity = next_prime(capacity.max(MIN_CAPACITY));
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(capacity));
        self.num_active = 0;
        for slot in old_slots {
            if slot.is_active {
                let Some(element) = slot.element else {
                    unreachable!("an active slot always holds an element");
                };
                self.place(element);
            }
        }
    }
}

impl<K, F> Default for CuckooHashTable<K, F>
where
    K: Eq,
    F: HashFamily<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`CuckooHashTable`].
///
/// Carries the key type `K` so the table type named at the end of a builder
/// chain flows back through `build`.
#[derive(Debug)]
pub struct CuckooHashTableBuilder<K, F> {
    capacity: usize,
    seed: Option<u64>,
    family: F,
    explicit_family: bool,
    _key: PhantomData<K>,
}

impl<K, F: Default> Default for CuckooHashTableBuilder<K, F> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: None,
            family: F::default(),
            explicit_family: false,
            _key: PhantomData,
        }
    }
}

impl<K, F> CuckooHashTableBuilder<K, F> {
    /// Set the capacity hint; the table sizes to the next prime at or above
    /// it.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seed the table's random source.
    ///
    /// A seeded table is fully reproducible: a default-constructed family
    /// has its parameters redrawn from the seeded source at build time, and
    /// every later eviction choice and regeneration flows from the same
    /// state.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a specific family instance instead of `F::default()`.
    ///
    /// An explicitly provided family is taken as-is; `build` leaves its
    /// parameters alone even when a seed is set.
    pub fn family(mut self, family: F) -> Self {
        self.family = family;
        self.explicit_family = true;
        self
    }

    /// Build the table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if the family reports zero hash
    /// functions.
    pub fn build(self) -> Result<CuckooHashTable<K, F>, Error>
    where
        K: Eq,
        F: HashFamily<K>,
    {
        let num_functions = self.family.num_functions();
        if num_functions == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "hash family must provide at least one function",
            )
            .with_context("num_functions", num_functions));
        }

        let mut rng = match self.seed {
            Some(seed) => XorShift64::seeded(seed),
            None => XorShift64::default(),
        };
        let mut family = self.family;
        if self.seed.is_some() && !self.explicit_family {
            family.regenerate(&mut rng);
        }
        Ok(CuckooHashTable::with_family(family, self.capacity, rng))
    }
}
