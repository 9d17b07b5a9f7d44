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

use crate::common::RandomSource;
use crate::common::XorShift64;
use crate::hash::HashFamily;

/// A family of `D` polynomial string hashes with random multipliers.
///
/// Function `i` folds the key's bytes left to right as
/// `h = mult[i] * h + byte` in wrapping arithmetic. Multipliers are forced
/// odd so the fold never collapses to the last few bytes.
///
/// # Examples
///
/// ```
/// use cuckoo_hash::common::XorShift64;
/// use cuckoo_hash::hash::HashFamily;
/// use cuckoo_hash::hash::StringHashFamily;
///
/// let family = StringHashFamily::<3>::new(&mut XorShift64::seeded(1));
/// assert_eq!(HashFamily::<str>::num_functions(&family), 3);
/// let h = family.hash("apple", 0);
/// assert_eq!(h, family.hash("apple", 0));
/// ```
#[derive(Debug, Clone)]
pub struct StringHashFamily<const D: usize> {
    multipliers: [u64; D],
}

impl<const D: usize> StringHashFamily<D> {
    /// Creates a family with multipliers drawn from `rng`.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut family = Self { multipliers: [0; D] };
        family.redraw(rng);
        family
    }

    fn redraw(&mut self, rng: &mut dyn RandomSource) {
        for multiplier in &mut self.multipliers {
            *multiplier = rng.next_u64() | 1;
        }
    }

    fn fold(&self, bytes: &[u8], which: usize) -> u64 {
        let multiplier = self.multipliers[which];
        let mut hash: u64 = 0;
        for &byte in bytes {
            hash = multiplier.wrapping_mul(hash).wrapping_add(u64::from(byte));
        }
        hash
    }
}

impl<const D: usize> Default for StringHashFamily<D> {
    fn default() -> Self {
        Self::new(&mut XorShift64::default())
    }
}

impl<K, const D: usize> HashFamily<K> for StringHashFamily<D>
where
    K: std::borrow::Borrow<str> + ?Sized,
{
    fn num_functions(&self) -> usize {
        D
    }

    fn hash(&self, key: &K, which: usize) -> u64 {
        self.fold(key.borrow().as_bytes(), which)
    }

    fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        self.redraw(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions_differ_per_index() {
        let family = StringHashFamily::<4>::new(&mut XorShift64::seeded(5));
        let hashes: Vec<u64> = (0..4).map(|i| family.hash("cuckoo", i)).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(hashes[i], hashes[j], "functions {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_fold_matches_manual_polynomial() {
        let family = StringHashFamily::<1>::new(&mut XorShift64::seeded(9));
        let multiplier = family.multipliers[0];
        let mut expected: u64 = 0;
        for &byte in b"abc" {
            expected = multiplier.wrapping_mul(expected).wrapping_add(u64::from(byte));
        }
        assert_eq!(family.hash("abc", 0), expected);
    }

    #[test]
    fn test_multipliers_are_odd() {
        let family = StringHashFamily::<8>::new(&mut XorShift64::seeded(21));
        assert!(family.multipliers.iter().all(|m| m % 2 == 1));
    }

    #[test]
    fn test_regenerate_replaces_all_multipliers() {
        let mut rng = XorShift64::seeded(33);
        let mut family = StringHashFamily::<3>::new(&mut rng);
        let before = family.multipliers;
        HashFamily::<str>::regenerate(&mut family, &mut rng);
        assert_eq!(HashFamily::<str>::num_functions(&family), 3);
        assert!(
            family.multipliers.iter().zip(before.iter()).all(|(a, b)| a != b),
            "every multiplier should be redrawn"
        );
    }

    #[test]
    fn test_str_and_string_agree() {
        let family = StringHashFamily::<2>::new(&mut XorShift64::seeded(44));
        let owned = String::from("same key");
        for which in 0..2 {
            assert_eq!(family.hash("same key", which), family.hash(&owned, which));
        }
    }

    #[test]
    fn test_empty_key_hashes_to_zero() {
        let family = StringHashFamily::<2>::new(&mut XorShift64::seeded(55));
        assert_eq!(family.hash("", 0), 0);
        assert_eq!(family.hash("", 1), 0);
    }
}
