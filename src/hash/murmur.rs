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

/// A family of `D` MurmurHash3 functions with independent random seeds.
///
/// Works over any byte-viewable key (`AsRef<[u8]>`), which makes it the
/// general-purpose choice when keys are not plain strings or integers.
/// Function `i` is MurmurHash3 x64/128 under the i-th seed, truncated to
/// the first 64 bits.
#[derive(Debug, Clone)]
pub struct Mur3HashFamily<const D: usize> {
    seeds: [u32; D],
}

impl<const D: usize> Mur3HashFamily<D> {
    /// Creates a family with seeds drawn from `rng`.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut family = Self { seeds: [0; D] };
        family.redraw(rng);
        family
    }

    fn redraw(&mut self, rng: &mut dyn RandomSource) {
        for seed in &mut self.seeds {
            *seed = rng.next_u64() as u32;
        }
    }
}

impl<const D: usize> Default for Mur3HashFamily<D> {
    fn default() -> Self {
        Self::new(&mut XorShift64::default())
    }
}

impl<K, const D: usize> HashFamily<K> for Mur3HashFamily<D>
where
    K: AsRef<[u8]> + ?Sized,
{
    fn num_functions(&self) -> usize {
        D
    }

    fn hash(&self, key: &K, which: usize) -> u64 {
        let (h1, _) = mur3::murmurhash3_x64_128(key.as_ref(), self.seeds[which]);
        h1
    }

    fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        self.redraw(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_mur3_directly() {
        let family = Mur3HashFamily::<2>::new(&mut XorShift64::seeded(3));
        for which in 0..2 {
            let (expected, _) = mur3::murmurhash3_x64_128(b"payload", family.seeds[which]);
            assert_eq!(family.hash("payload", which), expected);
        }
    }

    #[test]
    fn test_functions_differ_per_index() {
        let family = Mur3HashFamily::<4>::new(&mut XorShift64::seeded(13));
        let hashes: Vec<u64> = (0..4).map(|i| family.hash(b"key".as_slice(), i)).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(hashes[i], hashes[j]);
            }
        }
    }

    #[test]
    fn test_regenerate_changes_mapping() {
        let mut rng = XorShift64::seeded(29);
        let mut family = Mur3HashFamily::<3>::new(&mut rng);
        let before: Vec<u64> = (0..3).map(|i| family.hash("stable key", i)).collect();
        HashFamily::<str>::regenerate(&mut family, &mut rng);
        let after: Vec<u64> = (0..3).map(|i| family.hash("stable key", i)).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_clone_preserves_seeds() {
        let family = Mur3HashFamily::<2>::new(&mut XorShift64::seeded(31));
        let copy = family.clone();
        assert_eq!(family.hash("k", 0), copy.hash("k", 0));
        assert_eq!(family.hash("k", 1), copy.hash("k", 1));
    }
}
