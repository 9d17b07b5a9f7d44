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
use crate::hash::HashFamily;

// Golden-ratio constant used by Fibonacci hashing.
const SCALE: u64 = 0x9E3779B97F4A7C15;

/// A family of `D` multiplicative integer hashes.
///
/// Integer keys are already well distributed by a single scaling step, so
/// function `i` multiplies the key by a fixed odd constant derived from `i`
/// and no per-instance randomness is needed; `regenerate` is a no-op.
///
/// # Examples
///
/// ```
/// use cuckoo_hash::hash::HashFamily;
/// use cuckoo_hash::hash::IntHashFamily;
///
/// let family = IntHashFamily::<2>::default();
/// assert_ne!(family.hash(&7u64, 0), family.hash(&7u64, 1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntHashFamily<const D: usize>;

impl<const D: usize> IntHashFamily<D> {
    fn scale(value: u64, which: usize) -> u64 {
        debug_assert!(which < D, "function index {which} out of range for d={D}");
        // Odd times odd stays odd, so every function is a full-period
        // multiplicative step.
        let multiplier = SCALE.wrapping_mul(2 * which as u64 + 1);
        value.wrapping_mul(multiplier)
    }
}

macro_rules! impl_int_hash_family {
    ($($int:ty),* $(,)?) => {$(
        impl<const D: usize> HashFamily<$int> for IntHashFamily<D> {
            fn num_functions(&self) -> usize {
                D
            }

            fn hash(&self, key: &$int, which: usize) -> u64 {
                Self::scale(*key as u64, which)
            }

            fn regenerate(&mut self, _rng: &mut dyn RandomSource) {}
        }
    )*};
}

impl_int_hash_family!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::XorShift64;

    #[test]
    fn test_functions_differ_per_index() {
        let family = IntHashFamily::<4>::default();
        for key in [0u64, 1, 42, u64::MAX] {
            if key == 0 {
                continue; // zero maps to zero under every multiplier
            }
            let hashes: Vec<u64> = (0..4).map(|i| family.hash(&key, i)).collect();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(hashes[i], hashes[j], "functions {i} and {j} collide on {key}");
                }
            }
        }
    }

    #[test]
    fn test_regenerate_is_a_no_op() {
        let mut family = IntHashFamily::<3>::default();
        let before: Vec<u64> = (0..3).map(|i| family.hash(&99u64, i)).collect();
        let mut rng = XorShift64::seeded(77);
        HashFamily::<u64>::regenerate(&mut family, &mut rng);
        let after: Vec<u64> = (0..3).map(|i| family.hash(&99u64, i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_signed_and_unsigned_keys() {
        let family = IntHashFamily::<2>::default();
        // Sign extension makes -1i32 and -1i64 hash alike, by construction.
        assert_eq!(family.hash(&-1i32, 0), family.hash(&-1i64, 0));
        assert_eq!(family.hash(&5u32, 1), family.hash(&5u64, 1));
    }

    #[test]
    fn test_num_functions_reports_d() {
        let family = IntHashFamily::<6>::default();
        assert_eq!(HashFamily::<u64>::num_functions(&family), 6);
    }
}
