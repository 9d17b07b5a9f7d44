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

use cuckoo_hash::common::RandomSource;
use cuckoo_hash::common::XorShift64;
use cuckoo_hash::hash::HashFamily;
use cuckoo_hash::hash::IntHashFamily;
use cuckoo_hash::hash::Mur3HashFamily;
use cuckoo_hash::hash::StringHashFamily;
use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::le;

#[test]
fn test_string_family_is_deterministic_per_instance() {
    let family = StringHashFamily::<3>::new(&mut XorShift64::seeded(100));
    for which in 0..3 {
        assert_eq!(family.hash("stable", which), family.hash("stable", which));
    }
}

#[test]
fn test_string_family_str_and_string_keys_agree() {
    let family = StringHashFamily::<2>::new(&mut XorShift64::seeded(101));
    let owned = String::from("cuckoo");
    assert_eq!(family.hash("cuckoo", 0), family.hash(&owned, 0));
    assert_eq!(family.hash("cuckoo", 1), family.hash(&owned, 1));
}

#[test]
fn test_string_family_regenerate_keeps_d() {
    let mut rng = XorShift64::seeded(102);
    let mut family = StringHashFamily::<4>::new(&mut rng);
    assert_eq!(HashFamily::<str>::num_functions(&family), 4);
    HashFamily::<str>::regenerate(&mut family, &mut rng);
    assert_eq!(HashFamily::<str>::num_functions(&family), 4);
}

#[test]
fn test_string_family_regenerate_remaps_keys() {
    let mut rng = XorShift64::seeded(103);
    let mut family = StringHashFamily::<3>::new(&mut rng);
    let before: Vec<u64> = (0..3).map(|i| family.hash("remapped", i)).collect();
    HashFamily::<str>::regenerate(&mut family, &mut rng);
    let after: Vec<u64> = (0..3).map(|i| family.hash("remapped", i)).collect();
    assert_ne!(before, after);
}

#[test]
fn test_string_family_spreads_similar_keys() {
    // Similar keys should not collide under every function.
    let family = StringHashFamily::<3>::new(&mut XorShift64::seeded(104));
    for which in 0..3 {
        assert_ne!(family.hash("key_1", which), family.hash("key_2", which));
    }
}

#[test]
fn test_int_family_regenerate_is_stateless() {
    let mut family = IntHashFamily::<2>::default();
    let before = family.hash(&12345u64, 0);
    HashFamily::<u64>::regenerate(&mut family, &mut XorShift64::seeded(105));
    assert_eq!(family.hash(&12345u64, 0), before);
}

#[test]
fn test_int_family_spreads_sequential_keys() {
    let family = IntHashFamily::<2>::default();
    let hashes: Vec<u64> = (1..100u64).map(|k| family.hash(&k, 0)).collect();
    let mut deduped = hashes.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), hashes.len(), "sequential keys collided");
}

#[test]
fn test_mur3_family_distinguishes_functions_and_keys() {
    let family = Mur3HashFamily::<3>::new(&mut XorShift64::seeded(106));
    assert_ne!(family.hash("a", 0), family.hash("a", 1));
    assert_ne!(family.hash("a", 0), family.hash("b", 0));
    // Byte-slice and str views of the same key hash alike.
    assert_eq!(family.hash("a", 2), family.hash(b"a".as_slice(), 2));
}

#[test]
fn test_families_work_through_dyn_random_source() {
    // Regeneration takes any RandomSource implementation.
    struct Counter(u64);
    impl RandomSource for Counter {
        fn next_u64(&mut self) -> u64 {
            self.0 += 1;
            self.0
        }
    }

    let mut rng = Counter(0);
    let mut family = StringHashFamily::<2>::new(&mut rng);
    HashFamily::<str>::regenerate(&mut family, &mut rng);
    assert_eq!(HashFamily::<str>::num_functions(&family), 2);
}

#[test]
fn test_random_source_ranged_draws() {
    let mut rng = XorShift64::seeded(107);
    for _ in 0..500 {
        let value = rng.next_range(10, 20);
        assert_that!(value, ge(10));
        assert_that!(value, le(20));
        assert!(rng.next_below(7) < 7);
    }
}
