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

//! Hash families for cuckoo tables.
//!
//! A cuckoo table derives each key's `d` candidate positions from a family
//! of `d` independent hash functions over the same key domain. The family is
//! a capability the table holds, not a hierarchy: implement [`HashFamily`]
//! for a key type and the table takes care of the rest. Three families ship
//! with the crate:
//!
//! - [`StringHashFamily`]: polynomial hashing of string keys, one random
//!   multiplier per function.
//! - [`IntHashFamily`]: multiplicative hashing of integer keys, one fixed
//!   odd multiplier per function index.
//! - [`Mur3HashFamily`]: seeded MurmurHash3 over any byte-viewable key, one
//!   random seed per function.
//!
//! The number of functions `D` is a const generic, so a family's `d` is
//! fixed at compile time and can never drift at runtime.

mod integer;
mod murmur;
mod string;

pub use self::integer::IntHashFamily;
pub use self::murmur::Mur3HashFamily;
pub use self::string::StringHashFamily;

use crate::common::RandomSource;

/// A family of `d` independent hash functions over one key domain.
pub trait HashFamily<K: ?Sized> {
    /// Returns `d`, the number of functions in the family.
    ///
    /// Constant for the lifetime of the instance; [`regenerate`] replaces
    /// parameters, never `d`.
    ///
    /// [`regenerate`]: HashFamily::regenerate
    fn num_functions(&self) -> usize;

    /// Hashes `key` with function `which`.
    ///
    /// # Panics
    ///
    /// May panic if `which >= num_functions()`.
    fn hash(&self, key: &K, which: usize) -> u64;

    /// Replaces every internal parameter with freshly drawn random values.
    ///
    /// Parameters are regenerated wholesale, never partially. There is no
    /// guarantee the new functions map any given key away from its previous
    /// slots; a collision with the old state is merely unlikely.
    fn regenerate(&mut self, rng: &mut dyn RandomSource);
}
