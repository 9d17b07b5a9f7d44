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

//! The cuckoo table engine.
//!
//! [`CuckooHashTable`] stores each key at one of the `d` candidate slots its
//! hash family derives, so `contains` and `remove` probe at most `d` slots.
//! An insert that finds all candidates occupied displaces a random occupant
//! and re-places it, walking until a free slot turns up; the walk is bounded
//! and escalates to a full rehash or a prime-sized expansion when it hits
//! the ceiling.
//!
//! # Usage
//!
//! ```rust
//! # use cuckoo_hash::hash::StringHashFamily;
//! # use cuckoo_hash::table::CuckooHashTable;
//! let mut table: CuckooHashTable<String, StringHashFamily<3>> =
//!     CuckooHashTable::with_capacity(101);
//! table.insert("first".to_string());
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.capacity(), 101);
//! ```

mod cuckoo;

pub use self::cuckoo::ALLOWED_REHASHES;
pub use self::cuckoo::COUNT_LIMIT;
pub use self::cuckoo::CuckooHashTable;
pub use self::cuckoo::CuckooHashTableBuilder;
pub use self::cuckoo::DEFAULT_CAPACITY;
pub use self::cuckoo::MAX_LOAD;
