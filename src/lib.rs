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

//! A cuckoo hash table with pluggable hash families.
//!
//! Cuckoo hashing stores each key at one of `d` candidate positions derived
//! from a family of `d` independent hash functions, so lookups and removals
//! probe at most `d` slots. Insertion conflicts are resolved by evicting and
//! relocating existing occupants in a bounded random walk; when the walk hits
//! its ceiling the table regenerates its hash functions and rebuilds, and
//! after repeated failures it grows to the next prime capacity.
//!
//! # Quick start
//!
//! ```rust
//! use cuckoo_hash::hash::StringHashFamily;
//! use cuckoo_hash::table::CuckooHashTable;
//!
//! let mut table: CuckooHashTable<String, StringHashFamily<3>> = CuckooHashTable::new();
//!
//! assert!(table.insert("apple".to_string()));
//! assert!(table.contains(&"apple".to_string()));
//! assert!(!table.insert("apple".to_string()));
//!
//! assert!(table.remove(&"apple".to_string()));
//! assert!(table.is_empty());
//! ```

pub mod common;
pub mod error;
pub mod hash;
pub mod table;
