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

//! Prime sizing helpers for table capacities.
//!
//! Cuckoo tables always size their slot arrays to a prime so that modulo
//! reduction of hash values stays well distributed and key strides share no
//! common factor with the capacity.

/// Returns true if `n` is prime.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut candidate = 3;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// # Examples
///
/// ```
/// use cuckoo_hash::common::next_prime;
///
/// assert_eq!(next_prime(101), 101);
/// assert_eq!(next_prime(252), 257);
/// ```
pub fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}
