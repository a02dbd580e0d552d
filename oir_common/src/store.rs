/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
//! Keyed-store abstraction, grounded in the teacher's
//! `odin_share::SharedStore<T>` trait: a thin seam so a host can back the
//! index's keyed maps (spec §3.2/§6.1) with a transactional KV store
//! instead of the in-process default. The teacher uses this exact pattern
//! to let hosts swap an in-memory `HashMap` for a JSON-file-backed or
//! otherwise persistent implementation without touching call sites.

use std::collections::HashMap;
use std::hash::Hash;

/// a keyed store of `V` values, addressed by `K`. `oir_index` is generic
/// over this trait for all three of its maps (`idToRecord`, `idToCells`,
/// `cellToIds`), matching spec §6.1's "implementations may back these with
/// any transactional KV store".
pub trait KeyedStore<K, V> {
    fn get(&self, k: &K) -> Option<&V>;
    fn contains_key(&self, k: &K) -> bool;
    fn insert(&mut self, k: K, v: V) -> Option<V>;
    fn remove(&mut self, k: &K) -> Option<V>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> KeyedStore<K, V> for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn get(&self, k: &K) -> Option<&V> {
        HashMap::get(self, k)
    }
    fn contains_key(&self, k: &K) -> bool {
        HashMap::contains_key(self, k)
    }
    fn insert(&mut self, k: K, v: V) -> Option<V> {
        HashMap::insert(self, k, v)
    }
    fn remove(&mut self, k: &K) -> Option<V> {
        HashMap::remove(self, k)
    }
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
