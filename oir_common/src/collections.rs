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
//! grounded in the teacher's `odin_common::collections::Snapshot` trait:
//! a way to take a cloned, point-in-time copy of a mutable collection so it
//! can be iterated while the original is mutated. Spec §9's "storage
//! pointer vs snapshot" hazard is exactly what this exists to avoid —
//! `oir_index::upsert`/`delete` snapshot `idToCells[id]` before mutating
//! the same sequence.

use std::collections::HashMap;
use std::hash::Hash;

pub trait Snapshot<E> {
    fn snapshot(&self) -> Vec<E>;
}

impl<K, V> Snapshot<(K, V)> for HashMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn snapshot(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<T> Snapshot<T> for Vec<T>
where
    T: Clone,
{
    fn snapshot(&self) -> Vec<T> {
        self.clone()
    }
}

/// removes the first occurrence of `value` from `vec` by swapping it with
/// the last element and popping — the "swap-with-last + pop" discipline
/// spec §4.6/§9 calls for on `cellToIds`/`idToCells` removal. Returns
/// whether an element was removed.
pub fn swap_remove_value<T: PartialEq>(vec: &mut Vec<T>, value: &T) -> bool {
    if let Some(pos) = vec.iter().position(|v| v == value) {
        vec.swap_remove(pos);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut map: HashMap<u32, u32> = HashMap::new();
        map.insert(1, 10);
        map.insert(2, 20);
        let snap = map.snapshot();
        map.insert(3, 30);
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn swap_remove_value_removes_exactly_one() {
        let mut v = vec![1, 2, 3, 2];
        assert!(swap_remove_value(&mut v, &2));
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().filter(|&&x| x == 2).count(), 1);

        assert!(!swap_remove_value(&mut v, &99));
    }
}
