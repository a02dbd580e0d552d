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
//! Integration tests mirroring spec §8's literal scenarios and
//! cross-cutting properties, in the style of the teacher's
//! `odin_share/tests/test_basic.rs`.

use oir_common::{Geohash, OirId, Timestamp};
use oir_index::{IndexConfig, IndexError, IndexEvent, OirIndex, Principal};

fn gh(b: u8) -> Geohash {
    Geohash([b; 32])
}

fn id(b: u8) -> OirId {
    OirId([b; 32])
}

fn principal(b: u8) -> Principal {
    Principal([b; 32])
}

fn config() -> IndexConfig {
    IndexConfig::new(oir_common::Precision::new(2).unwrap())
}

#[test]
fn s2_square_and_filter() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();
    let c1 = gh(10);
    let c2 = gh(11);

    index
        .upsert(deployer, id(1), vec![c1, c2], 100, 200, Timestamp::new(1_000), Timestamp::new(1_000 + 3_600_000), b"u".to_vec(), 7, &mut events)
        .unwrap();

    let (urls, _, ids) = index.get_by_cell(c1, 150, 250, Timestamp::new(1_100), Timestamp::new(1_200)).unwrap();
    assert_eq!(ids, vec![id(1)]);
    assert_eq!(urls, vec![b"u".to_vec()]);

    let (_, _, ids) = index.get_by_cell(c1, 300, 400, Timestamp::new(1_100), Timestamp::new(1_200)).unwrap();
    assert!(ids.is_empty());

    // strict `>`: tEnd == startTime fails
    let (_, _, ids) = index.get_by_cell(c1, 150, 250, Timestamp::new(0), Timestamp::new(1_000)).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn s3_cell_diff_on_update() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();
    let (a, b, c, d) = (gh(1), gh(2), gh(3), gh(4));

    index
        .upsert(deployer, id(1), vec![a, b, c], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    events.clear();

    index
        .upsert(deployer, id(1), vec![b, c, d], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();

    assert!(!index.ids_of(a).map(|ids| ids.contains(&id(1))).unwrap_or(false));
    for cell in [b, c, d] {
        let ids = index.ids_of(cell).unwrap();
        assert_eq!(ids.iter().filter(|i| **i == id(1)).count(), 1);
    }

    let added: Vec<_> = events.iter().filter(|e| matches!(e, IndexEvent::DataAdded { .. })).collect();
    let updated: Vec<_> = events.iter().filter(|e| matches!(e, IndexEvent::DataUpdated { .. })).collect();
    let deleted: Vec<_> = events.iter().filter(|e| matches!(e, IndexEvent::DataDeleted { .. })).collect();
    assert_eq!(added.len(), 1); // d
    assert_eq!(updated.len(), 2); // b, c
    assert_eq!(deleted.len(), 1); // a
}

#[test]
fn s4_authorization() {
    let deployer = principal(1);
    let u1 = principal(2);
    let u2 = principal(3);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();

    index.allow(deployer, u1).unwrap();
    // u2 was never allowed, so "disallow" is a no-op in effect, but exercise it anyway
    let _ = index.disallow(deployer, u2);

    let err = index
        .upsert(u2, id(5), vec![gh(1)], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap_err();
    assert!(matches!(err, IndexError::Unauthorized(_)));

    index
        .upsert(u1, id(5), vec![gh(1)], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    assert_eq!(index.get_record(id(5)).unwrap().created_by, u1);

    // reads are public
    assert!(index.get_by_cell(gh(1), 0, 10, Timestamp::new(0), Timestamp::new(10)).is_ok());
}

#[test]
fn s5_collaborative_edit() {
    let deployer = principal(1);
    let u1 = principal(2);
    let u2 = principal(3);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    index.allow(deployer, u1).unwrap();
    index.allow(deployer, u2).unwrap();
    let mut events = Vec::new();

    index
        .upsert(u1, id(7), vec![gh(1)], 0, 10, Timestamp::new(0), Timestamp::new(10), b"a".to_vec(), 0, &mut events)
        .unwrap();
    index
        .upsert(u2, id(7), vec![gh(1)], 0, 10, Timestamp::new(0), Timestamp::new(10), b"b".to_vec(), 0, &mut events)
        .unwrap();

    let record = index.get_record(id(7)).unwrap();
    assert_eq!(record.created_by, u1);
    assert_eq!(record.last_updated_by, u2);
    assert_eq!(record.url, b"b".to_vec());
}

#[test]
fn s6_delete_of_absent_id_is_a_silent_no_op() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();
    index.delete(deployer, vec![id(42)], &mut events).unwrap();
    assert!(events.is_empty());
    assert!(index.get_record(id(42)).is_none());
}

#[test]
fn property_idempotent_upsert_emits_only_updates() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();
    let cells = vec![gh(1), gh(2)];

    index
        .upsert(deployer, id(9), cells.clone(), 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    events.clear();

    index
        .upsert(deployer, id(9), cells, 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();

    assert!(events.iter().all(|e| matches!(e, IndexEvent::DataUpdated { .. })));
    assert_eq!(events.len(), 2);
}

#[test]
fn property_delete_is_the_inverse_of_upsert() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();
    let cells = vec![gh(1), gh(2)];

    index
        .upsert(deployer, id(3), cells.clone(), 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    index.delete(deployer, vec![id(3)], &mut events).unwrap();

    assert!(index.get_record(id(3)).is_none());
    assert!(index.cells_of(id(3)).is_none());
    for cell in cells {
        assert!(index.ids_of(cell).is_none());
    }
}

#[test]
fn property_created_by_is_monotone_across_updates() {
    let deployer = principal(1);
    let u1 = principal(2);
    let u2 = principal(3);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    index.allow(deployer, u1).unwrap();
    index.allow(deployer, u2).unwrap();
    let mut events = Vec::new();

    index
        .upsert(u1, id(4), vec![gh(1)], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    index
        .upsert(u2, id(4), vec![gh(1), gh(2)], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();
    index
        .upsert(u2, id(4), vec![gh(2)], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .unwrap();

    assert_eq!(index.get_record(id(4)).unwrap().created_by, u1);
}

#[test]
fn validation_rejects_empty_cells_and_bad_ranges_before_any_mutation() {
    let deployer = principal(1);
    let mut index: OirIndex = OirIndex::new(deployer, config());
    let mut events = Vec::new();

    assert!(index
        .upsert(deployer, id(1), vec![], 0, 10, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .is_err());
    assert!(index
        .upsert(deployer, id(1), vec![gh(1)], 10, 0, Timestamp::new(0), Timestamp::new(10), Vec::new(), 0, &mut events)
        .is_err());
    assert!(index
        .upsert(deployer, id(1), vec![gh(1)], 0, 10, Timestamp::new(10), Timestamp::new(10), Vec::new(), 0, &mut events)
        .is_err());
    assert!(events.is_empty());
    assert!(index.get_record(id(1)).is_none());
}
