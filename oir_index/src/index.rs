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
//! C7 — the OIR index itself, plus C9's validation/error-signaling facade
//! (the public methods below *are* C9: this crate has no separate
//! transport layer, so "bindings a host calls" are these `&mut self`/
//! `&self` methods directly).

use std::collections::HashMap;

use oir_common::store::KeyedStore;
use oir_common::{collections::swap_remove_value, Altitude, EntityNumber, Geohash, OirId, Timestamp};

use crate::auth::Authorization;
use crate::config::IndexConfig;
use crate::errors::{internal, invalid_argument, IndexResult};
use crate::events::{EventSink, IndexEvent};
use crate::principal::Principal;
use crate::record::OirRecord;

/// the keyed-store index itself. Generic over the three backing maps so a
/// host can substitute a transactional KV store for any of them (spec
/// §6.1); defaults to in-process `HashMap`s, the teacher's convention for
/// its own `SharedStore<T>` seam.
pub struct OirIndex<R = HashMap<OirId, OirRecord>, C = HashMap<OirId, Vec<Geohash>>, I = HashMap<Geohash, Vec<OirId>>>
where
    R: KeyedStore<OirId, OirRecord>,
    C: KeyedStore<OirId, Vec<Geohash>>,
    I: KeyedStore<Geohash, Vec<OirId>>,
{
    id_to_record: R,
    id_to_cells: C,
    cell_to_ids: I,
    auth: Authorization,
    config: IndexConfig,
}

impl<R, C, I> OirIndex<R, C, I>
where
    R: KeyedStore<OirId, OirRecord> + Default,
    C: KeyedStore<OirId, Vec<Geohash>> + Default,
    I: KeyedStore<Geohash, Vec<OirId>> + Default,
{
    pub fn new(deployer: Principal, config: IndexConfig) -> Self {
        OirIndex {
            id_to_record: R::default(),
            id_to_cells: C::default(),
            cell_to_ids: I::default(),
            auth: Authorization::new(deployer),
            config,
        }
    }
}

impl<R, C, I> OirIndex<R, C, I>
where
    R: KeyedStore<OirId, OirRecord>,
    C: KeyedStore<OirId, Vec<Geohash>>,
    I: KeyedStore<Geohash, Vec<OirId>>,
{
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    pub fn owner(&self) -> Principal {
        self.auth.owner()
    }

    pub fn is_allowed(&self, principal: Principal) -> bool {
        self.auth.is_allowed(principal)
    }

    pub fn allow(&mut self, caller: Principal, addr: Principal) -> IndexResult<()> {
        self.auth.allow(caller, addr)
    }

    pub fn disallow(&mut self, caller: Principal, addr: Principal) -> IndexResult<()> {
        self.auth.disallow(caller, addr)
    }

    pub fn transfer_ownership(&mut self, caller: Principal, new_owner: Principal) -> IndexResult<()> {
        self.auth.transfer_ownership(caller, new_owner)
    }

    pub fn get_record(&self, id: OirId) -> Option<&OirRecord> {
        self.id_to_record.get(&id)
    }

    pub fn cells_of(&self, id: OirId) -> Option<&Vec<Geohash>> {
        self.id_to_cells.get(&id)
    }

    pub fn ids_of(&self, cell: Geohash) -> Option<&Vec<OirId>> {
        self.cell_to_ids.get(&cell)
    }

    /// caller must be in the allow-list. Validates before any state change
    /// or event (spec §7); either the full diff commits, or none of it
    /// does.
    #[allow(clippy::too_many_arguments)]
    pub fn upsert(
        &mut self,
        caller: Principal,
        id: OirId,
        geohashes: Vec<Geohash>,
        min_height: Altitude,
        max_height: Altitude,
        start_time: Timestamp,
        end_time: Timestamp,
        url: Vec<u8>,
        entity_number: EntityNumber,
        sink: &mut impl EventSink,
    ) -> IndexResult<()> {
        self.auth.require_allowed(caller)?;
        if geohashes.is_empty() {
            return Err(invalid_argument("geohashes must be non-empty"));
        }
        if max_height < min_height {
            return Err(invalid_argument("maxHeight must be >= minHeight"));
        }
        if start_time.millis() >= end_time.millis() {
            return Err(invalid_argument("startTime must be < endTime"));
        }

        tracing::debug!(id = %id, caller = %caller, cells = geohashes.len(), "upsert");

        if !self.id_to_cells.contains_key(&id) {
            self.insert_new(caller, id, geohashes, min_height, max_height, start_time, end_time, url, entity_number, sink);
        } else {
            self.reconcile_existing(caller, id, geohashes, min_height, max_height, start_time, end_time, url, entity_number, sink)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn insert_new(
        &mut self,
        caller: Principal,
        id: OirId,
        geohashes: Vec<Geohash>,
        min_height: Altitude,
        max_height: Altitude,
        start_time: Timestamp,
        end_time: Timestamp,
        url: Vec<u8>,
        entity_number: EntityNumber,
        sink: &mut impl EventSink,
    ) {
        let record = OirRecord {
            id,
            created_by: caller,
            last_updated_by: caller,
            min_height,
            max_height,
            start_time,
            end_time,
            entity_number,
            url,
        };
        self.id_to_record.insert(id, record);

        let mut inserted = Vec::with_capacity(geohashes.len());
        for cell in geohashes {
            self.add_to_cell(cell, id);
            sink.emit(IndexEvent::DataAdded { id, cell, created_by: caller });
            inserted.push(cell);
        }
        self.id_to_cells.insert(id, inserted);
    }

    #[allow(clippy::too_many_arguments)]
    fn reconcile_existing(
        &mut self,
        caller: Principal,
        id: OirId,
        geohashes: Vec<Geohash>,
        min_height: Altitude,
        max_height: Altitude,
        start_time: Timestamp,
        end_time: Timestamp,
        url: Vec<u8>,
        entity_number: EntityNumber,
        sink: &mut impl EventSink,
    ) -> IndexResult<()> {
        // snapshot: a value-copy, not a reference into the live sequence —
        // `idToCells[id]` is mutated below while this loop runs.
        let old_cells = self.id_to_cells.get(&id).cloned().unwrap_or_default();
        let created_by = self
            .id_to_record
            .get(&id)
            .map(|r| r.created_by)
            .ok_or_else(|| internal(format!("idToCells has {id} but idToRecord does not")))?;

        let new_record = OirRecord {
            id,
            created_by,
            last_updated_by: caller,
            min_height,
            max_height,
            start_time,
            end_time,
            entity_number,
            url,
        };
        // written once, regardless of how many cells follow.
        self.id_to_record.insert(id, new_record);

        let mut processed = vec![false; old_cells.len()];
        let mut new_cells = Vec::with_capacity(geohashes.len());
        for cell in geohashes {
            if let Some(pos) = old_cells.iter().position(|c| *c == cell) {
                processed[pos] = true;
                sink.emit(IndexEvent::DataUpdated { id, cell, last_updated_by: caller });
            } else {
                self.add_to_cell(cell, id);
                sink.emit(IndexEvent::DataAdded { id, cell, created_by });
            }
            new_cells.push(cell);
        }

        for (pos, old_cell) in old_cells.iter().enumerate() {
            if !processed[pos] {
                self.remove_from_cell_to_ids(id, *old_cell);
                sink.emit(IndexEvent::DataDeleted { id, cell: *old_cell, caller });
            }
        }

        self.id_to_cells.insert(id, new_cells);
        Ok(())
    }

    /// caller must be in the allow-list; empty list fails. Unknown IDs are
    /// silent no-ops.
    pub fn delete(&mut self, caller: Principal, ids: Vec<OirId>, sink: &mut impl EventSink) -> IndexResult<()> {
        self.auth.require_allowed(caller)?;
        if ids.is_empty() {
            return Err(invalid_argument("ids must be non-empty"));
        }

        for id in ids {
            let Some(cells) = self.id_to_cells.get(&id).cloned() else {
                continue; // missing id: silent no-op
            };
            for cell in cells {
                self.remove_from_cell_to_ids(id, cell);
                sink.emit(IndexEvent::DataDeleted { id, cell, caller });
            }
            self.id_to_cells.remove(&id);
            self.id_to_record.remove(&id);
            tracing::debug!(id = %id, caller = %caller, "deleted");
        }
        Ok(())
    }

    /// read-only, no authorization. Two-pass: count matches, allocate
    /// exact-size result, fill — matches spec §4.6's described shape.
    pub fn get_by_cell(
        &self,
        cell: Geohash,
        min_height: Altitude,
        max_height: Altitude,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> IndexResult<(Vec<Vec<u8>>, Vec<EntityNumber>, Vec<OirId>)> {
        if max_height < min_height {
            return Err(invalid_argument("maxHeight must be >= minHeight"));
        }
        if start_time.millis() >= end_time.millis() {
            return Err(invalid_argument("startTime must be < endTime"));
        }

        tracing::trace!(cell = %cell, "getByCell");

        let empty = Vec::new();
        let candidate_ids = self.cell_to_ids.get(&cell).unwrap_or(&empty);

        let mut count = 0usize;
        for id in candidate_ids {
            if let Some(record) = self.id_to_record.get(id) {
                if record.overlaps(min_height, max_height, start_time, end_time) {
                    count += 1;
                }
            }
        }

        let mut urls = Vec::with_capacity(count);
        let mut entities = Vec::with_capacity(count);
        let mut out_ids = Vec::with_capacity(count);
        for id in candidate_ids {
            if let Some(record) = self.id_to_record.get(id) {
                if record.overlaps(min_height, max_height, start_time, end_time) {
                    urls.push(record.url.clone());
                    entities.push(record.entity_number);
                    out_ids.push(*id);
                }
            }
        }

        tracing::debug!(cell = %cell, matched = out_ids.len(), "getByCell");
        Ok((urls, entities, out_ids))
    }

    fn add_to_cell(&mut self, cell: Geohash, id: OirId) {
        let mut ids = self.cell_to_ids.get(&cell).cloned().unwrap_or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
        self.cell_to_ids.insert(cell, ids);
    }

    /// swap-with-last + pop on `cellToIds[cell]` (spec §4.6/§9).
    fn remove_from_cell_to_ids(&mut self, id: OirId, cell: Geohash) {
        if let Some(mut ids) = self.cell_to_ids.get(&cell).cloned() {
            swap_remove_value(&mut ids, &id);
            if ids.is_empty() {
                self.cell_to_ids.remove(&cell);
            } else {
                self.cell_to_ids.insert(cell, ids);
            }
        }
    }
}
