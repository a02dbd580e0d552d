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
//! C8 events: the append-only log (spec §6.2) and the `EventSink`
//! collaborator trait a host wires to its own log-append channel
//! (SPEC_FULL §6.6).

use oir_common::{Geohash, OirId};

use crate::principal::Principal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    DataAdded { id: OirId, cell: Geohash, created_by: Principal },
    DataUpdated { id: OirId, cell: Geohash, last_updated_by: Principal },
    DataDeleted { id: OirId, cell: Geohash, caller: Principal },
}

/// a host wires this to its log-append channel. `Vec<IndexEvent>` ships an
/// implementation for tests and for hosts that just want an in-process
/// buffer, mirroring the teacher's `SharedStore` + plain-`HashMap`-impl
/// pairing.
pub trait EventSink {
    fn emit(&mut self, event: IndexEvent);
}

impl EventSink for Vec<IndexEvent> {
    fn emit(&mut self, event: IndexEvent) {
        self.push(event);
    }
}
