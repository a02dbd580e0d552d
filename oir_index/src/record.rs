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
//! the OIR record (spec §3.2) and its overlap predicate (spec §4.6,
//! testable property 9).

use oir_common::{Altitude, EntityNumber, OirId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::principal::Principal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OirRecord {
    pub id: OirId,
    /// set once on first insert, never mutated for the lifetime of `id`.
    pub created_by: Principal,
    /// refreshed on every successful mutation.
    pub last_updated_by: Principal,
    pub min_height: Altitude,
    pub max_height: Altitude,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub entity_number: EntityNumber,
    pub url: Vec<u8>,
}

impl OirRecord {
    /// closed-altitude, half-open-time overlap test (spec §4.6):
    /// `record.minHeight <= maxH AND record.maxHeight >= minH AND
    /// record.startTime < tEnd AND record.endTime > tStart`.
    pub fn overlaps(&self, min_h: Altitude, max_h: Altitude, t_start: Timestamp, t_end: Timestamp) -> bool {
        self.min_height <= max_h && self.max_height >= min_h && self.start_time.millis() < t_end.millis() && self.end_time.millis() > t_start.millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(min_h: Altitude, max_h: Altitude, start: u64, end: u64) -> OirRecord {
        OirRecord {
            id: OirId::ZERO,
            created_by: Principal::ZERO,
            last_updated_by: Principal::ZERO,
            min_height: min_h,
            max_height: max_h,
            start_time: Timestamp::new(start),
            end_time: Timestamp::new(end),
            entity_number: 0,
            url: Vec::new(),
        }
    }

    #[test]
    fn overlap_is_closed_in_altitude_open_in_time() {
        let r = record(100, 200, 1_000, 2_000);
        assert!(r.overlaps(150, 250, 1_100, 1_200));
        assert!(r.overlaps(100, 100, 1_100, 1_200)); // touches min_height exactly, closed
        assert!(!r.overlaps(300, 400, 1_100, 1_200)); // altitude disjoint
        assert!(!r.overlaps(150, 250, 0, 1_000)); // end_time == t_start, strict `>` fails
        assert!(!r.overlaps(150, 250, 2_000, 3_000)); // start_time == t_end, strict `<` fails
    }
}
