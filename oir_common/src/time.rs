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
//! small scalar aliases from spec §3.1, plus the `Clock` seam from
//! SPEC_FULL §6.6 (grounded in the teacher's `EpochMillis`, which likewise
//! offers both a wall-clock constructor and a bare one for tests).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// unsigned 64-bit epoch-millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn new(millis: u64) -> Self {
        Timestamp(millis)
    }

    pub fn millis(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// unsigned 16-bit altitude in meters.
pub type Altitude = u16;

/// unsigned 16-bit entity number.
pub type EntityNumber = u16;

/// host-supplied wall clock, injected so `oir_index` hosts can use a real
/// clock in production and a fixed one in tests. The index itself never
/// calls this — every timestamp it stores comes from the caller — it
/// exists purely as a convenience seam for hosts (SPEC_FULL §6.6).
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> Timestamp;
}

/// system-clock `Clock` for production hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Timestamp(millis)
    }
}

/// fixed-value `Clock` for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now_millis(&self) -> Timestamp {
        self.0
    }
}
