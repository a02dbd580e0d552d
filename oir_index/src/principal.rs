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
//! caller identity. Not one of spec.md §3.1's scalars (it's host-supplied,
//! not index-managed), so it lives here rather than in `oir_common`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// opaque 32-byte caller identity, authenticated by the host before the
/// core ever sees it (spec §6.3: "Identity is passed by the host; no
/// authentication happens inside the core").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Principal(pub [u8; 32]);

impl Principal {
    pub const ZERO: Principal = Principal([0u8; 32]);

    pub fn is_zero(&self) -> bool {
        *self == Principal::ZERO
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_principal_is_recognized() {
        assert!(Principal::ZERO.is_zero());
        assert!(!Principal([1u8; 32]).is_zero());
    }
}
