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
//! The `MortonCode`/`Geohash`/`OirId` scalar types from spec §3.1. The
//! encode/decode/step *algorithms* (C2) live in `oir_geohash`; this module
//! only carries the bit-level representation both the rasterizer and the
//! index need to agree on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// unsigned 256-bit Z-order code. Only the low `2 * precision` bits are
/// meaningful; limbs are little-endian (`limbs[0]` holds the low 64 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MortonCode {
    limbs: [u64; 4],
}

impl MortonCode {
    pub const ZERO: MortonCode = MortonCode { limbs: [0, 0, 0, 0] };

    pub fn from_u64(v: u64) -> Self {
        MortonCode { limbs: [v, 0, 0, 0] }
    }

    pub fn from_limbs(limbs: [u64; 4]) -> Self {
        MortonCode { limbs }
    }

    pub fn limbs(&self) -> [u64; 4] {
        self.limbs
    }

    pub fn as_u64(&self) -> Option<u64> {
        if self.limbs[1] == 0 && self.limbs[2] == 0 && self.limbs[3] == 0 {
            Some(self.limbs[0])
        } else {
            None
        }
    }

    /// get bit `i` (0 = least significant).
    pub fn bit(&self, i: u32) -> bool {
        let limb = (i / 64) as usize;
        let off = i % 64;
        (self.limbs[limb] >> off) & 1 == 1
    }

    pub fn set_bit(&mut self, i: u32, value: bool) {
        let limb = (i / 64) as usize;
        let off = i % 64;
        if value {
            self.limbs[limb] |= 1u64 << off;
        } else {
            self.limbs[limb] &= !(1u64 << off);
        }
    }

    /// `self << 2 | quadrant` restricted to the low 256 bits (quadrant in 0..=3).
    pub fn shift2_or(self, quadrant: u8) -> Self {
        let mut limbs = [0u64; 4];
        // shift all 256 bits left by 2
        let mut carry = 0u64;
        for i in 0..4 {
            let v = self.limbs[i];
            limbs[i] = (v << 2) | carry;
            carry = v >> 62;
        }
        limbs[0] |= quadrant as u64 & 0b11;
        MortonCode { limbs }
    }

    /// low `2` bits at code-group index `group` (0 = least significant pair).
    pub fn group2(&self, group: u32) -> u8 {
        let bit_index = group * 2;
        let lo = self.bit(bit_index);
        let hi = self.bit(bit_index + 1);
        ((hi as u8) << 1) | (lo as u8)
    }

    pub fn set_group2(&mut self, group: u32, value: u8) {
        let bit_index = group * 2;
        self.set_bit(bit_index, value & 1 != 0);
        self.set_bit(bit_index + 1, value & 0b10 != 0);
    }

    /// packs this code into the low bits of a 32-byte [`Geohash`] (little-endian).
    pub fn to_geohash(&self) -> Geohash {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.limbs.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        Geohash(bytes)
    }

    pub fn from_geohash(g: &Geohash) -> Self {
        let mut limbs = [0u64; 4];
        for i in 0..4 {
            limbs[i] = u64::from_le_bytes(g.0[i * 8..i * 8 + 8].try_into().unwrap());
        }
        MortonCode { limbs }
    }
}

impl fmt::Display for MortonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

/// opaque 32-byte geohash identifier (spec §3.1). Any 32-byte value is a
/// valid `Geohash` — the index does not require it to have come from the
/// rasterizer (spec §9 design note, preserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Geohash(pub [u8; 32]);

impl Geohash {
    pub const ZERO: Geohash = Geohash([0u8; 32]);

    pub fn from_morton(code: &MortonCode) -> Self {
        code.to_geohash()
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// opaque 32-byte OIR identifier (spec §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OirId(pub [u8; 32]);

impl OirId {
    pub const ZERO: OirId = OirId([0u8; 32]);
}

impl fmt::Display for OirId {
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
    fn shift2_or_round_trips_through_groups() {
        let mut code = MortonCode::ZERO;
        code = code.shift2_or(0b01);
        code = code.shift2_or(0b10);
        code = code.shift2_or(0b11);
        // most recently OR'd quadrant is in the lowest group
        assert_eq!(code.group2(0), 0b11);
        assert_eq!(code.group2(1), 0b10);
        assert_eq!(code.group2(2), 0b01);
    }

    #[test]
    fn geohash_packing_round_trips() {
        let code = MortonCode::from_u64(0xDEAD_BEEF_1234_5678);
        let gh = code.to_geohash();
        let back = MortonCode::from_geohash(&gh);
        assert_eq!(code, back);
    }

    #[test]
    fn as_u64_none_when_high_limbs_set() {
        let code = MortonCode::from_limbs([1, 1, 0, 0]);
        assert!(code.as_u64().is_none());
        let code = MortonCode::from_limbs([1, 0, 0, 0]);
        assert_eq!(code.as_u64(), Some(1));
    }
}
