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
//! C1 — fixed-point scalar types.
//!
//! All coordinate math is exact integer arithmetic (Non-goal: floating
//! point). Latitude/longitude are `FixedCoord`s with an implicit scale of
//! `DECIMALS_FACTOR = 10^18`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::errors::{CommonError, CommonResult};

/// implicit scale factor for every `FixedCoord` value.
pub const DECIMALS_FACTOR: i128 = 1_000_000_000_000_000_000;

pub const MIN_LAT: i128 = -90 * DECIMALS_FACTOR;
pub const MAX_LAT: i128 = 90 * DECIMALS_FACTOR;
pub const MIN_LON: i128 = -180 * DECIMALS_FACTOR;
pub const MAX_LON: i128 = 180 * DECIMALS_FACTOR;

pub const MAX_PRECISION: u8 = 16;

/// signed fixed-point coordinate, scaled by [`DECIMALS_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixedCoord(pub i128);

impl FixedCoord {
    #[inline]
    pub fn raw(self) -> i128 {
        self.0
    }

    #[inline]
    pub fn from_raw(v: i128) -> Self {
        FixedCoord(v)
    }

    /// constructs a `FixedCoord` from a decimal-degree value, e.g.
    /// `FixedCoord::from_degrees_str("45.5")`. Kept integer-exact by parsing
    /// the string rather than going through `f64`.
    pub fn from_degrees_str(s: &str) -> CommonResult<Self> {
        let (sign, s) = match s.strip_prefix('-') {
            Some(rest) => (-1i128, rest),
            None => (1i128, s.strip_prefix('+').unwrap_or(s)),
        };
        let mut parts = s.splitn(2, '.');
        let int_part: i128 = parts
            .next()
            .unwrap_or("0")
            .parse()
            .map_err(|_| CommonError::CoordOutOfRange(s.to_string()))?;
        let frac_str = parts.next().unwrap_or("");
        if frac_str.len() > 18 {
            return Err(CommonError::CoordOutOfRange(format!(
                "too many fractional digits: {s}"
            )));
        }
        let mut frac: i128 = if frac_str.is_empty() {
            0
        } else {
            frac_str
                .parse()
                .map_err(|_| CommonError::CoordOutOfRange(s.to_string()))?
        };
        for _ in frac_str.len()..18 {
            frac *= 10;
        }
        Ok(FixedCoord(sign * (int_part * DECIMALS_FACTOR + frac)))
    }

    pub fn validate_lat(self) -> CommonResult<Self> {
        if self.0 < MIN_LAT || self.0 > MAX_LAT {
            Err(CommonError::CoordOutOfRange(format!("latitude {} out of range", self.0)))
        } else {
            Ok(self)
        }
    }

    pub fn validate_lon(self) -> CommonResult<Self> {
        if self.0 < MIN_LON || self.0 > MAX_LON {
            Err(CommonError::CoordOutOfRange(format!("longitude {} out of range", self.0)))
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for FixedCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / DECIMALS_FACTOR;
        let frac = (self.0 % DECIMALS_FACTOR).abs();
        write!(f, "{whole}.{frac:018}")
    }
}

impl Add for FixedCoord {
    type Output = FixedCoord;
    fn add(self, rhs: FixedCoord) -> FixedCoord {
        FixedCoord(self.0 + rhs.0)
    }
}
impl Sub for FixedCoord {
    type Output = FixedCoord;
    fn sub(self, rhs: FixedCoord) -> FixedCoord {
        FixedCoord(self.0 - rhs.0)
    }
}
impl Neg for FixedCoord {
    type Output = FixedCoord;
    fn neg(self) -> FixedCoord {
        FixedCoord(-self.0)
    }
}

/// number of recursive grid bisections, immutable per rasterizer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Precision(u8);

// `#[derive(Deserialize)]` would construct `Precision` from any `u8`,
// bypassing `new`'s range check — a config file with `precision: 200` must
// fail to parse, not silently carry an invalid instance.
impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Precision::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Precision {
    pub fn new(p: u8) -> CommonResult<Self> {
        if p < 1 || p > MAX_PRECISION {
            Err(CommonError::PrecisionOutOfRange(p, MAX_PRECISION))
        } else {
            Ok(Precision(p))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `180 * 10^18 / 2^p`
    pub fn grid_cell_lat_size(self) -> i128 {
        (180 * DECIMALS_FACTOR) >> self.0
    }

    /// `360 * 10^18 / 2^p`
    pub fn grid_cell_lon_size(self) -> i128 {
        (360 * DECIMALS_FACTOR) >> self.0
    }

    /// `2^p`, the grid's side length in cells.
    pub fn grid_side(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
