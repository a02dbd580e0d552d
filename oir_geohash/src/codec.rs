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
//! C2 — Morton codec: lat/lon <-> Z-order integer, plus the single-step
//! neighbor primitive both the edge rasterizer (C4) and the bounding-box
//! analyzer (C3) build on.

use oir_common::fixed::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use oir_common::{FixedCoord, MortonCode, Precision};

use crate::errors::{invalid_argument, RasterResult};

/// one of the four cardinal directions on the Morton grid. `stepMorton` is
/// the sole way anything in this crate enumerates neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// encodes `(lat, lon)` into a [`MortonCode`] at `precision`, per the
/// quadrant table in §4.1: each iteration bisects the active rectangle and
/// left-shifts the accumulated code by 2, OR-ing in the quadrant bits.
/// Ties (`lat == midLat` or `lon == midLon`) fall to the upper/right half.
pub fn lat_lon_to_morton(lat: FixedCoord, lon: FixedCoord, precision: Precision) -> RasterResult<MortonCode> {
    if lat.raw() < MIN_LAT || lat.raw() > MAX_LAT {
        return Err(invalid_argument(format!("latitude {} out of range", lat.raw())));
    }
    if lon.raw() < MIN_LON || lon.raw() > MAX_LON {
        return Err(invalid_argument(format!("longitude {} out of range", lon.raw())));
    }

    let (lat, lon) = (lat.raw(), lon.raw());
    let mut down = MIN_LAT;
    let mut up = MAX_LAT;
    let mut left = MIN_LON;
    let mut right = MAX_LON;

    let mut code = MortonCode::ZERO;
    for _ in 0..precision.get() {
        let mid_lat = (down + up) / 2;
        let mid_lon = (left + right) / 2;
        let quadrant = match (lat >= mid_lat, lon >= mid_lon) {
            (true, false) => {
                down = mid_lat;
                right = mid_lon;
                0b00
            }
            (true, true) => {
                down = mid_lat;
                left = mid_lon;
                0b01
            }
            (false, false) => {
                up = mid_lat;
                right = mid_lon;
                0b10
            }
            (false, true) => {
                up = mid_lat;
                left = mid_lon;
                0b11
            }
        };
        code = code.shift2_or(quadrant);
    }
    Ok(code)
}

/// inverse of [`lat_lon_to_morton`]: replays the same bisections in the
/// order they were applied (most-significant group first) and returns the
/// centroid of the final cell.
pub fn morton_to_lat_lon(code: MortonCode, precision: Precision) -> (FixedCoord, FixedCoord) {
    let p = precision.get() as u32;
    let mut down = MIN_LAT;
    let mut up = MAX_LAT;
    let mut left = MIN_LON;
    let mut right = MAX_LON;

    for level in 0..p {
        let group_index = p - 1 - level;
        let mid_lat = (down + up) / 2;
        let mid_lon = (left + right) / 2;
        match code.group2(group_index) {
            0b00 => {
                down = mid_lat;
                right = mid_lon;
            }
            0b01 => {
                down = mid_lat;
                left = mid_lon;
            }
            0b10 => {
                up = mid_lat;
                right = mid_lon;
            }
            0b11 => {
                up = mid_lat;
                left = mid_lon;
            }
            _ => unreachable!("group2 always returns a 2-bit value"),
        }
    }
    (FixedCoord::from_raw((down + up) / 2), FixedCoord::from_raw((left + right) / 2))
}

/// returns the lat/lon bounds `[down, up] x [left, right]` of the cell `code`
/// occupies at `precision`, without collapsing to a centroid. Used by the
/// fill engine's ray-casting test and by tests that check cell membership.
pub fn morton_cell_bounds(code: MortonCode, precision: Precision) -> (i128, i128, i128, i128) {
    let p = precision.get() as u32;
    let mut down = MIN_LAT;
    let mut up = MAX_LAT;
    let mut left = MIN_LON;
    let mut right = MAX_LON;

    for level in 0..p {
        let group_index = p - 1 - level;
        let mid_lat = (down + up) / 2;
        let mid_lon = (left + right) / 2;
        match code.group2(group_index) {
            0b00 => {
                down = mid_lat;
                right = mid_lon;
            }
            0b01 => {
                down = mid_lat;
                left = mid_lon;
            }
            0b10 => {
                up = mid_lat;
                right = mid_lon;
            }
            0b11 => {
                up = mid_lat;
                left = mid_lon;
            }
            _ => unreachable!(),
        }
    }
    (down, up, left, right)
}

/// one-cell neighbor in `direction`, per the carry-propagating table in
/// §4.1. Walks 2-bit groups from the finest (group 0, least significant)
/// toward the coarsest, toggling the lat bit (Up/Down) or lon bit
/// (Left/Right) at each level and continuing to the next only when the
/// table says the carry doesn't stop here.
pub fn step_morton(code: MortonCode, precision: Precision, direction: Direction) -> MortonCode {
    let p = precision.get() as u32;
    let mut result = code;
    for level in 0..p {
        let g = result.group2(level);
        let lat_bit = (g >> 1) & 1; // 0 = upper half, 1 = lower half
        let lon_bit = g & 1; // 0 = left half, 1 = right half

        let (new_g, stop) = match direction {
            Direction::Up => (g ^ 0b10, lat_bit == 1),
            Direction::Down => (g ^ 0b10, lat_bit == 0),
            Direction::Left => (g ^ 0b01, lon_bit == 1),
            Direction::Right => (g ^ 0b01, lon_bit == 0),
        };
        result.set_group2(level, new_g);
        if stop {
            break;
        }
    }
    result
}
