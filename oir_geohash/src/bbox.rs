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
//! C3 — bounding-box analyzer: min/max over the vertex set, corner Morton
//! codes, and grid width/height measured by single-stepping (per §4.2,
//! the sole sanctioned way to measure grid distance).

use oir_common::{FixedCoord, MortonCode, Precision};

use crate::codec::{lat_lon_to_morton, step_morton, Direction};
use crate::errors::{invalid_argument, RasterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_lat: FixedCoord,
    pub min_lon: FixedCoord,
    pub max_lat: FixedCoord,
    pub max_lon: FixedCoord,
    pub bl: MortonCode,
    pub tl: MortonCode,
    pub tr: MortonCode,
    pub width: u64,
    pub height: u64,
}

/// computes the bounding box of `vertices` at `precision`. Requires at
/// least one vertex; the `>= 3` polygon-vertex check is the orchestrator's
/// job (C6), since a bare bounding box is also used standalone by callers
/// that don't need a closed polygon.
pub fn compute_bounding_box(vertices: &[(FixedCoord, FixedCoord)], precision: Precision) -> RasterResult<BoundingBox> {
    if vertices.is_empty() {
        return Err(invalid_argument("bounding box requires at least one vertex"));
    }

    let mut min_lat = vertices[0].0;
    let mut max_lat = vertices[0].0;
    let mut min_lon = vertices[0].1;
    let mut max_lon = vertices[0].1;
    for &(lat, lon) in &vertices[1..] {
        if lat.raw() < min_lat.raw() {
            min_lat = lat;
        }
        if lat.raw() > max_lat.raw() {
            max_lat = lat;
        }
        if lon.raw() < min_lon.raw() {
            min_lon = lon;
        }
        if lon.raw() > max_lon.raw() {
            max_lon = lon;
        }
    }

    let bl = lat_lon_to_morton(min_lat, min_lon, precision)?;
    let tl = lat_lon_to_morton(max_lat, min_lon, precision)?;
    let tr = lat_lon_to_morton(max_lat, max_lon, precision)?;

    // count_steps returns the number of transitions between bl/tl and
    // tl/tr; the number of distinct rows/columns spanned is one more than
    // that (e.g. one step between two adjacent rows still spans 2 rows).
    let height = count_steps(bl, tl, precision, Direction::Up)? + 1;
    let width = count_steps(tl, tr, precision, Direction::Right)? + 1;

    Ok(BoundingBox {
        min_lat,
        min_lon,
        max_lat,
        max_lon,
        bl,
        tl,
        tr,
        width,
        height,
    })
}

/// single-steps `from` toward `to` in `direction`, counting steps until
/// equal. Bounded by the grid side length as a safety cap: `from` and `to`
/// are corners of the same bounding box, so the true distance never
/// exceeds `grid_side`.
fn count_steps(from: MortonCode, to: MortonCode, precision: Precision, direction: Direction) -> RasterResult<u64> {
    if from == to {
        return Ok(0);
    }
    let cap = precision.grid_side();
    let mut current = from;
    for steps in 1..=cap {
        current = step_morton(current, precision, direction);
        if current == to {
            return Ok(steps);
        }
    }
    Err(invalid_argument("bounding box corners unreachable by single-stepping"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> Precision {
        Precision::new(n).unwrap()
    }

    #[test]
    fn bbox_dimensions_at_least_one() {
        let precision = p(2);
        let verts = vec![
            (FixedCoord::from_degrees_str("0").unwrap(), FixedCoord::from_degrees_str("0").unwrap()),
            (FixedCoord::from_degrees_str("45").unwrap(), FixedCoord::from_degrees_str("0").unwrap()),
            (FixedCoord::from_degrees_str("0").unwrap(), FixedCoord::from_degrees_str("45").unwrap()),
        ];
        let bbox = compute_bounding_box(&verts, precision).unwrap();
        assert!(bbox.width >= 1);
        assert!(bbox.height >= 1);
    }

    #[test]
    fn single_point_bbox_has_unit_dimensions() {
        let precision = p(3);
        let pt = (FixedCoord::from_degrees_str("10").unwrap(), FixedCoord::from_degrees_str("20").unwrap());
        let bbox = compute_bounding_box(&[pt], precision).unwrap();
        assert_eq!(bbox.width, 1);
        assert_eq!(bbox.height, 1);
        assert_eq!(bbox.bl, bbox.tl);
        assert_eq!(bbox.tl, bbox.tr);
    }
}
