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
//! C4 — edge rasterizer: DDA on the Morton grid. Marks every cell a
//! segment touches into a covering-set, 4-connected, with the vertex
//! tie-break from §4.3 preserved exactly as the spec's integer-exact `10`.

use std::collections::HashSet;

use oir_common::{mul_div, FixedCoord, MortonCode, Precision, U256};

use crate::codec::{lat_lon_to_morton, step_morton, Direction};
use crate::errors::RasterResult;

/// the squared-fixed-point tie-break threshold for vertex crossings (§4.3).
/// Deliberately not widened: a larger threshold would double-mark cells at
/// ordinary (non-vertex) crossings.
const VERTEX_THRESHOLD: u128 = 10;

pub type CoveringSet = HashSet<MortonCode>;

fn floor_to_multiple(x: i128, size: i128) -> i128 {
    x.div_euclid(size) * size
}

/// marks every cell the segment `(lat1, lon1) -> (lat2, lon2)` touches,
/// including both endpoints, into `cover`.
pub fn rasterize_edge(
    p1: (FixedCoord, FixedCoord),
    p2: (FixedCoord, FixedCoord),
    precision: Precision,
    cover: &mut CoveringSet,
) -> RasterResult<()> {
    let (lat1, lon1) = p1;
    let (lat2, lon2) = p2;

    if lat1 == lat2 && lon1 == lon2 {
        cover.insert(lat_lon_to_morton(lat1, lon1, precision)?);
        return Ok(());
    }

    if lat1 == lat2 {
        let dir = if lon2.raw() > lon1.raw() { Direction::Right } else { Direction::Left };
        let start = lat_lon_to_morton(lat1, lon1, precision)?;
        let end = lat_lon_to_morton(lat2, lon2, precision)?;
        mark_line(cover, start, end, precision, dir);
        return Ok(());
    }

    if lon1 == lon2 {
        let dir = if lat2.raw() > lat1.raw() { Direction::Up } else { Direction::Down };
        let start = lat_lon_to_morton(lat1, lon1, precision)?;
        let end = lat_lon_to_morton(lat2, lon2, precision)?;
        mark_line(cover, start, end, precision, dir);
        return Ok(());
    }

    rasterize_edge_general(lat1, lon1, lat2, lon2, precision, cover)?;

    // endpoints are always marked, idempotently, regardless of where the
    // DDA loop left off.
    cover.insert(lat_lon_to_morton(lat1, lon1, precision)?);
    cover.insert(lat_lon_to_morton(lat2, lon2, precision)?);
    Ok(())
}

fn mark_line(cover: &mut CoveringSet, mut current: MortonCode, target: MortonCode, precision: Precision, dir: Direction) {
    cover.insert(current);
    while current != target {
        current = step_morton(current, precision, dir);
        cover.insert(current);
    }
}

/// squared distance from `(lat1, lon1)` to the point where the segment
/// (slope `dlon/dlat`) crosses the latitude line `lat_line`. The
/// longitude at that crossing is computed with a single truncating
/// division (`mul_div`) — the ULP error this introduces is exactly what
/// the vertex-crossing threshold in §4.3 exists to absorb.
fn squared_dist_to_lat_line(lat1: i128, lon1: i128, dlat: i128, dlon: i128, lat_line: i128) -> U256 {
    let d_lat = lat_line - lat1;
    let lon_at = lon1 + mul_div(dlon, d_lat, dlat);
    let d_lon = lon_at - lon1;
    U256::from_squared_i128(d_lat).add(U256::from_squared_i128(d_lon))
}

fn squared_dist_to_lon_line(lat1: i128, lon1: i128, dlat: i128, dlon: i128, lon_line: i128) -> U256 {
    let d_lon = lon_line - lon1;
    let lat_at = lat1 + mul_div(dlat, d_lon, dlon);
    let d_lat = lat_at - lat1;
    U256::from_squared_i128(d_lon).add(U256::from_squared_i128(d_lat))
}

#[allow(clippy::too_many_arguments)]
fn rasterize_edge_general(
    lat1: FixedCoord,
    lon1: FixedCoord,
    lat2: FixedCoord,
    lon2: FixedCoord,
    precision: Precision,
    cover: &mut CoveringSet,
) -> RasterResult<()> {
    let (lat1, lon1, lat2, lon2) = (lat1.raw(), lon1.raw(), lat2.raw(), lon2.raw());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let lat_dir = if dlat > 0 { Direction::Up } else { Direction::Down };
    let lon_dir = if dlon > 0 { Direction::Right } else { Direction::Left };

    let cell_lat = precision.grid_cell_lat_size();
    let cell_lon = precision.grid_cell_lon_size();

    let mut next_lat_line = {
        let floor = floor_to_multiple(lat1, cell_lat);
        match lat_dir {
            Direction::Up => floor + cell_lat,
            Direction::Down => {
                if floor == lat1 {
                    floor - cell_lat
                } else {
                    floor
                }
            }
            _ => unreachable!(),
        }
    };
    let mut next_lon_line = {
        let floor = floor_to_multiple(lon1, cell_lon);
        match lon_dir {
            Direction::Right => floor + cell_lon,
            Direction::Left => {
                if floor == lon1 {
                    floor - cell_lon
                } else {
                    floor
                }
            }
            _ => unreachable!(),
        }
    };

    let mut d_lat2 = squared_dist_to_lat_line(lat1, lon1, dlat, dlon, next_lat_line);
    let mut d_lon2 = squared_dist_to_lon_line(lat1, lon1, dlat, dlon, next_lon_line);
    let d_end2 = U256::from_squared_i128(dlat).add(U256::from_squared_i128(dlon));

    // first cell: the one containing the midpoint between the start point
    // and whichever grid line is crossed first.
    let lon_at_lat_line = lon1 + mul_div(dlon, next_lat_line - lat1, dlat);
    let lat_at_lon_line = lat1 + mul_div(dlat, next_lon_line - lon1, dlon);
    let (first_lat, first_lon) = if d_lat2 <= d_lon2 {
        (next_lat_line, lon_at_lat_line)
    } else {
        (lat_at_lon_line, next_lon_line)
    };
    let mid_lat = (lat1 + first_lat) / 2;
    let mid_lon = (lon1 + first_lon) / 2;
    let mut current = lat_lon_to_morton(FixedCoord::from_raw(mid_lat), FixedCoord::from_raw(mid_lon), precision)?;
    cover.insert(current);

    let threshold = U256::from_u128(VERTEX_THRESHOLD);

    while d_lat2 < d_end2 || d_lon2 < d_end2 {
        if d_lat2.abs_diff(d_lon2) <= threshold {
            let lat_neighbor = step_morton(current, precision, lat_dir);
            cover.insert(lat_neighbor);
            let lon_neighbor = step_morton(current, precision, lon_dir);
            cover.insert(lon_neighbor);
            let diagonal = step_morton(lat_neighbor, precision, lon_dir);
            cover.insert(diagonal);
            current = diagonal;

            next_lat_line += match lat_dir {
                Direction::Up => cell_lat,
                Direction::Down => -cell_lat,
                _ => unreachable!(),
            };
            next_lon_line += match lon_dir {
                Direction::Right => cell_lon,
                Direction::Left => -cell_lon,
                _ => unreachable!(),
            };
            d_lat2 = squared_dist_to_lat_line(lat1, lon1, dlat, dlon, next_lat_line);
            d_lon2 = squared_dist_to_lon_line(lat1, lon1, dlat, dlon, next_lon_line);
        } else if d_lat2 < d_lon2 {
            current = step_morton(current, precision, lat_dir);
            cover.insert(current);
            next_lat_line += match lat_dir {
                Direction::Up => cell_lat,
                Direction::Down => -cell_lat,
                _ => unreachable!(),
            };
            d_lat2 = squared_dist_to_lat_line(lat1, lon1, dlat, dlon, next_lat_line);
        } else {
            current = step_morton(current, precision, lon_dir);
            cover.insert(current);
            next_lon_line += match lon_dir {
                Direction::Right => cell_lon,
                Direction::Left => -cell_lon,
                _ => unreachable!(),
            };
            d_lon2 = squared_dist_to_lon_line(lat1, lon1, dlat, dlon, next_lon_line);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> Precision {
        Precision::new(n).unwrap()
    }

    fn pt(lat: &str, lon: &str) -> (FixedCoord, FixedCoord) {
        (FixedCoord::from_degrees_str(lat).unwrap(), FixedCoord::from_degrees_str(lon).unwrap())
    }

    #[test]
    fn degenerate_point_marks_single_cell() {
        let precision = p(4);
        let mut cover = CoveringSet::new();
        let a = pt("10", "10");
        rasterize_edge(a, a, precision, &mut cover).unwrap();
        assert_eq!(cover.len(), 1);
    }

    #[test]
    fn horizontal_segment_marks_contiguous_row() {
        let precision = p(3);
        let mut cover = CoveringSet::new();
        rasterize_edge(pt("0", "0"), pt("0", "45"), precision, &mut cover).unwrap();
        assert!(cover.len() >= 2);
    }

    #[test]
    fn edge_rasterization_is_symmetric() {
        let precision = p(5);
        let a = pt("-10", "-20");
        let b = pt("30", "40");
        let mut forward = CoveringSet::new();
        rasterize_edge(a, b, precision, &mut forward).unwrap();
        let mut backward = CoveringSet::new();
        rasterize_edge(b, a, precision, &mut backward).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn diagonal_segment_marks_both_endpoints() {
        let precision = p(4);
        let a = pt("-5", "-5");
        let b = pt("5", "5");
        let mut cover = CoveringSet::new();
        rasterize_edge(a, b, precision, &mut cover).unwrap();
        assert!(cover.contains(&lat_lon_to_morton(a.0, a.1, precision).unwrap()));
        assert!(cover.contains(&lat_lon_to_morton(b.0, b.1, precision).unwrap()));
    }
}
