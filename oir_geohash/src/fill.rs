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
//! C5 — fill engine: two-pass connected-component labeling over the
//! bounding box (guarded so label 0 always means "outside"), an
//! always-flattened equivalence list, and ray-casting inside
//! classification.

use std::cmp::Ordering;
use std::collections::HashMap;

use oir_common::{cmp_products, FixedCoord, MortonCode, Precision};

use crate::bbox::BoundingBox;
use crate::codec::{morton_to_lat_lon, step_morton, Direction};
use crate::raster::CoveringSet;

/// equivalence list where every label maps directly to its current
/// terminal representative (§4.4's "flattened form" — deliberately O(n)
/// per merge rather than union-find with path compression, per §9).
struct EquivalenceList {
    rep: Vec<u32>,
}

impl EquivalenceList {
    fn new() -> Self {
        // label 0 always exists and is its own terminal: the "outside" label.
        EquivalenceList { rep: vec![0] }
    }

    fn add_label(&mut self) -> u32 {
        let k = self.rep.len() as u32;
        self.rep.push(k);
        k
    }

    fn is_terminal(&self, label: u32) -> bool {
        self.rep[label as usize] == label
    }

    /// the four-case merge from §4.4.
    fn upsert(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let a_terminal = self.is_terminal(a);
        let b_terminal = self.is_terminal(b);
        match (a_terminal, b_terminal) {
            (true, true) => {
                for r in self.rep.iter_mut() {
                    if *r == a {
                        *r = b;
                    }
                }
            }
            (true, false) => {
                let rep_b = self.rep[b as usize];
                for r in self.rep.iter_mut() {
                    if *r == a {
                        *r = rep_b;
                    }
                }
            }
            (false, true) => {
                let rep_a = self.rep[a as usize];
                for r in self.rep.iter_mut() {
                    if *r == b {
                        *r = rep_a;
                    }
                }
            }
            (false, false) => {
                let rep_a = self.rep[a as usize];
                let rep_b = self.rep[b as usize];
                for r in self.rep.iter_mut() {
                    if *r == rep_a {
                        *r = rep_b;
                    }
                }
            }
        }
    }

    fn representative(&self, label: u32) -> u32 {
        self.rep[label as usize]
    }
}

/// precomputes the Morton code of every cell in the real (non-guard)
/// bounding box, row-major with row 0 = the `bl` row.
struct CellGrid {
    width: usize,
    height: usize,
    codes: Vec<MortonCode>,
}

impl CellGrid {
    fn build(bbox: &BoundingBox, precision: Precision) -> Self {
        let width = bbox.width as usize;
        let height = bbox.height as usize;
        let mut codes = Vec::with_capacity(width * height);
        let mut row_start = bbox.bl;
        for i in 0..height {
            if i > 0 {
                row_start = step_morton(row_start, precision, Direction::Up);
            }
            let mut code = row_start;
            for j in 0..width {
                if j > 0 {
                    code = step_morton(code, precision, Direction::Right);
                }
                codes.push(code);
            }
        }
        CellGrid { width, height, codes }
    }

    fn code_at(&self, i: usize, j: usize) -> MortonCode {
        self.codes[i * self.width + j]
    }
}

/// per-cell debug record for C6's optional trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLabelDebug {
    pub original_label: u32,
    pub final_label: u32,
    pub is_inside: bool,
}

/// everything `processPolygon`'s debug mode exposes about the labeling
/// pass: every visited real cell's raw and flattened label plus whether
/// it was classified interior, and the final equivalence list.
#[derive(Debug, Clone, Default)]
pub struct FillDebug {
    pub cells: HashMap<MortonCode, CellLabelDebug>,
    pub equivalences: Vec<u32>,
}

/// adds every interior cell of `vertices` to `cover`, given the edge cells
/// C4 already marked there. Always returns the labeling trace; callers
/// that don't want a debug report simply drop it.
pub fn fill_interior(vertices: &[(FixedCoord, FixedCoord)], precision: Precision, bbox: &BoundingBox, cover: &mut CoveringSet) -> FillDebug {
    let grid = CellGrid::build(bbox, precision);
    let gw = grid.width + 2;
    let gh = grid.height + 2;

    let mut equivalence = EquivalenceList::new();
    // raw label assigned to each guard-enlarged cell, scanned top-to-bottom
    // (gi ascending = real row descending from height down to -1),
    // left-to-right (gj ascending = real col ascending from -1 to width).
    let mut labels = vec![0u32; gw * gh];
    let mut cells_by_raw_label: HashMap<u32, Vec<MortonCode>> = HashMap::new();

    let is_real = |gi: usize, gj: usize| gi >= 1 && gi <= grid.height && gj >= 1 && gj <= grid.width;
    let color = |gi: usize, gj: usize| -> bool {
        if is_real(gi, gj) {
            let real_i = grid.height - gi;
            let real_j = gj - 1;
            cover.contains(&grid.code_at(real_i, real_j))
        } else {
            false
        }
    };

    for gi in 0..gh {
        for gj in 0..gw {
            let current = color(gi, gj);
            let (left_color, left_label) = if gj == 0 { (false, 0u32) } else { (color(gi, gj - 1), labels[gi * gw + gj - 1]) };
            let (up_color, up_label) = if gi == 0 { (false, 0u32) } else { (color(gi - 1, gj), labels[(gi - 1) * gw + gj]) };

            let label = if current == left_color && current != up_color {
                left_label
            } else if current != left_color && current == up_color {
                up_label
            } else if current == left_color && current == up_color {
                equivalence.upsert(up_label, left_label);
                left_label
            } else {
                equivalence.add_label()
            };

            labels[gi * gw + gj] = label;

            if is_real(gi, gj) {
                let real_i = grid.height - gi;
                let real_j = gj - 1;
                cells_by_raw_label.entry(label).or_default().push(grid.code_at(real_i, real_j));
            }
        }
    }

    let mut debug = FillDebug { cells: HashMap::new(), equivalences: equivalence.rep.clone() };

    for (raw_label, cells) in cells_by_raw_label {
        let final_label = equivalence.representative(raw_label);
        let inside = if final_label == 0 {
            false // equivalent to the outside border
        } else {
            let test_cell = cells[0];
            let (p_lat, p_lon) = morton_to_lat_lon(test_cell, precision);
            is_inside(p_lat, p_lon, vertices)
        };
        if inside {
            cover.extend(cells.iter().copied());
        }
        for cell in cells {
            debug.cells.insert(
                cell,
                CellLabelDebug {
                    original_label: raw_label,
                    final_label,
                    is_inside: inside,
                },
            );
        }
    }

    debug
}

/// ray-casts horizontally to the right (+longitude) from `p` and returns
/// whether the crossing count is odd (§4.4 pass 2).
fn is_inside(p_lat: FixedCoord, p_lon: FixedCoord, vertices: &[(FixedCoord, FixedCoord)]) -> bool {
    let n = vertices.len();
    let p_lat = p_lat.raw();
    let p_lon = p_lon.raw();
    let mut count = 0u32;

    // vertex crossings: a ray passing exactly through a polygon vertex.
    // Skip every vertex but the first in a same-lat run — the run shares
    // one bracketing prev/next pair, so it is one crossing event, not one
    // per vertex in the run.
    for i in 0..n {
        let v = vertices[i];
        if v.0.raw() != p_lat || v.1.raw() <= p_lon {
            continue;
        }
        let prev_index = (i + n - 1) % n;
        if vertices[prev_index].0.raw() == p_lat {
            continue;
        }
        let prev = first_non_horizontal_before(vertices, i, v.0.raw());
        let next = first_non_horizontal_after(vertices, i, v.0.raw());
        if let (Some(prev_lat), Some(next_lat)) = (prev, next) {
            let side_prev = prev_lat > p_lat;
            let side_next = next_lat > p_lat;
            if side_prev != side_next {
                count += 1;
            }
        }
    }

    // open-edge crossings, strictly between endpoint latitudes (this
    // naturally excludes vertex-on-ray cases, handled above).
    for i in 0..n {
        let (lat1, lon1) = (vertices[i].0.raw(), vertices[i].1.raw());
        let (lat2, lon2) = (vertices[(i + 1) % n].0.raw(), vertices[(i + 1) % n].1.raw());
        if lat1 == lat2 {
            continue; // horizontal edges are ignored
        }
        let (lo, hi) = if lat1 < lat2 { (lat1, lat2) } else { (lat2, lat1) };
        if !(p_lat > lo && p_lat < hi) {
            continue;
        }

        let min_lon = lon1.min(lon2);
        let max_lon = lon1.max(lon2);
        let crosses = if p_lon < min_lon {
            true // rectangle region: edge entirely to the right
        } else if p_lon > max_lon {
            false // entirely to the left
        } else {
            let ordering = cmp_products(p_lat - lat1, lon2 - lon1, lat2 - lat1, p_lon - lon1);
            let lat_dir_up = lat2 > lat1;
            let lon_dir_right = lon2 > lon1;
            match (lat_dir_up, lon_dir_right) {
                (true, true) | (false, false) => ordering == Ordering::Greater,
                (true, false) | (false, true) => ordering == Ordering::Less,
            }
        };
        if crosses {
            count += 1;
        }
    }

    count % 2 == 1
}

fn first_non_horizontal_before(vertices: &[(FixedCoord, FixedCoord)], i: usize, v_lat: i128) -> Option<i128> {
    let n = vertices.len();
    let mut k = (i + n - 1) % n;
    for _ in 0..n {
        let lat = vertices[k].0.raw();
        if lat != v_lat {
            return Some(lat);
        }
        k = (k + n - 1) % n;
    }
    None
}

fn first_non_horizontal_after(vertices: &[(FixedCoord, FixedCoord)], i: usize, v_lat: i128) -> Option<i128> {
    let n = vertices.len();
    let mut k = (i + 1) % n;
    for _ in 0..n {
        let lat = vertices[k].0.raw();
        if lat != v_lat {
            return Some(lat);
        }
        k = (k + 1) % n;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::compute_bounding_box;
    use crate::raster::rasterize_edge;
    use oir_common::Precision;

    fn p(n: u8) -> Precision {
        Precision::new(n).unwrap()
    }

    fn pt(lat: &str, lon: &str) -> (FixedCoord, FixedCoord) {
        (FixedCoord::from_degrees_str(lat).unwrap(), FixedCoord::from_degrees_str(lon).unwrap())
    }

    fn rasterize_polygon_edges(vertices: &[(FixedCoord, FixedCoord)], precision: Precision, cover: &mut CoveringSet) {
        let n = vertices.len();
        for i in 0..n {
            rasterize_edge(vertices[i], vertices[(i + 1) % n], precision, cover).unwrap();
        }
    }

    #[test]
    fn triangle_interior_is_filled() {
        let precision = p(3);
        let vertices = vec![pt("0", "0"), pt("45", "0"), pt("0", "45")];
        let bbox = compute_bounding_box(&vertices, precision).unwrap();
        let mut cover = CoveringSet::new();
        rasterize_polygon_edges(&vertices, precision, &mut cover);
        let edge_count = cover.len();
        let debug = fill_interior(&vertices, precision, &bbox, &mut cover);
        assert!(!debug.cells.is_empty());
        assert!(cover.len() >= edge_count);
        assert!(!cover.is_empty());
    }

    #[test]
    fn point_far_outside_triangle_is_not_interior() {
        let vertices = vec![pt("0", "0"), pt("45", "0"), pt("0", "45")];
        assert!(!is_inside(FixedCoord::from_degrees_str("60").unwrap(), FixedCoord::from_degrees_str("60").unwrap(), &vertices));
    }

    #[test]
    fn point_inside_triangle_is_interior() {
        let vertices = vec![pt("0", "0"), pt("45", "0"), pt("0", "45")];
        assert!(is_inside(FixedCoord::from_degrees_str("10").unwrap(), FixedCoord::from_degrees_str("10").unwrap(), &vertices));
    }

    #[test]
    fn square_interior_matches_expectation() {
        let vertices = vec![pt("-10", "-10"), pt("10", "-10"), pt("10", "10"), pt("-10", "10")];
        assert!(is_inside(FixedCoord::from_degrees_str("0").unwrap(), FixedCoord::from_degrees_str("0").unwrap(), &vertices));
        assert!(!is_inside(FixedCoord::from_degrees_str("20").unwrap(), FixedCoord::from_degrees_str("0").unwrap(), &vertices));
    }
}
