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
//! C6 — rasterizer orchestrator: drives C3 -> C4 -> C5 to produce the
//! covering cell set for a polygon, with an optional debug trace.

use oir_common::{FixedCoord, MortonCode, Precision, MAX_PRECISION};

use crate::bbox::{compute_bounding_box, BoundingBox};
use crate::errors::{invalid_argument, RasterResult};
use crate::fill::{fill_interior, FillDebug};
use crate::raster::{rasterize_edge, CoveringSet};

/// debug trace for a single rasterized cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTrace {
    pub cell: MortonCode,
    pub original_label: u32,
    pub final_label: u32,
    pub is_inside: bool,
    pub is_edge: bool,
}

/// everything `processPolygon(.., debug = true)` returns beyond the plain
/// cell set.
#[derive(Debug, Clone)]
pub struct RasterDebug {
    pub cells: Vec<CellTrace>,
    pub equivalences: Vec<u32>,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone)]
pub struct RasterOutput {
    pub cells: CoveringSet,
    pub debug: Option<RasterDebug>,
}

/// `processPolygon` (§4.5). The polygon is implicitly closed: the caller
/// does not repeat the first vertex.
pub fn process_polygon(vertices: &[(FixedCoord, FixedCoord)], precision: Precision, debug: bool) -> RasterResult<RasterOutput> {
    if vertices.len() < 3 {
        return Err(invalid_argument(format!("polygon needs at least 3 vertices, got {}", vertices.len())));
    }
    if precision.get() > MAX_PRECISION {
        return Err(invalid_argument(format!("precision {} exceeds max {}", precision.get(), MAX_PRECISION)));
    }

    let bbox = compute_bounding_box(vertices, precision)?;

    let mut cover = CoveringSet::new();
    let n = vertices.len();
    for i in 0..n {
        rasterize_edge(vertices[i], vertices[(i + 1) % n], precision, &mut cover)?;
    }
    let edge_cells: CoveringSet = cover.clone();

    let fill_debug: FillDebug = fill_interior(vertices, precision, &bbox, &mut cover);

    let output_debug = if debug {
        let mut trace = Vec::with_capacity(fill_debug.cells.len());
        for (cell, info) in &fill_debug.cells {
            trace.push(CellTrace {
                cell: *cell,
                original_label: info.original_label,
                final_label: info.final_label,
                is_inside: info.is_inside,
                is_edge: edge_cells.contains(cell),
            });
        }
        Some(RasterDebug {
            cells: trace,
            equivalences: fill_debug.equivalences,
            bbox,
        })
    } else {
        None
    };

    Ok(RasterOutput { cells: cover, debug: output_debug })
}
