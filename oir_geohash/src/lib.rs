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
//! Polygon-to-geohash rasterizer: Z-order codec and neighbor stepping
//! (C2), bounding-box analysis (C3), DDA edge rasterization (C4), the
//! two-pass fill engine (C5), and the orchestrator that drives them (C6).
//! Pure with respect to external state — every call's scratch (covering
//! set, label map, equivalence list, debug buffer) is local to that call.

pub mod bbox;
pub mod codec;
pub mod errors;
pub mod fill;
pub mod orchestrator;
pub mod raster;

pub use bbox::{compute_bounding_box, BoundingBox};
pub use codec::{lat_lon_to_morton, morton_cell_bounds, morton_to_lat_lon, step_morton, Direction};
pub use errors::{RasterError, RasterResult};
pub use fill::{fill_interior, CellLabelDebug, FillDebug};
pub use orchestrator::{process_polygon, CellTrace, RasterDebug, RasterOutput};
pub use raster::{rasterize_edge, CoveringSet};
