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
//! Foundation types shared by the rasterizer (`oir_geohash`) and the index
//! (`oir_index`): fixed-point scalars, wide intermediate arithmetic, the
//! `Geohash`/`OirId` identifier types, a small keyed-store abstraction, and
//! the error/macro/collection helpers both crates build on.
#![allow(unused)]

pub mod collections;
pub mod errors;
pub mod fixed;
pub mod macros;
pub mod morton;
pub mod store;
pub mod time;
pub mod wide;

pub use errors::{CommonError, CommonResult};
pub use fixed::{FixedCoord, Precision, DECIMALS_FACTOR, MAX_PRECISION};
pub use morton::{Geohash, MortonCode, OirId};
pub use time::{Altitude, EntityNumber, Timestamp};
pub use wide::{cmp_products, mul_div, U256};
