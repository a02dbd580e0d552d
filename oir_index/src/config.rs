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
//! configuration (SPEC_FULL §3.3): precision is an immutable system
//! parameter, loaded once at construction the way ODIN crates load an
//! immutable `*.ron` config at startup. This crate only derives
//! `Deserialize` and leaves the actual format (RON, JSON, ...) to the host.

use oir_common::Precision;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IndexConfig {
    pub precision: Precision,
}

impl IndexConfig {
    pub fn new(precision: Precision) -> Self {
        IndexConfig { precision }
    }
}
