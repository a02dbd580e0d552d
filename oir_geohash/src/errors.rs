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
use oir_common::CommonError;
use thiserror::Error;

pub type RasterResult<T> = std::result::Result<T, RasterError>;

/// the rasterizer never mutates host state (spec §7), so it only ever
/// surfaces `InvalidArgument` — kept as its own enum rather than reusing
/// `oir_index::IndexError` so the two crates stay independently usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Scalar(#[from] CommonError),
}

pub fn invalid_argument(msg: impl ToString) -> RasterError {
    RasterError::InvalidArgument(msg.to_string())
}
