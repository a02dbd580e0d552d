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
use thiserror::Error;

pub type CommonResult<T> = std::result::Result<T, CommonError>;

/// errors shared by the scalar/wide-arithmetic layer; domain crates define
/// their own richer error enums (`oir_geohash::RasterError`,
/// `oir_index::IndexError`) and wrap this one with `#[from]` where a
/// scalar-level failure can surface through them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("coordinate out of range: {0}")]
    CoordOutOfRange(String),

    #[error("precision out of range: {0} (max {1})")]
    PrecisionOutOfRange(u8, u8),

    #[error("operation failed: {0}")]
    OpFailed(String),
}

pub fn op_failed(msg: impl ToString) -> CommonError {
    CommonError::OpFailed(msg.to_string())
}
