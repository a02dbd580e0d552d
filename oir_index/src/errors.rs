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

pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// spec §7's four error kinds, one variant apiece. All are fatal to the
/// current call — no partial commit is ever visible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("state conflict: {0}")]
    StateConflict(String),

    #[error("internal invariant violated: {0}")]
    Internal(String),

    #[error(transparent)]
    Scalar(#[from] CommonError),
}

pub fn unauthorized(msg: impl ToString) -> IndexError {
    IndexError::Unauthorized(msg.to_string())
}

pub fn invalid_argument(msg: impl ToString) -> IndexError {
    IndexError::InvalidArgument(msg.to_string())
}

pub fn state_conflict(msg: impl ToString) -> IndexError {
    IndexError::StateConflict(msg.to_string())
}

pub fn internal(msg: impl ToString) -> IndexError {
    IndexError::Internal(msg.to_string())
}
