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
//! The OIR index: a keyed multi-map over geohash cells (spec §4.6), guarded
//! by a single owner + allow-list (C8), exposed directly as the public API
//! (C9 — this crate has no separate transport/bindings layer).

pub mod auth;
pub mod config;
pub mod errors;
pub mod events;
pub mod index;
pub mod principal;
pub mod record;

pub use auth::Authorization;
pub use config::IndexConfig;
pub use errors::{IndexError, IndexResult};
pub use events::{EventSink, IndexEvent};
pub use index::OirIndex;
pub use principal::Principal;
pub use record::OirRecord;
