/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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
#![allow(unused)]

//! skyspot shows where to look for the aircraft that is selected on a flight tracker page: distance,
//! bearing and whether it is below the horizon as seen from a stored observer location.
//!
//! The page is only accessed through the [`page::HostPage`] abstraction. An [`watcher::AircraftWatcher`]
//! tracks the aircraft position fields of the page and publishes their values, which are turned into
//! overlay text by an [`overlay::OverlayController`] that renders to some [`overlay::OverlaySurface`].

pub mod errors;
pub mod config;
pub mod page;
pub mod sim_page;
pub mod aircraft;
pub mod watcher;
pub mod spot;
pub mod store;
pub mod overlay;
pub mod run;
pub mod scenario;

pub use errors::{Result, SpotError};
pub use config::{load_config, load_config_from, SpotConfig, FieldSelectors};
pub use aircraft::AircraftData;
pub use spot::{spot_it, SpotResult};
