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

//! spherical earth constants. All skyspot geometry uses a single mean radius, there is no ellipsoid

/// mean earth radius in kilometers
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// mean earth radius in meters
pub const MEAN_EARTH_RADIUS: f64 = MEAN_EARTH_RADIUS_KM * 1000.0;

pub const METERS_PER_KM: f64 = 1000.0;

/// the (rounded) factor used to display meter values in feet
pub const FEET_PER_METER: f64 = 3.281;
