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

use std::fmt;
use serde::Serialize;
use skyspot_common::{
    geo::{three_d_distance, initial_bearing, is_below_horizon, GeoPos, HorizonModel},
    numfmt::to_fixed,
};
use crate::aircraft::AircraftData;

/// where to look for the aircraft, as seen from the observer
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct SpotResult {
    pub distance_km: f64, // slant distance approximation
    pub bearing_deg: f64, // [0,360)
    pub below_horizon: bool,
}

impl SpotResult {
    /// km with two fractional digits
    pub fn distance (&self)->String { to_fixed( self.distance_km, 2) }

    /// whole degrees. Note this can read "360" for bearings just below north
    pub fn bearing (&self)->String { to_fixed( self.bearing_deg, 0) }
}

impl fmt::Display for SpotResult {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km at {}°", self.distance(), self.bearing())?;
        if self.below_horizon { write!(f, " (below horizon)")?; }
        Ok(())
    }
}

pub fn spot_it (observer: &GeoPos, aircraft: &AircraftData, horizon: HorizonModel)->SpotResult {
    let (o, a) = (observer, aircraft);

    SpotResult {
        distance_km: three_d_distance( o.lat_deg, o.lon_deg, o.alt_m, a.lat_deg, a.lon_deg, a.alt_m),
        bearing_deg: initial_bearing( o.lat_deg, o.lon_deg, a.lat_deg, a.lon_deg),
        below_horizon: is_below_horizon( o.lat_deg, o.lon_deg, o.alt_m, a.lat_deg, a.lon_deg, a.alt_m, horizon),
    }
}
