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

#![allow(non_snake_case,uncommon_codepoints)]

//! this module provides the spherical-earth geometry between an observer and an aircraft:
//! great circle (haversine) distance, slant distance, initial bearing and horizon visibility.
//!
//! The plain functions take geodetic degrees and altitudes in meters and return kilometers,
//! which is the unit everything is displayed in. [`GeoPos`] wraps them with
//! [uom](https://docs.rs/uom/latest/uom/) lengths and normalized angles for typed callers.

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use uom::si::length::{kilometer,meter};

use crate::{sin, sin2, cos, atan2, sqrt, pow2, deg, rad};
use crate::angle::{Angle360, Latitude, Longitude};
use crate::geo_constants::{MEAN_EARTH_RADIUS_KM, METERS_PER_KM};
use crate::numfmt::to_int32;

/* #region plain functions ****************************************************************************/

/// great circle distance in km between two points given in degrees
pub fn haversine_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let φ1 = rad(lat1);
    let φ2 = rad(lat2);
    let Δφ = rad(lat2 - lat1);
    let Δλ = rad(lon2 - lon1);

    let a = sin2(Δφ / 2.0) + cos(φ1) * cos(φ2) * sin2(Δλ / 2.0);
    let c = 2.0 * atan2( sqrt(a), sqrt(1.0 - a));

    MEAN_EARTH_RADIUS_KM * c
}

/// Euclidean combination of great circle distance and altitude difference (both in km).
/// This is not a true slant range, it ignores curvature between the two points
pub fn three_d_distance (lat1: f64, lon1: f64, alt1: f64, lat2: f64, lon2: f64, alt2: f64) -> f64 {
    let d2d = haversine_distance( lat1, lon1, lat2, lon2);
    let dh = (alt2 - alt1).abs() / METERS_PER_KM;

    sqrt( pow2(d2d) + pow2(dh))
}

/// forward azimuth from point 1 to point 2 in degrees [0,360)
pub fn initial_bearing (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let φ1 = rad(lat1);
    let φ2 = rad(lat2);
    let Δλ = rad(lon2 - lon1);

    let x = sin(Δλ) * cos(φ2);
    let y = cos(φ1) * sin(φ2) - sin(φ1) * cos(φ2) * cos(Δλ);

    (deg( atan2(x, y)) + 360.0) % 360.0
}

/// how the line-of-sight distance to the horizon is computed from an altitude
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum HorizonModel {
    /// what the overlay has always computed: `sqrt(2*R*h + h ^ 2)` evaluated with web-page number
    /// semantics, where `+` binds tighter than `^` and `^` is a 32bit integer XOR. The result is
    /// `sqrt( int32(2*R*h + h) XOR 2 )`, which is not the geometric horizon (e.g. 1.414km at sea level).
    /// Kept as default until the intended behavior is confirmed
    #[default]
    Legacy,

    /// the geometric horizon `sqrt(2*R*h + h²)` for a sphere of radius R
    Geometric,
}

/// horizon distance in km for an altitude in meters. Negative altitudes can produce NaN
pub fn horizon_distance (alt_m: f64, model: HorizonModel) -> f64 {
    let h = alt_m / METERS_PER_KM;
    let r = MEAN_EARTH_RADIUS_KM;

    match model {
        HorizonModel::Legacy => sqrt( (to_int32( 2.0 * r * h + h) ^ 2) as f64),
        HorizonModel::Geometric => sqrt( 2.0 * r * h + pow2(h))
    }
}

/// is point 2 hidden by earth curvature when looking from point 1 (or vice versa)?
/// Comparisons with NaN horizons are false, i.e. such points count as visible
pub fn is_below_horizon (lat1: f64, lon1: f64, alt1: f64, lat2: f64, lon2: f64, alt2: f64, model: HorizonModel) -> bool {
    let distance = haversine_distance( lat1, lon1, lat2, lon2);
    let h1 = horizon_distance( alt1, model);
    let h2 = horizon_distance( alt2, model);

    distance > (h1 + h2)
}

/* #endregion plain functions */

/* #region GeoPos ***************************************************************************************/

/// a position with geodetic degrees and altitude above mean sea level in meters.
/// Serialized as `{"lat":..,"lon":..,"alt":..}`, which is also the persisted observer format.
/// We don't normalize on construction - values come from user input or page text and are used as given
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPos {
    #[serde(rename="lat")] pub lat_deg: f64,
    #[serde(rename="lon")] pub lon_deg: f64,
    #[serde(rename="alt")] pub alt_m: f64,
}

impl GeoPos {
    pub fn new (lat_deg: f64, lon_deg: f64, alt_m: f64)->Self {
        GeoPos { lat_deg, lon_deg, alt_m }
    }

    pub fn latitude (&self)->Latitude { Latitude::from_degrees( self.lat_deg) }
    pub fn longitude (&self)->Longitude { Longitude::from_degrees( self.lon_deg) }
    pub fn altitude (&self)->Length { Length::new::<meter>( self.alt_m) }

    pub fn haversine_distance_to (&self, other: &GeoPos)->Length {
        let d = haversine_distance( self.lat_deg, self.lon_deg, other.lat_deg, other.lon_deg);
        Length::new::<kilometer>(d)
    }

    pub fn three_d_distance_to (&self, other: &GeoPos)->Length {
        let d = three_d_distance( self.lat_deg, self.lon_deg, self.alt_m, other.lat_deg, other.lon_deg, other.alt_m);
        Length::new::<kilometer>(d)
    }

    pub fn bearing_to (&self, other: &GeoPos)->Angle360 {
        Angle360::from_degrees( initial_bearing( self.lat_deg, self.lon_deg, other.lat_deg, other.lon_deg))
    }

    pub fn horizon_distance (&self, model: HorizonModel)->Length {
        Length::new::<kilometer>( horizon_distance( self.alt_m, model))
    }

    pub fn is_below_horizon_of (&self, observer: &GeoPos, model: HorizonModel)->bool {
        is_below_horizon( observer.lat_deg, observer.lon_deg, observer.alt_m, self.lat_deg, self.lon_deg, self.alt_m, model)
    }
}

impl fmt::Display for GeoPos {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}m]", self.lat_deg, self.lon_deg, self.alt_m)
    }
}

/* #endregion GeoPos */
