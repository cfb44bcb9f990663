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

use std::{fmt, marker::PhantomData, cmp};
use serde::ser::{Serialize, Serializer};

#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// map into [0,360). Note that `-0.0 % 360` stays negative zero, which we flush to 0.0
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 {
        let y = 360.0 + x;
        if y >= 360.0 { 0.0 } else { y } // tiny negative x rounds up to 360.0
    } else {
        x + 0.0
    }
}

pub trait AngleKind {
    fn normalize (v: f64)->f64;
    fn label ()->&'static str;
}

#[derive(Clone,Copy)]
pub struct LatitudeKind {}
impl AngleKind for LatitudeKind {
    fn normalize (v: f64) -> f64 { normalize_90(v) }
    fn label ()->&'static str { "Latitude" }
}

#[derive(Clone,Copy)]
pub struct LongitudeKind {}
impl AngleKind for LongitudeKind {
    fn normalize (v: f64) -> f64 { normalize_180(v) }
    fn label ()->&'static str { "Longitude" }
}

#[derive(Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    fn normalize (v: f64) -> f64 { normalize_360(v) }
    fn label ()->&'static str { "Angle360" }
}

/// an angle in degrees that is kept normalized according to its kind
#[derive(Clone,Copy)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline]
    pub fn from_radians (rad: f64) -> Self {
        NormalizedAngle { value: K::normalize(rad.to_degrees()), kind: PhantomData }
    }

    #[inline] pub fn degrees (&self)->f64 { self.value }
    #[inline] pub fn radians (&self)->f64 { self.value.to_radians() }

    #[inline] pub fn sin (&self)->f64 { self.value.to_radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.value.to_radians().cos() }
}

impl<K> From<NormalizedAngle<K>> for f64 where K: AngleKind {
    fn from (a: NormalizedAngle<K>) -> Self { a.value }
}

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}°", self.value) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}({})", K::label(), self.value) }
}

impl<K> cmp::PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq (&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> cmp::PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.value.partial_cmp(&other.value) }
}

impl<K> Serialize for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.value)
    }
}

pub type Latitude = NormalizedAngle<LatitudeKind>;
pub type Longitude = NormalizedAngle<LongitudeKind>;
pub type Angle360 = NormalizedAngle<FullCircleKind>;
