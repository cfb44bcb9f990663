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
use skyspot_common::{debug, geo::GeoPos, numfmt::parse_float_prefix};
use crate::page::{ElementId, HostPage};

/// position of the selected aircraft as shown on the page. Altitude is whatever number the page
/// displays, it is treated as meters
pub type AircraftData = GeoPos;

/// the resolved page elements we read aircraft fields from. Fields are `None` if the element was not found
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct FieldElements {
    pub latitude: Option<ElementId>,
    pub longitude: Option<ElementId>,
    pub altitude: Option<ElementId>,
}

impl FieldElements {
    pub fn contains (&self, id: ElementId)->bool {
        self.latitude == Some(id) || self.longitude == Some(id) || self.altitude == Some(id)
    }

    pub fn is_complete (&self)->bool {
        self.latitude.is_some() && self.longitude.is_some() && self.altitude.is_some()
    }
}

impl fmt::Display for FieldElements {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt (id: &Option<ElementId>)->String { id.map( |id| id.to_string()).unwrap_or_else( || "-".to_string()) }
        write!(f, "FieldElements(lat: {}, lon: {}, alt: {})", opt(&self.latitude), opt(&self.longitude), opt(&self.altitude))
    }
}

/// altitude fields come with thousands separators and units ("35,000 ft"). We drop everything that is
/// not a digit or a decimal point before parsing, which also means the sign is lost
pub fn parse_altitude (s: &str)->Option<f64> {
    let digits: String = s.chars().filter( |c| c.is_ascii_digit() || *c == '.').collect();
    parse_float_prefix( &digits)
}

pub fn parse_coordinate (s: &str)->Option<f64> {
    parse_float_prefix( s)
}

fn read_field<P,F> (page: &P, element: Option<ElementId>, parse: F)->Option<f64>
    where P: HostPage + ?Sized, F: Fn(&str)->Option<f64>
{
    let text = page.text( element?)?;
    parse( text.trim())
}

/// read the current aircraft position from the page. This is `None` if any of the fields is
/// missing or can't be parsed - we never report partial positions
pub fn read_aircraft_data<P> (page: &P, elements: &FieldElements)->Option<AircraftData> where P: HostPage + ?Sized {
    let lat = read_field( page, elements.latitude, parse_coordinate);
    let lon = read_field( page, elements.longitude, parse_coordinate);
    let alt = read_field( page, elements.altitude, parse_altitude);

    match (lat, lon, alt) {
        (Some(lat), Some(lon), Some(alt)) => Some( AircraftData::new( lat, lon, alt)),
        _ => {
            debug!("incomplete aircraft data from {elements}: lat={lat:?}, lon={lon:?}, alt={alt:?}");
            None
        }
    }
}
