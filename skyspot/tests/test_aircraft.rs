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

use skyspot::{
    aircraft::{parse_altitude, parse_coordinate, read_aircraft_data, FieldElements},
    page::HostPage,
    sim_page::SimPage,
};

#[test]
fn test_parse_altitude() {
    assert_eq!( parse_altitude( "35,000 ft"), Some(35000.0));
    assert_eq!( parse_altitude( "1200"), Some(1200.0));
    assert_eq!( parse_altitude( "10,972.8 m"), Some(10972.8));
    assert_eq!( parse_altitude( "-50"), Some(50.0)); // sign is dropped with the other non-digits
    assert_eq!( parse_altitude( "N/A"), None);
    assert_eq!( parse_altitude( ""), None);
}

#[test]
fn test_parse_coordinate() {
    assert_eq!( parse_coordinate( "37.6213"), Some(37.6213));
    assert_eq!( parse_coordinate( "-122.379"), Some(-122.379));
    assert_eq!( parse_coordinate( "51.47°"), Some(51.47));
    assert_eq!( parse_coordinate( "north"), None);
}

#[test]
fn test_read_aircraft_data() {
    let page = SimPage::new();
    let lat = page.insert( "lat", " 37.62 ");
    let lon = page.insert( "lon", "-122.38");
    let alt = page.insert( "alt", "12,000 ft");

    let mut elements = FieldElements { latitude: Some(lat), longitude: Some(lon), altitude: Some(alt) };
    assert!( elements.is_complete());
    assert!( elements.contains(alt));

    let data = read_aircraft_data( &page, &elements).unwrap();
    println!("read {data}");
    assert_eq!( (data.lat_deg, data.lon_deg, data.alt_m), (37.62, -122.38, 12000.0));

    // no partial data
    page.set_text( "alt", "---");
    assert!( read_aircraft_data( &page, &elements).is_none());

    page.set_text( "alt", "12,100 ft");
    elements.longitude = None;
    assert!( !elements.is_complete());
    assert!( read_aircraft_data( &page, &elements).is_none());

    // stale element
    elements.longitude = Some(lon);
    page.remove( "lon");
    assert!( read_aircraft_data( &page, &elements).is_none());
}
