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

use skyspot_common::geo::{GeoPos, HorizonModel};
use skyspot::{
    SpotError,
    overlay::*,
    store::{KvStore, LocationStore, MemKvStore},
};

/// keeps everything we get so that we can check what was shown
#[derive(Default)]
struct RecordingSurface {
    views: Vec<OverlayView>,
    alerts: Vec<String>,
}

impl OverlaySurface for RecordingSurface {
    fn render (&mut self, view: &OverlayView) { self.views.push( view.clone()) }
    fn alert (&mut self, msg: &str) { self.alerts.push( msg.to_string()) }
}

fn controller_with (observer: Option<GeoPos>)->OverlayController<RecordingSurface,MemKvStore> {
    let mut locations = LocationStore::new( MemKvStore::new(), "location");
    if let Some(loc) = observer {
        locations.save( &loc).unwrap();
    }
    OverlayController::new( RecordingSurface::default(), locations, HorizonModel::Legacy)
}

#[test]
fn test_initial_view() {
    let controller = controller_with( None);
    let view = controller.view();

    assert_eq!( controller.surface().views.len(), 1);
    assert!( !view.details_visible && !view.settings_visible);
    assert_eq!( view.toggle_label, TOGGLE_LABEL_COLLAPSED);
    assert_eq!( (view.altitude.as_str(), view.distance.as_str(), view.bearing.as_str()), ("-", "-", "-"));
    assert!( controller.observer().is_none());
}

#[test]
fn test_toggle_details() {
    let mut controller = controller_with( None);
    let initial = controller.view().clone();

    controller.toggle_details();
    assert!( controller.view().details_visible);
    assert_eq!( controller.view().toggle_label, "VIEW Details ▼");

    controller.toggle_details();
    assert_eq!( controller.view(), &initial);
    assert_eq!( controller.view().toggle_label, "VIEW Details ▲");
}

#[test]
fn test_settings_navigation() {
    let mut controller = controller_with( Some( GeoPos::new( 37.5, -122.25, 10.0)));
    controller.toggle_details();

    controller.open_settings();
    let view = controller.view();
    assert!( view.settings_visible && !view.details_visible);
    assert_eq!( view.form, SettingsForm { latitude: "37.5".into(), longitude: "-122.25".into(), altitude: "10".into() });

    controller.back();
    let view = controller.view();
    assert!( view.details_visible && !view.settings_visible);
}

#[test]
fn test_update() {
    let mut controller = controller_with( Some( GeoPos::new( 0.0, 0.0, 0.0)));
    controller.update( Some( GeoPos::new( 0.0, 1.0, 10000.0)));

    let view = controller.view();
    println!("{view:?}");
    assert_eq!( view.distance, "111.64 km");
    assert_eq!( view.bearing, "90°");
    assert_eq!( view.altitude, "10000 m (32810 ft)");
    assert_eq!( view.arrow_rotation, Some(90.0));
    assert_eq!( view.below_horizon, Some(false));

    controller.update( None);
    let view = controller.view();
    assert_eq!( (view.altitude.as_str(), view.distance.as_str(), view.bearing.as_str()), (NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE));
    assert_eq!( view.arrow_rotation, None);

    assert_eq!( controller.surface().views.len(), 3);
}

#[test]
fn test_update_without_observer() {
    let mut controller = controller_with( None);
    controller.update( Some( GeoPos::new( 0.0, 1.0, 10000.0)));

    let view = controller.view();
    assert_eq!( view.altitude, "10000 m (32810 ft)");
    assert_eq!( view.distance, "N/A");
    assert_eq!( view.bearing, "N/A");
}

#[test]
fn test_altitude_text() {
    assert_eq!( altitude_text( 0.0), "0 m (0 ft)");
    assert_eq!( altitude_text( 1000.0), "1000 m (3280 ft)");
    assert_eq!( altitude_text( 35000.0), "35000 m (114835 ft)");
}

#[test]
fn test_invalid_settings() {
    let mut controller = controller_with( None);
    controller.open_settings();
    controller.set_form_field( FormField::Latitude, "abc");
    controller.set_form_field( FormField::Longitude, "-122.4");
    controller.set_form_field( FormField::Altitude, "10");

    let res = controller.save_settings();
    assert!( matches!( res, Err(SpotError::InvalidSettings(_))));
    assert_eq!( controller.surface().alerts, vec![INVALID_SETTINGS_MSG.to_string()]);
    assert!( controller.observer().is_none());
    assert!( controller.locations().load().unwrap().is_none());

    controller.set_form_field( FormField::Latitude, "");
    assert!( controller.save_settings().is_err());
    assert!( controller.locations().kv().get( "location").unwrap().is_none());
}

#[test]
fn test_save_settings() {
    let mut controller = controller_with( None);
    controller.update( Some( GeoPos::new( 0.0, 1.0, 10000.0)));
    assert_eq!( controller.view().distance, NOT_AVAILABLE);

    controller.open_settings();
    controller.set_form_field( FormField::Latitude, "0");
    controller.set_form_field( FormField::Longitude, "0.0 E"); // trailing text is ignored
    controller.set_form_field( FormField::Altitude, "0m");

    let loc = controller.save_settings().unwrap();
    assert_eq!( loc, GeoPos::new( 0.0, 0.0, 0.0));
    assert_eq!( controller.surface().alerts, vec![LOCATION_SAVED_MSG.to_string()]);
    assert_eq!( controller.observer(), Some(&loc));
    assert_eq!( controller.locations().load().unwrap(), Some(loc));

    // the new observer applies right away
    assert_eq!( controller.view().distance, "111.64 km");
    assert_eq!( controller.view().bearing, "90°");
}
