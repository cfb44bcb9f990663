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

use serde::{Serialize,Deserialize};
use skyspot_common::{
    debug, info, warn,
    geo::{GeoPos, HorizonModel},
    geo_constants::FEET_PER_METER,
    numfmt::{format_number, parse_float_prefix, round_half_up},
};
use crate::{
    aircraft::AircraftData,
    errors::{Result, SpotError},
    spot::{spot_it, SpotResult},
    store::{KvStore, LocationStore},
};

pub const NOT_AVAILABLE: &'static str = "N/A";
pub const NO_VALUE: &'static str = "-";

pub const TOGGLE_LABEL_COLLAPSED: &'static str = "VIEW Details ▲";
pub const TOGGLE_LABEL_EXPANDED: &'static str = "VIEW Details ▼";

pub const INVALID_SETTINGS_MSG: &'static str = "Please enter valid numbers for latitude, longitude, and altitude.";
pub const LOCATION_SAVED_MSG: &'static str = "Location saved!";

/// where the overlay ends up being shown. Alerts are blocking notifications the user has to acknowledge
pub trait OverlaySurface {
    fn render (&mut self, view: &OverlayView);
    fn alert (&mut self, msg: &str);
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum FormField { Latitude, Longitude, Altitude }

/// raw text of the observer location form
#[derive(Debug,Clone,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct SettingsForm {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
}

impl SettingsForm {
    pub fn from_location (loc: &GeoPos)->Self {
        SettingsForm {
            latitude: format_number( loc.lat_deg),
            longitude: format_number( loc.lon_deg),
            altitude: format_number( loc.alt_m),
        }
    }

    pub fn set (&mut self, field: FormField, text: &str) {
        let s = match field {
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Altitude => &mut self.altitude,
        };
        *s = text.to_string();
    }

    /// all three fields have to start with a number, trailing garbage is ignored
    pub fn parse (&self)->Option<GeoPos> {
        let lat = parse_float_prefix( &self.latitude)?;
        let lon = parse_float_prefix( &self.longitude)?;
        let alt = parse_float_prefix( &self.altitude)?;
        Some( GeoPos::new( lat, lon, alt))
    }
}

/// everything the surface needs to draw the overlay
#[derive(Debug,Clone,PartialEq)]
pub struct OverlayView {
    pub details_visible: bool,
    pub settings_visible: bool,
    pub toggle_label: String,

    pub altitude: String,
    pub distance: String,
    pub bearing: String,
    pub arrow_rotation: Option<f64>, // degrees clockwise, None if there is no bearing
    pub below_horizon: Option<bool>,

    pub form: SettingsForm,
}

impl Default for OverlayView {
    fn default()->Self {
        OverlayView {
            details_visible: false,
            settings_visible: false,
            toggle_label: TOGGLE_LABEL_COLLAPSED.to_string(),
            altitude: NO_VALUE.to_string(),
            distance: NO_VALUE.to_string(),
            bearing: NO_VALUE.to_string(),
            arrow_rotation: None,
            below_horizon: None,
            form: SettingsForm::default(),
        }
    }
}

/// "35000 m (114835 ft)" - feet are rounded to multiples of 5
pub fn altitude_text (alt_m: f64)->String {
    let ft = round_half_up( alt_m * FEET_PER_METER / 5.0) * 5.0;
    format!("{} m ({} ft)", format_number(alt_m), format_number(ft))
}

/// the overlay state machine: detail and settings panels that are toggled by user actions, the
/// observer location form, and the spot values derived from the latest aircraft data.
///
/// The observer is an explicit part of the controller state. It is loaded from the location store when the
/// controller is created and replaced whenever the settings are saved, i.e. new locations take effect
/// immediately. Each state change is rendered right away through the surface.
pub struct OverlayController<S,K> where S: OverlaySurface, K: KvStore {
    surface: S,
    locations: LocationStore<K>,
    observer: Option<GeoPos>,
    horizon: HorizonModel,
    view: OverlayView,
    last_data: Option<Option<AircraftData>>, // outer None: nothing received yet
}

impl<S,K> OverlayController<S,K> where S: OverlaySurface, K: KvStore {
    pub fn new (surface: S, locations: LocationStore<K>, horizon: HorizonModel)->Self {
        let observer = load_location( &locations);
        match &observer {
            Some(loc) => info!("observer location {loc}"),
            None => warn!("no observer location set, distance and bearing are not available")
        }

        let mut controller = OverlayController { surface, locations, observer, horizon, view: OverlayView::default(), last_data: None };
        controller.render();
        controller
    }

    pub fn view (&self)->&OverlayView { &self.view }
    pub fn observer (&self)->Option<&GeoPos> { self.observer.as_ref() }
    pub fn locations (&self)->&LocationStore<K> { &self.locations }
    pub fn surface (&self)->&S { &self.surface }
    pub fn surface_mut (&mut self)->&mut S { &mut self.surface }

    fn render (&mut self) {
        self.surface.render( &self.view);
    }

    //--- user actions

    pub fn toggle_details (&mut self) {
        let visible = !self.view.details_visible;
        self.view.details_visible = visible;
        self.view.toggle_label = if visible { TOGGLE_LABEL_EXPANDED } else { TOGGLE_LABEL_COLLAPSED }.to_string();
        self.render();
    }

    /// switch to the settings panel, pre-filled with the stored location (if any)
    pub fn open_settings (&mut self) {
        self.view.details_visible = false;
        self.view.settings_visible = true;

        if let Some(loc) = load_location( &self.locations) {
            self.view.form = SettingsForm::from_location( &loc);
        }
        self.render();
    }

    pub fn back (&mut self) {
        self.view.details_visible = true;
        self.view.settings_visible = false;
        self.render();
    }

    pub fn set_form_field (&mut self, field: FormField, text: &str) {
        self.view.form.set( field, text);
        self.render();
    }

    /// validate and persist the form location. Invalid input is rejected with an alert and leaves
    /// both the stored and the active observer untouched
    pub fn save_settings (&mut self)->Result<GeoPos> {
        let Some(loc) = self.view.form.parse() else {
            self.surface.alert( INVALID_SETTINGS_MSG);
            return Err( SpotError::InvalidSettings( format!("{:?}", self.view.form)) )
        };

        if let Err(e) = self.locations.save( &loc) {
            self.surface.alert( &format!("Failed to save location: {e}"));
            return Err(e)
        }

        info!("saved observer location {loc}");
        self.observer = Some(loc);
        self.surface.alert( LOCATION_SAVED_MSG);

        if let Some(data) = self.last_data {
            self.set_values( data);
        }
        self.render();
        Ok(loc)
    }

    //--- data updates

    pub fn update (&mut self, data: Option<AircraftData>) {
        self.last_data = Some(data);
        self.set_values( data);
        self.render();
    }

    /// what we currently show for the given aircraft, `None` if there is no observer
    pub fn spot (&self, aircraft: &AircraftData)->Option<SpotResult> {
        self.observer.as_ref().map( |observer| spot_it( observer, aircraft, self.horizon))
    }

    fn set_values (&mut self, data: Option<AircraftData>) {
        let view = &mut self.view;

        match data {
            Some(aircraft) => {
                view.altitude = altitude_text( aircraft.alt_m);

                if let Some(spot) = self.observer.as_ref().map( |observer| spot_it( observer, &aircraft, self.horizon)) {
                    debug!("aircraft {aircraft}: {spot}");
                    view.distance = format!("{} km", spot.distance());
                    view.bearing = format!("{}°", spot.bearing());
                    view.arrow_rotation = Some( spot.bearing_deg.round());
                    view.below_horizon = Some( spot.below_horizon);
                } else {
                    view.distance = NOT_AVAILABLE.to_string();
                    view.bearing = NOT_AVAILABLE.to_string();
                    view.arrow_rotation = None;
                    view.below_horizon = None;
                }
            }
            None => {
                view.altitude = NOT_AVAILABLE.to_string();
                view.distance = NOT_AVAILABLE.to_string();
                view.bearing = NOT_AVAILABLE.to_string();
                view.arrow_rotation = None;
                view.below_horizon = None;
            }
        }
    }
}

fn load_location<K: KvStore> (locations: &LocationStore<K>)->Option<GeoPos> {
    match locations.load() {
        Ok(loc) => loc,
        Err(e) => {
            warn!("ignoring unreadable observer location: {e}");
            None
        }
    }
}
