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

use std::{path::Path, sync::Arc, time::Duration};
use tokio;
use skyspot_common::geo::{GeoPos, HorizonModel};
use skyspot::{
    FieldSelectors, SpotConfig,
    overlay::{FormField, OverlayController, OverlaySurface, OverlayView},
    run::{run_overlay, UiEvent},
    scenario::{replay, Scenario, Step},
    sim_page::SimPage,
    store::{LocationStore, MemKvStore},
    watcher::AircraftWatcher,
};

struct PrintSurface;

impl OverlaySurface for PrintSurface {
    fn render (&mut self, view: &OverlayView) {
        println!("{} | {} | {}", view.altitude, view.distance, view.bearing);
    }
    fn alert (&mut self, msg: &str) { println!("ALERT: {msg}") }
}

fn test_config ()->SpotConfig {
    SpotConfig {
        selectors: FieldSelectors { latitude: "lat".to_string(), longitude: "lon".to_string(), altitude: "alt".to_string() },
        discovery_timeout: Duration::from_millis(50),
        ..SpotConfig::default()
    }
}

fn insert (selector: &str, text: &str)->Step { Step::Insert { selector: selector.to_string(), text: text.to_string() } }
fn set_text (selector: &str, text: &str)->Step { Step::SetText { selector: selector.to_string(), text: text.to_string() } }

#[tokio::test]
async fn test_replay() {
    let scenario = Scenario { steps: vec![
        Step::Ui( UiEvent::OpenSettings),
        Step::Ui( UiEvent::SetField( FormField::Latitude, "0".to_string())),
        Step::Ui( UiEvent::SetField( FormField::Longitude, "0".to_string())),
        Step::Ui( UiEvent::SetField( FormField::Altitude, "0".to_string())),
        Step::Ui( UiEvent::Save),
        Step::Ui( UiEvent::Back),
        insert( "lat", "0"),
        insert( "lon", "0.5"),
        insert( "alt", "5,000"),
        Step::Wait(100),
        set_text( "lon", "1"),
        set_text( "alt", "10,000"),
        Step::Wait(100),
    ]};

    let locations = LocationStore::new( MemKvStore::new(), "location");
    let controller = OverlayController::new( PrintSurface, locations, HorizonModel::Legacy);

    let controller = replay( &scenario, &test_config(), Arc::new( SimPage::new()), controller).await.unwrap();
    let view = controller.view();
    assert!( view.details_visible && !view.settings_visible);
    assert_eq!( controller.observer(), Some( &GeoPos::new( 0.0, 0.0, 0.0)));
    assert_eq!( view.distance, "111.64 km");
    assert_eq!( view.bearing, "90°");
}

#[tokio::test]
async fn test_quit() {
    let page = Arc::new( SimPage::new());
    let scenario = Scenario { steps: vec![ Step::Ui( UiEvent::ToggleDetails), Step::Ui( UiEvent::Quit), Step::Ui( UiEvent::ToggleDetails) ]};

    let locations = LocationStore::new( MemKvStore::new(), "location");
    let controller = OverlayController::new( PrintSurface, locations, HorizonModel::Legacy);

    let controller = replay( &scenario, &test_config(), page, controller).await.unwrap();
    assert!( controller.view().details_visible); // nothing after the Quit
}

#[tokio::test]
async fn test_run_overlay_closed_inputs() {
    let page = Arc::new( SimPage::new());
    page.insert( "lat", "0");
    page.insert( "lon", "1");
    page.insert( "alt", "10000");

    let (watcher, sub) = AircraftWatcher::new( page.clone(), &test_config());
    let task = tokio::spawn( watcher.run());
    let (tx, rx) = tokio::sync::mpsc::channel( 4);

    let locations = LocationStore::new( MemKvStore::new(), "location");
    let controller = OverlayController::new( PrintSurface, locations, HorizonModel::Legacy);
    let overlay = tokio::spawn( async move {
        let controller = run_overlay( controller, sub, rx).await;
        controller.view().clone()
    });

    tx.send( UiEvent::ToggleDetails).await.unwrap();
    tokio::time::sleep( Duration::from_millis(100)).await;
    page.close();
    task.await.unwrap().unwrap();
    drop(tx);

    let view = tokio::time::timeout( Duration::from_secs(2), overlay).await.expect("overlay did not terminate").unwrap();
    assert!( view.details_visible);
    assert_eq!( view.altitude, "10000 m (32810 ft)");
    assert_eq!( view.distance, "N/A"); // no observer
}

#[test]
fn test_scenario_file() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join( "scenarios/sfo_departure.ron");
    let scenario = Scenario::from_path( &path).unwrap();
    println!("{} steps", scenario.steps.len());

    assert_eq!( scenario.steps[0], Step::Ui( UiEvent::OpenSettings));
    assert!( scenario.steps.iter().any( |s| matches!( s, Step::Wait(_))));
}

#[test]
fn test_config_file() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join( "configs/skyspot.ron");
    let config: SpotConfig = skyspot::load_config_from( &path).unwrap();

    assert_eq!( config.selectors, FieldSelectors::default());
    assert_eq!( config.discovery_timeout, Duration::from_millis(5000));
    assert_eq!( config.horizon, HorizonModel::Legacy);
}
