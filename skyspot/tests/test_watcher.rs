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

use std::{sync::Arc, time::Duration};
use tokio;
use skyspot::{
    AircraftData, FieldSelectors, SpotConfig,
    sim_page::SimPage,
    watcher::{AircraftWatcher, Subscription},
};

fn test_config ()->SpotConfig {
    SpotConfig {
        selectors: FieldSelectors { latitude: "lat".to_string(), longitude: "lon".to_string(), altitude: "alt".to_string() },
        discovery_timeout: Duration::from_millis(50),
        ..SpotConfig::default()
    }
}

async fn next (sub: &mut Subscription)->Option<AircraftData> {
    let data = tokio::time::timeout( Duration::from_secs(2), sub.changed()).await
        .expect("no aircraft data published")
        .expect("subscription closed");
    println!("received {data:?}");
    data
}

#[tokio::test]
async fn test_watch_changes() {
    let page = Arc::new( SimPage::new());
    page.insert( "lat", "0");
    page.insert( "lon", "1");
    page.insert( "alt", "10,000 ft");

    let (watcher, mut sub) = AircraftWatcher::new( page.clone(), &test_config());
    let task = tokio::spawn( watcher.run());

    let data = next( &mut sub).await.unwrap();
    assert_eq!( (data.lat_deg, data.lon_deg, data.alt_m), (0.0, 1.0, 10000.0));
    assert_eq!( sub.current(), Some(data));

    page.set_text( "alt", "11,000 ft");
    let data = next( &mut sub).await.unwrap();
    assert_eq!( data.alt_m, 11000.0);

    // panel re-rendered: lat goes away and comes back as a new element
    page.remove( "lat");
    assert!( next( &mut sub).await.is_none());

    page.insert( "lat", "2.5");
    let data = next( &mut sub).await.unwrap();
    assert_eq!( data.lat_deg, 2.5);

    page.set_text( "lat", "2.75");
    let data = next( &mut sub).await.unwrap();
    assert_eq!( data.lat_deg, 2.75);

    page.close();
    let res = tokio::time::timeout( Duration::from_secs(2), task).await.expect("watcher did not terminate");
    assert!( matches!( res, Ok(Ok(()))));

    assert!( sub.changed().await.is_err());
}

#[tokio::test]
async fn test_missing_fields() {
    let page = Arc::new( SimPage::new());
    page.insert( "lat", "37.62");
    page.insert( "lon", "-122.38");

    let (watcher, mut sub) = AircraftWatcher::new( page.clone(), &test_config());
    let mut other = watcher.subscribe();
    tokio::spawn( watcher.run());

    // the altitude selector times out, which is reported as no data
    assert!( next( &mut sub).await.is_none());
    assert!( next( &mut other).await.is_none());

    page.insert( "alt", "500");
    let data = next( &mut sub).await.unwrap();
    assert_eq!( data.alt_m, 500.0);

    page.close();
}

#[tokio::test]
async fn test_unrelated_changes() {
    let page = Arc::new( SimPage::new());
    page.insert( "lat", "1");
    page.insert( "lon", "2");
    page.insert( "alt", "3");
    page.insert( "callsign", "UAL123");

    let (watcher, mut sub) = AircraftWatcher::new( page.clone(), &test_config());
    tokio::spawn( watcher.run());
    assert!( next( &mut sub).await.is_some());

    // text changes of elements we don't watch are not published
    page.set_text( "callsign", "DAL456");
    let res = tokio::time::timeout( Duration::from_millis(100), sub.changed()).await;
    assert!( res.is_err());

    page.close();
}
