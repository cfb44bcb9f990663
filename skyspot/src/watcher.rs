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
use tokio::sync::{watch, broadcast::error::RecvError};
use skyspot_common::{debug, info, warn};
use crate::{
    aircraft::{read_aircraft_data, AircraftData, FieldElements},
    config::{FieldSelectors, SpotConfig},
    errors::{Result, SpotError},
    page::{wait_for_element, ElementId, HostPage, PageEvent},
};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum WatchState {
    /// (re-)resolving the field selectors
    Searching,
    /// waiting for changes of the resolved elements
    Watching(FieldElements),
}

/// receiving end of the aircraft data published by an [`AircraftWatcher`]. Only the latest value is kept,
/// `None` means the page does not show a (complete) aircraft position
#[derive(Debug,Clone)]
pub struct Subscription {
    rx: watch::Receiver<Option<AircraftData>>,
}

impl Subscription {
    /// wait for the next publication. Fails once the watcher is gone
    pub async fn changed (&mut self)->Result<Option<AircraftData>> {
        self.rx.changed().await.map_err( |_| SpotError::SubscriptionClosed)?;
        Ok( *self.rx.borrow_and_update() )
    }

    pub fn current (&self)->Option<AircraftData> {
        *self.rx.borrow()
    }
}

/// keeps track of the aircraft position fields of a page it does not control.
///
/// The watcher starts `Searching`, i.e. it concurrently waits for each field selector to resolve
/// (bounded by the discovery timeout - unresolved fields stay missing). Once done it is `Watching`:
/// text changes of any resolved element cause a re-read that is published to subscribers, structural
/// page changes send it back to `Searching` since the page might have re-rendered the panel.
/// Data is also published after each search that resolved a different set of elements.
pub struct AircraftWatcher<P> where P: HostPage {
    page: Arc<P>,
    selectors: FieldSelectors,
    discovery_timeout: Duration,
    state: WatchState,
    tx: watch::Sender<Option<AircraftData>>,
}

impl<P> AircraftWatcher<P> where P: HostPage {
    pub fn new (page: Arc<P>, config: &SpotConfig)->(Self,Subscription) {
        let (tx,rx) = watch::channel( None);
        let watcher = AircraftWatcher {
            page,
            selectors: config.selectors.clone(),
            discovery_timeout: config.discovery_timeout,
            state: WatchState::Searching,
            tx
        };
        (watcher, Subscription{rx})
    }

    pub fn state (&self)->WatchState { self.state }

    /// another receiver for the same publications
    pub fn subscribe (&self)->Subscription {
        Subscription { rx: self.tx.subscribe() }
    }

    async fn find (&self, selector: &str)->Option<ElementId> {
        match wait_for_element( self.page.as_ref(), selector, self.discovery_timeout).await {
            Ok(id) => Some(id),
            Err(e) => { warn!("{e}"); None }
        }
    }

    async fn resolve (&self)->FieldElements {
        let (latitude, longitude, altitude) = tokio::join!(
            self.find( &self.selectors.latitude),
            self.find( &self.selectors.longitude),
            self.find( &self.selectors.altitude)
        );
        FieldElements { latitude, longitude, altitude }
    }

    fn publish (&self, elements: &FieldElements) {
        let data = read_aircraft_data( self.page.as_ref(), elements);
        debug!("publishing aircraft data {data:?}");
        self.tx.send_replace( data);
    }

    /// run until the page closes. This is meant to be spawned as its own task
    pub async fn run (mut self)->Result<()> {
        let mut events = self.page.subscribe();
        let mut last_resolved: Option<FieldElements> = None;

        loop {
            match self.state {
                WatchState::Searching => {
                    let elements = self.resolve().await;
                    if last_resolved != Some(elements) {
                        info!("watching {elements}");
                        self.publish( &elements);
                        last_resolved = Some(elements);
                    }
                    self.state = WatchState::Watching(elements);
                }

                WatchState::Watching(elements) => {
                    match events.recv().await {
                        Ok(PageEvent::TextChanged(id)) => {
                            if elements.contains(id) { self.publish( &elements) }
                        }
                        Ok(PageEvent::StructureChanged) => {
                            self.state = WatchState::Searching;
                        }
                        Err(RecvError::Lagged(n)) => {
                            warn!("missed {n} page events, re-resolving fields");
                            self.state = WatchState::Searching;
                        }
                        Err(RecvError::Closed) => {
                            info!("page closed, watcher terminated");
                            return Ok(())
                        }
                    }
                }
            }
        }
    }
}
