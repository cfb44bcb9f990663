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
use serde::{Serialize,Deserialize};
use tokio::sync::mpsc;
use skyspot_common::{debug, info, warn};
use crate::{
    config::{load_config_from, SpotConfig},
    errors::{op_failed, Result, SpotError},
    overlay::{OverlayController, OverlaySurface},
    run::{run_overlay, UiEvent},
    sim_page::SimPage,
    store::KvStore,
    watcher::AircraftWatcher,
};

const UI_EVENT_CAPACITY: usize = 16;

/// a single scripted change of the page or user action
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum Step {
    Insert { selector: String, text: String },
    SetText { selector: String, text: String },
    Remove { selector: String },
    Wait(u64), // millis
    Ui(UiEvent),
}

/// a scripted page session, e.g.
/// ```ron
/// Scenario( steps: [
///     Insert( selector: "lat", text: "37.62" ),
///     Wait(100),
///     Ui(ToggleDetails),
/// ])
/// ```
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_path<P: AsRef<Path>> (path: &P)->Result<Self> {
        load_config_from( path)
    }
}

/// replay `scenario` against `page`, with an aircraft watcher and the overlay event loop running concurrently.
/// The page is closed after the last step, the overlay terminates once the watcher is done (or earlier if
/// the scenario contains a `Quit`). Returns the controller in its final state
pub async fn replay<S,K> (scenario: &Scenario, config: &SpotConfig, page: Arc<SimPage>, controller: OverlayController<S,K>)->Result<OverlayController<S,K>>
    where S: OverlaySurface, K: KvStore
{
    let (watcher, subscription) = AircraftWatcher::new( page.clone(), config);
    let watcher_task = tokio::spawn( watcher.run());
    let (tx, rx) = mpsc::channel::<UiEvent>( UI_EVENT_CAPACITY);

    let drive = async move {
        for (i, step) in scenario.steps.iter().enumerate() {
            debug!("step {i}: {step:?}");
            match step {
                Step::Insert { selector, text } => { page.insert( selector, text); }
                Step::SetText { selector, text } => {
                    if !page.set_text( selector, text) { warn!("step {i}: no element for {selector}") }
                }
                Step::Remove { selector } => {
                    if !page.remove( selector) { warn!("step {i}: no element for {selector}") }
                }
                Step::Wait(millis) => tokio::time::sleep( Duration::from_millis( *millis)).await,
                Step::Ui(event) => {
                    if tx.send( event.clone()).await.is_err() { warn!("step {i}: overlay already terminated") }
                }
            }
        }

        info!("scenario done, closing page");
        page.close();
        drop(tx);

        match watcher_task.await {
            Ok(res) => res,
            Err(e) => Err( op_failed!("watcher task failed: {}", e))
        }
    };

    let (res, controller) = tokio::join!( drive, run_overlay( controller, subscription, rx));
    res.map(|_| controller)
}
