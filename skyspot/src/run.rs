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
use tokio::sync::mpsc;
use skyspot_common::{debug, info, warn};
use crate::{
    overlay::{FormField, OverlayController, OverlaySurface},
    store::KvStore,
    watcher::Subscription,
};

/// user interactions with the overlay
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum UiEvent {
    ToggleDetails,
    OpenSettings,
    Back,
    SetField(FormField,String),
    Save,
    Quit,
}

/// dispatch a single UI event. Returns false if this was a `Quit`
pub fn handle_ui_event<S,K> (controller: &mut OverlayController<S,K>, event: UiEvent)->bool where S: OverlaySurface, K: KvStore {
    debug!("ui event {event:?}");
    match event {
        UiEvent::ToggleDetails => controller.toggle_details(),
        UiEvent::OpenSettings => controller.open_settings(),
        UiEvent::Back => controller.back(),
        UiEvent::SetField(field, text) => controller.set_form_field( field, &text),
        UiEvent::Save => {
            // the surface already got an alert, nothing else to do here
            if let Err(e) = controller.save_settings() { warn!("location not saved: {e}") }
        }
        UiEvent::Quit => return false
    }
    true
}

/// the overlay event loop. Aircraft data and UI events are processed in order of arrival until we get a
/// `Quit` or both inputs are closed. A closed data subscription (page gone) leaves the overlay
/// responsive to UI events. Returns the controller so that callers can inspect the final state
pub async fn run_overlay<S,K> (mut controller: OverlayController<S,K>, mut subscription: Subscription, mut ui_events: mpsc::Receiver<UiEvent>)->OverlayController<S,K>
    where S: OverlaySurface, K: KvStore
{
    let mut data_open = true;
    let mut ui_open = true;

    while data_open || ui_open {
        tokio::select! {
            res = subscription.changed(), if data_open => {
                match res {
                    Ok(data) => controller.update( data),
                    Err(e) => {
                        info!("{e}, no more aircraft updates");
                        data_open = false;
                    }
                }
            }
            event = ui_events.recv(), if ui_open => {
                match event {
                    Some(event) => if !handle_ui_event( &mut controller, event) { break }
                    None => ui_open = false
                }
            }
        }
    }

    info!("overlay terminated");
    controller
}
