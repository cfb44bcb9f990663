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

use std::sync::{Mutex,MutexGuard,PoisonError};
use tokio::sync::broadcast;
use skyspot_common::trace;
use crate::page::{ElementId, HostPage, PageEvent, PageEvents};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug)]
struct SimElement {
    id: ElementId,
    selector: String,
    text: String,
}

#[derive(Debug)]
struct SimPageState {
    elements: Vec<SimElement>, // in document order
    next_id: u64,
    tx: Option<broadcast::Sender<PageEvent>>, // None after close()
}

/// an in-memory page that is driven programmatically (tests, scenario replay).
/// Selectors are matched verbatim, the first element in document order wins.
/// Every insert/remove is reported as `StructureChanged`, every text update as `TextChanged`
#[derive(Debug)]
pub struct SimPage {
    state: Mutex<SimPageState>,
}

impl SimPage {
    pub fn new ()->Self {
        let (tx,_) = broadcast::channel( EVENT_CAPACITY);
        SimPage { state: Mutex::new( SimPageState { elements: Vec::new(), next_id: 1, tx: Some(tx) }) }
    }

    fn state (&self)->MutexGuard<'_,SimPageState> {
        self.state.lock().unwrap_or_else( PoisonError::into_inner)
    }

    fn notify (state: &SimPageState, event: PageEvent) {
        trace!("sim page event {event:?}");
        if let Some(tx) = &state.tx {
            let _ = tx.send( event); // no subscribers is not an error
        }
    }

    /// append a new element to the page
    pub fn insert (&self, selector: &str, text: &str)->ElementId {
        let mut state = self.state();
        let id = ElementId( state.next_id);
        state.next_id += 1;
        state.elements.push( SimElement { id, selector: selector.to_string(), text: text.to_string() });

        Self::notify( &state, PageEvent::StructureChanged);
        id
    }

    /// update the text of the first element matching `selector`. Returns false if there is none
    pub fn set_text (&self, selector: &str, text: &str)->bool {
        let mut state = self.state();
        let id = if let Some(e) = state.elements.iter_mut().find( |e| e.selector == selector) {
            e.text = text.to_string();
            e.id
        } else {
            return false
        };

        Self::notify( &state, PageEvent::TextChanged(id));
        true
    }

    /// remove the first element matching `selector`. Returns false if there is none
    pub fn remove (&self, selector: &str)->bool {
        let mut state = self.state();
        if let Some(idx) = state.elements.iter().position( |e| e.selector == selector) {
            state.elements.remove( idx);
            Self::notify( &state, PageEvent::StructureChanged);
            true
        } else {
            false
        }
    }

    /// drop the event channel, which closes all current subscriptions. Subsequent subscriptions are closed right away
    pub fn close (&self) {
        self.state().tx = None;
    }

    pub fn len (&self)->usize { self.state().elements.len() }
    pub fn is_empty (&self)->bool { self.state().elements.is_empty() }
}

impl Default for SimPage {
    fn default()->Self { SimPage::new() }
}

impl HostPage for SimPage {
    fn query (&self, selector: &str)->Option<ElementId> {
        self.state().elements.iter().find( |e| e.selector == selector).map( |e| e.id)
    }

    fn text (&self, element: ElementId)->Option<String> {
        self.state().elements.iter().find( |e| e.id == element).map( |e| e.text.clone())
    }

    fn subscribe (&self)->PageEvents {
        match &self.state().tx {
            Some(tx) => tx.subscribe(),
            None => {
                let (tx,rx) = broadcast::channel( 1);
                drop(tx);
                rx
            }
        }
    }
}
