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

use std::{fmt, sync::Arc, time::Duration};
use tokio::sync::broadcast::{self, error::RecvError};
use skyspot_common::debug;
use crate::errors::{Result,SpotError};

/// opaque handle of a page element. Ids are never reused, i.e. a re-rendered element gets a new id
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// what a page reports to its subscribers
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PageEvent {
    /// the text content of an element (or any of its descendants) changed
    TextChanged(ElementId),
    /// elements were added or removed somewhere in the page
    StructureChanged,
}

pub type PageEvents = broadcast::Receiver<PageEvent>;

/// the page we read aircraft fields from. We don't own its content, we can only look up elements
/// by selector, read their text and get notified about changes.
/// Implementations have to be cheap to query since every change notification causes a re-read
pub trait HostPage: Send + Sync {
    fn query (&self, selector: &str)->Option<ElementId>;

    /// `None` if the element is no longer part of the page
    fn text (&self, element: ElementId)->Option<String>;

    /// a new receiver for all subsequent page events. The receiver is closed when the page goes away
    fn subscribe (&self)->PageEvents;
}

impl<T> HostPage for Arc<T> where T: HostPage + ?Sized {
    fn query (&self, selector: &str)->Option<ElementId> { (**self).query(selector) }
    fn text (&self, element: ElementId)->Option<String> { (**self).text(element) }
    fn subscribe (&self)->PageEvents { (**self).subscribe() }
}

/// wait until an element matching `selector` is part of the page, or fail with `ElementTimeout` once
/// `timeout` has elapsed. Existing elements resolve without waiting
pub async fn wait_for_element<P> (page: &P, selector: &str, timeout: Duration)->Result<ElementId> where P: HostPage + ?Sized {
    // subscribe before the first query so that we can't miss an insertion in between
    let mut events = page.subscribe();
    if let Some(id) = page.query( selector) {
        return Ok(id)
    }

    let search = async {
        loop {
            match events.recv().await {
                Ok(PageEvent::StructureChanged) | Err(RecvError::Lagged(_)) => {
                    if let Some(id) = page.query( selector) {
                        return Ok(id)
                    }
                }
                Ok(PageEvent::TextChanged(_)) => {} // can't add elements
                Err(RecvError::Closed) => return Err( SpotError::PageClosed)
            }
        }
    };

    match tokio::time::timeout( timeout, search).await {
        Ok(res) => res,
        Err(_) => {
            debug!("element discovery timed out for {selector}");
            Err( SpotError::ElementTimeout { selector: selector.to_string(), timeout } )
        }
    }
}
