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

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T,SpotError>;

#[derive(Error,Debug)]
pub enum SpotError {

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::Error),

    #[error("config serialize/deserialize RON error {0}")]
    RonSerdeError( #[from] ron::error::SpannedError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config not found {0}")]
    ConfigNotFound(String),

    #[error("element with selector \"{selector}\" not found within {}ms", .timeout.as_millis())]
    ElementTimeout { selector: String, timeout: Duration },

    #[error("host page closed")]
    PageClosed,

    #[error("aircraft data subscription closed")]
    SubscriptionClosed,

    #[error("invalid settings {0}")]
    InvalidSettings(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        SpotError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
