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

use std::{env, path::{Path,PathBuf}, time::Duration};
use serde::{Serialize,Deserialize};
use skyspot_common::{fs, geo::HorizonModel};
use crate::errors::{Result,SpotError};

pub const CONFIGS: &'static str = "configs";

/// the page fields we read aircraft positions from
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FieldSelectors {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
}

impl Default for FieldSelectors {
    fn default()->Self {
        FieldSelectors {
            latitude: r#"p.text-md.leading-tight.text-gray-1300[data-testid="aircraft-panel__lat"]"#.to_string(),
            longitude: r#"p.text-md.leading-tight.text-gray-1300[data-testid="aircraft-panel__lng"]"#.to_string(),
            altitude: r#"p.text-md.leading-tight.text-gray-1300[data-testid="aircraft-panel__calibrated-altitude"]"#.to_string(),
        }
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct SpotConfig {
    pub selectors: FieldSelectors,
    pub discovery_timeout: Duration, // how long we wait for a page element to show up before we report it as missing
    pub store_path: String, // JSON file of the key-value store that holds the observer location (env vars are expanded)
    pub location_key: String, // store key of the observer location
    pub horizon: HorizonModel,
}

impl Default for SpotConfig {
    fn default()->Self {
        SpotConfig {
            selectors: FieldSelectors::default(),
            discovery_timeout: Duration::from_millis(5000),
            store_path: "~/.skyspot/data/local_storage.json".to_string(),
            location_key: "location".to_string(),
            horizon: HorizonModel::default(),
        }
    }
}

impl SpotConfig {
    pub fn store_path (&self)->PathBuf {
        PathBuf::from( fs::env_expand( &self.store_path))
    }
}

/// locate a config file, checking an explicit `SKYSPOT_HOME` first and `~/.skyspot` as a last resort.
/// Within those the file has to reside in `configs/<crate>/`
pub fn find_config_file (resource_crate: &str, filename: &str) -> Option<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();
    if let Ok(home) = env::var("SKYSPOT_HOME") { roots.push( PathBuf::from(home)); }
    if let Ok(usr_home) = env::var("HOME") { roots.push( Path::new(&usr_home).join(".skyspot")); }

    roots.into_iter()
        .map( |root| root.join(CONFIGS).join(resource_crate).join(filename))
        .find( |path| path.is_file())
}

pub fn load_config_from<C,P> (path: &P) -> Result<C> where C: for<'a> Deserialize<'a>, P: AsRef<Path> {
    match fs::existing_filepath_contents_as_string( path)? {
        Some(s) => Ok( ron::from_str( &s)? ),
        None => Err( SpotError::ConfigNotFound( path.as_ref().to_string_lossy().to_string()) )
    }
}

/// load a RON config of this crate by filename
pub fn load_config<C> (filename: &str) -> Result<C> where C: for<'a> Deserialize<'a> {
    match find_config_file( env!("CARGO_PKG_NAME"), filename) {
        Some(path) => load_config_from( &path),
        None => Err( SpotError::ConfigNotFound( filename.to_string()) )
    }
}
