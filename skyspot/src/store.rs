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

use std::{collections::HashMap, path::{Path,PathBuf}};
use skyspot_common::{fs, geo::GeoPos, debug};
use crate::errors::Result;

/// abstraction for the string key-value store of the host environment (think browser local storage).
/// Values are opaque strings, typed access is layered on top (see [`LocationStore`])
pub trait KvStore {
    fn get (&self, key: &str)->Result<Option<String>>;
    fn set (&mut self, key: &str, value: &str)->Result<()>;
    fn remove (&mut self, key: &str)->Result<bool>;
}

/* #region KvStore impls **************************************************************************/

/// non-persistent store, mostly for tests
#[derive(Debug,Default,Clone)]
pub struct MemKvStore {
    map: HashMap<String,String>
}

impl MemKvStore {
    pub fn new ()->Self { MemKvStore::default() }
}

impl KvStore for MemKvStore {
    fn get (&self, key: &str)->Result<Option<String>> { Ok( self.map.get(key).cloned()) }

    fn set (&mut self, key: &str, value: &str)->Result<()> {
        self.map.insert( key.to_string(), value.to_string());
        Ok(())
    }

    fn remove (&mut self, key: &str)->Result<bool> { Ok( self.map.remove(key).is_some()) }
}

/// a HashMap based store that is initialized from and saved to a JSON object file.
/// Each modification is written through, there is no explicit save
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    map: HashMap<String,String>
}

impl FileKvStore {
    /// open the store at `path`. A missing file is an empty store, it gets created on the first `set`
    pub fn open<P: AsRef<Path>> (path: &P)->Result<Self> {
        let path = path.as_ref().to_path_buf();
        let map: HashMap<String,String> = match fs::existing_filepath_contents_as_string( &path)? {
            Some(s) if !s.trim().is_empty() => serde_json::from_str( &s)?,
            _ => HashMap::new()
        };
        debug!("opened key-value store {:?} with {} entries", path, map.len());
        Ok( FileKvStore { path, map } )
    }

    pub fn path (&self)->&Path { &self.path }

    fn save (&self)->Result<()> {
        let data = serde_json::to_vec_pretty( &self.map)?;
        Ok( fs::set_filepath_contents( &self.path, &data)? )
    }
}

impl KvStore for FileKvStore {
    fn get (&self, key: &str)->Result<Option<String>> { Ok( self.map.get(key).cloned()) }

    fn set (&mut self, key: &str, value: &str)->Result<()> {
        self.map.insert( key.to_string(), value.to_string());
        self.save()
    }

    fn remove (&mut self, key: &str)->Result<bool> {
        if self.map.remove(key).is_some() {
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/* #endregion KvStore impls */

/// typed access to the observer location, which is kept as `{"lat":..,"lon":..,"alt":..}` JSON under a single key
#[derive(Debug)]
pub struct LocationStore<K> where K: KvStore {
    kv: K,
    key: String,
}

impl<K> LocationStore<K> where K: KvStore {
    pub fn new (kv: K, key: &str)->Self {
        LocationStore { kv, key: key.to_string() }
    }

    pub fn key (&self)->&str { self.key.as_str() }
    pub fn kv (&self)->&K { &self.kv }

    /// the stored location, `None` if there is none (a stored JSON `null` counts as none)
    pub fn load (&self)->Result<Option<GeoPos>> {
        match self.kv.get( &self.key)? {
            Some(s) => Ok( serde_json::from_str::<Option<GeoPos>>( &s)? ),
            None => Ok(None)
        }
    }

    pub fn save (&mut self, location: &GeoPos)->Result<()> {
        let s = serde_json::to_string( location)?;
        self.kv.set( &self.key, &s)
    }

    pub fn clear (&mut self)->Result<bool> {
        self.kv.remove( &self.key)
    }
}
