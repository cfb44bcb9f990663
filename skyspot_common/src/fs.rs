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

use std::fs::{self,File};
use std::io::{self,Read,Write};
use std::path::{Path,PathBuf};
use std::env;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// `None` if the file does not exist, error if it exists but can't be read
pub fn existing_filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.is_file() { return Ok(None) }

    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok( Some(contents) )
}

/// replace the contents of the file at `path`, creating parent dirs as needed.
/// Data is written to a sibling temp file first and then renamed so that readers never see partial contents
pub fn set_filepath_contents <P: AsRef<Path>> (path: &P, new_contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { ensure_dir(dir)?; }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut file = File::create(&tmp)?;
    file.write_all(new_contents)?;
    file.sync_all()?;
    fs::rename( &tmp, path)
}

/// expand a leading `~/` and `$VAR` / `${VAR}` references from the environment. Unknown vars expand to ""
pub fn env_expand (s: &str) -> String {
    let s = if let Some(rest) = s.strip_prefix("~/") {
        match env::var("HOME") {
            Ok(home) => format!("{home}/{rest}"),
            Err(_) => s.to_string()
        }
    } else {
        s.to_string()
    };

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            let braced = chars.peek() == Some(&'{');
            if braced { chars.next(); }

            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' { name.push(c); chars.next(); } else { break }
            }
            if braced && chars.peek() == Some(&'}') { chars.next(); }

            if name.is_empty() {
                out.push('$');
            } else {
                out.push_str( &env::var(&name).unwrap_or_default());
            }
        } else {
            out.push(c);
        }
    }
    out
}
