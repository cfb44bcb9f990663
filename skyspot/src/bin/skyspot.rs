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
#![allow(unused)]

use std::{path::PathBuf, sync::Arc};
use tokio;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use skyspot_common::{info, geo::GeoPos};
use skyspot::{
    load_config, load_config_from, SpotConfig, SpotError,
    overlay::{altitude_text, FormField, OverlayController, OverlaySurface, OverlayView, NOT_AVAILABLE},
    scenario::{replay, Scenario},
    sim_page::SimPage,
    store::{FileKvStore, LocationStore},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "distance, bearing and horizon visibility of aircraft relative to an observer location")]
pub struct Args {
    /// RON config file to use instead of the default skyspot.ron
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// JSON key-value store file that holds the observer location (overrides config)
    #[arg(short,long)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// compute distance and bearing of an aircraft position relative to the stored observer
    Spot {
        #[arg(long, allow_hyphen_values=true)]
        lat: f64,
        #[arg(long, allow_hyphen_values=true)]
        lon: f64,
        /// aircraft altitude in meters
        #[arg(long, allow_hyphen_values=true)]
        alt: f64,
        /// print result as JSON
        #[arg(long)]
        json: bool,
    },

    /// store the observer location. Values are checked the same way as in the overlay settings form
    SetLocation {
        #[arg(allow_hyphen_values=true)]
        lat: String,
        #[arg(allow_hyphen_values=true)]
        lon: String,
        /// observer altitude in meters
        #[arg(allow_hyphen_values=true)]
        alt: String,
    },

    /// print the stored observer location
    ShowLocation,

    /// replay a RON page scenario and print the overlay as it changes
    Replay {
        scenario: PathBuf
    },
}

/// prints overlay changes and alerts to stdout
struct TerminalSurface {
    verbose: bool,
    last: Option<OverlayView>,
}

impl TerminalSurface {
    fn new (verbose: bool)->Self { TerminalSurface { verbose, last: None } }
}

impl OverlaySurface for TerminalSurface {
    fn render (&mut self, view: &OverlayView) {
        if self.verbose && self.last.as_ref() != Some(view) {
            let horizon = match view.below_horizon { Some(true) => " (below horizon)", _ => "" };
            if view.settings_visible {
                println!("[settings] lat: {:?}, lon: {:?}, alt: {:?}", view.form.latitude, view.form.longitude, view.form.altitude);
            } else {
                println!("[{}] altitude: {}, distance: {}, bearing: {}{}", view.toggle_label, view.altitude, view.distance, view.bearing, horizon);
            }
            self.last = Some(view.clone());
        }
    }

    fn alert (&mut self, msg: &str) {
        println!("ALERT: {msg}");
    }
}

fn get_config (args: &Args)->Result<SpotConfig> {
    let mut config: SpotConfig = match &args.config {
        Some(path) => load_config_from( path)?,
        None => match load_config( "skyspot.ron") {
            Ok(config) => config,
            Err(SpotError::ConfigNotFound(_)) => {
                info!("no skyspot.ron config found, using defaults");
                SpotConfig::default()
            }
            Err(e) => return Err(e.into())
        }
    };

    if let Some(path) = &args.store {
        config.store_path = path.to_string_lossy().to_string();
    }
    Ok(config)
}

fn open_locations (config: &SpotConfig)->Result<LocationStore<FileKvStore>> {
    let kv = FileKvStore::open( &config.store_path())?;
    Ok( LocationStore::new( kv, &config.location_key) )
}

#[tokio::main(flavor = "current_thread")]
async fn main()->Result<()> {
    // note this only succeeds if there is no global subscriber set yet
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let args = Args::parse();
    let config = get_config( &args)?;

    match &args.cmd {
        Cmd::Spot { lat, lon, alt, json } => {
            let locations = open_locations( &config)?;
            let controller = OverlayController::new( TerminalSurface::new(false), locations, config.horizon);
            let aircraft = GeoPos::new( *lat, *lon, *alt);

            match controller.spot( &aircraft) {
                Some(spot) => {
                    if *json {
                        println!("{}", serde_json::to_string( &spot)?);
                    } else {
                        println!("altitude: {}", altitude_text( aircraft.alt_m));
                        println!("distance: {} km", spot.distance());
                        println!("bearing:  {}°", spot.bearing());
                        if spot.below_horizon { println!("aircraft is below the horizon") }
                    }
                }
                None => {
                    println!("distance: {NOT_AVAILABLE}, bearing: {NOT_AVAILABLE} (no observer location set)");
                }
            }
        }

        Cmd::SetLocation { lat, lon, alt } => {
            let locations = open_locations( &config)?;
            let mut controller = OverlayController::new( TerminalSurface::new(false), locations, config.horizon);
            controller.open_settings();
            controller.set_form_field( FormField::Latitude, lat);
            controller.set_form_field( FormField::Longitude, lon);
            controller.set_form_field( FormField::Altitude, alt);
            let loc = controller.save_settings()?;
            println!("observer location: {loc}");
        }

        Cmd::ShowLocation => {
            let locations = open_locations( &config)?;
            match locations.load()? {
                Some(loc) => println!("{}", serde_json::to_string( &loc)?),
                None => println!("no observer location set in {:?}", config.store_path())
            }
        }

        Cmd::Replay { scenario } => {
            let scenario = Scenario::from_path( scenario)?;
            let locations = open_locations( &config)?;
            let controller = OverlayController::new( TerminalSurface::new(true), locations, config.horizon);
            let page = Arc::new( SimPage::new());

            let controller = replay( &scenario, &config, page, controller).await?;
            let view = controller.view();
            println!("final: altitude: {}, distance: {}, bearing: {}", view.altitude, view.distance, view.bearing);
        }
    }

    Ok(())
}
