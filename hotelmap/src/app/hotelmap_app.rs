use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hotelmap_core::model::{
    area::Area,
    hotel::Hotel,
    stats::QuickStats,
    surface::{MapSurface, MapSurfaceError},
};
use serde::{Deserialize, Serialize};

use super::{FilterArgs, HotelMapAppError, Session};
use crate::surface::{GeoJsonSurface, LogSurface};

/// Command line hotel browser: filter a city's hotels by area, category and
/// nightly price, summarize them, and export map markers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HotelMapApp {
    #[command(subcommand)]
    pub op: HotelMapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum HotelMapOperation {
    /// print the quick stats for the hotels passing the filters
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// print stats as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// list the hotels passing the filters as CSV
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// CSV file to write. if not provided, rows go to stdout.
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// write markers.geojson and view.json for the hotels passing the filters
    Markers {
        #[command(flatten)]
        filter: FilterArgs,

        /// location on disk to write output files. if not provided, use the
        /// configured output directory or the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// drive the browser through a JSON file of actions and map events,
    /// printing stats after each step
    Replay {
        #[command(flatten)]
        filter: FilterArgs,

        /// JSON array of actions and events
        #[arg(long)]
        actions_file: String,

        /// write each rendered frame to this directory. if not provided,
        /// frames are only logged.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// print the named areas with their bounds and hotel counts
    Areas {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

impl HotelMapOperation {
    pub fn run(&self) -> Result<(), HotelMapAppError> {
        match self {
            HotelMapOperation::Stats { filter, json } => {
                let session = filter.load_session()?;
                let stats = QuickStats::from_hotels(visible_hotels(&session));
                if *json {
                    let out = serde_json::to_string_pretty(&stats).map_err(|e| {
                        MapSurfaceError::Serialize(format!("failure serializing stats: {e}"))
                    })?;
                    println!("{out}");
                } else {
                    println!("{stats}");
                }
                Ok(())
            }
            HotelMapOperation::List {
                filter,
                output_file,
            } => {
                let session = filter.load_session()?;
                let hotels = visible_hotels(&session);
                super::list::run(&hotels, output_file.as_ref().map(Path::new))
            }
            HotelMapOperation::Markers {
                filter,
                output_directory,
            } => {
                let session = filter.load_session()?;
                let outdir = match output_directory
                    .as_deref()
                    .or(session.config.output_directory.as_deref())
                {
                    Some(out) => PathBuf::from(out),
                    None => PathBuf::from(""),
                };
                super::markers::run(&session, &outdir)
            }
            HotelMapOperation::Replay {
                filter,
                actions_file,
                output_directory,
            } => {
                let session = filter.load_session()?;
                let steps = super::replay::read_steps(Path::new(actions_file))?;
                let surface: Box<dyn MapSurface> = match output_directory
                    .as_deref()
                    .or(session.config.output_directory.as_deref())
                {
                    Some(dir) => Box::new(GeoJsonSurface::new(dir)),
                    None => Box::new(LogSurface::default()),
                };
                let history = super::replay::run(session, &steps, surface)?;
                for (step, stats) in steps.iter().zip(history.iter()) {
                    println!("# {step}");
                    println!("{stats}");
                }
                Ok(())
            }
            HotelMapOperation::Areas { filter } => {
                let session = filter.load_session()?;
                let hotels = visible_hotels(&session);
                println!(
                    "{:<18} {:>9} {:>11} {:>21} {:>23} {:>7}",
                    "area", "lat", "lng", "lat range", "lng range", "hotels"
                );
                for area in Area::ALL {
                    let center = area.center();
                    let bounds = area.bounds();
                    let count = hotels
                        .iter()
                        .filter(|h| area.contains(h.latitude, h.longitude))
                        .count();
                    println!(
                        "{:<18} {:>9.4} {:>11.4} {:>10.3}..{:<9.3} {:>11.3}..{:<10.3} {:>7}",
                        area.name(),
                        center.y(),
                        center.x(),
                        bounds.min().y,
                        bounds.max().y,
                        bounds.min().x,
                        bounds.max().x,
                        count
                    );
                }
                Ok(())
            }
        }
    }
}

fn visible_hotels(session: &Session) -> Vec<&Hotel> {
    let filter = session.filter();
    let hotels = filter.apply(&session.dataset);
    log::info!(
        "{} of {} hotels pass {filter}",
        hotels.len(),
        session.dataset.len()
    );
    hotels
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        HotelMapApp::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_flags() {
        let app = HotelMapApp::try_parse_from([
            "hotelmap",
            "stats",
            "--area",
            "Belltown",
            "--category",
            "none",
            "--max-price",
            "-5",
            "--amenity",
            "Spa",
            "--amenity",
            "Bar",
            "--json",
        ])
        .unwrap();
        match app.op {
            HotelMapOperation::Stats { filter, json } => {
                assert!(json);
                assert_eq!(filter.area.as_deref(), Some("Belltown"));
                assert_eq!(filter.max_price, Some(-5));
                assert_eq!(filter.amenities, vec!["Spa", "Bar"]);
                let session = filter.load_session().unwrap();
                assert_eq!(session.state.max_price.value(), 0);
            }
            _ => panic!("expected stats operation"),
        }
    }

    #[test]
    fn test_replay_requires_actions_file() {
        let result = HotelMapApp::try_parse_from(["hotelmap", "replay"]);
        assert!(result.is_err());
    }
}
