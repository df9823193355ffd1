//! Static seed data shipped with the application.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::diary::DiaryEntry;
use crate::domain::moment::Moment;
use crate::domain::place::Place;
use crate::domain::trip::Trip;
use crate::repository::errors::RepositoryResult;

pub const PLACES_FILE: &str = "places.json";
pub const TRIPS_FILE: &str = "trips.json";
pub const DIARY_FILE: &str = "diary-entries.json";
pub const MOMENTS_FILE: &str = "moments.json";

/// Seed collections used until the user stores their own copy.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub places: Vec<Place>,
    pub trips: Vec<Trip>,
    pub diary_entries: Vec<DiaryEntry>,
    pub moments: Vec<Moment>,
}

fn load_file<T: DeserializeOwned>(dir: &Path, name: &str) -> RepositoryResult<Vec<T>> {
    let path = dir.join(name);
    match fs::read(&path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("Fixture {} not found, starting empty", path.display());
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

impl Fixtures {
    /// Loads every fixture file found in `dir`; missing files are empty.
    pub fn load(dir: impl AsRef<Path>) -> RepositoryResult<Self> {
        let dir = dir.as_ref();
        let fixtures = Self {
            places: load_file(dir, PLACES_FILE)?,
            trips: load_file(dir, TRIPS_FILE)?,
            diary_entries: load_file(dir, DIARY_FILE)?,
            moments: load_file(dir, MOMENTS_FILE)?,
        };
        log::info!(
            "Loaded fixtures: {} places, {} trips, {} diary entries, {} moments",
            fixtures.places.len(),
            fixtures.trips.len(),
            fixtures.diary_entries.len(),
            fixtures.moments.len()
        );
        Ok(fixtures)
    }
}
