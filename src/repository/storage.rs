//! Key/value document store on the local device.
//!
//! Each key maps to one pretty-printed JSON file under the storage root.
//! Writes go to a temporary file first and are renamed into place, so a
//! reader never observes a half-written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::errors::RepositoryResult;

pub const USER_KEY: &str = "travelh_user";
pub const TRIPS_KEY: &str = "travelh_trips";
pub const DIARY_KEY: &str = "travelh_diary_entries";
pub const WISHLIST_KEY: &str = "travelh_wishlist";
pub const PLACES_KEY: &str = "travelh_places";
pub const MOMENTS_KEY: &str = "travelh_moments";
pub const REVIEWS_KEY: &str = "travelh_reviews";

#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Opens the store, creating the root directory when missing.
    pub fn open(root: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads the document stored under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> RepositoryResult<Option<T>> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepositoryResult<()> {
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        log::debug!("Stored {key} in {}", path.display());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> RepositoryResult<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        let value: Option<Vec<i64>> = storage.get(WISHLIST_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn set_then_get_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("nested")).unwrap();

        storage.set(WISHLIST_KEY, &vec![3, 1]).unwrap();
        let value: Option<Vec<i64>> = storage.get(WISHLIST_KEY).unwrap();
        assert_eq!(value, Some(vec![3, 1]));

        storage.remove(WISHLIST_KEY).unwrap();
        storage.remove(WISHLIST_KEY).unwrap();
        let value: Option<Vec<i64>> = storage.get(WISHLIST_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        fs::write(dir.path().join("travelh_trips.json"), b"{not json").unwrap();

        let result: RepositoryResult<Option<Vec<i64>>> = storage.get(TRIPS_KEY);
        assert!(matches!(
            result,
            Err(crate::repository::errors::RepositoryError::Serialization(_))
        ));
    }
}
