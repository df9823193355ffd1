#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use travelh::repository::LocalRepository;
use travelh::repository::fixtures::Fixtures;
use travelh::repository::storage::LocalStorage;

/// Repository over a throwaway storage directory, removed on drop.
pub struct TestStore {
    dir: TempDir,
    fixtures: Fixtures,
}

impl TestStore {
    /// Store without any seed data.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            fixtures: Fixtures::default(),
        }
    }

    /// Store seeded with the bundled fixtures from `data/`.
    pub fn seeded() -> Self {
        let fixtures = Fixtures::load(fixtures_dir()).expect("load fixtures");
        Self {
            dir: TempDir::new().expect("create temp dir"),
            fixtures,
        }
    }

    /// Opens a fresh repository over the same storage directory.
    pub fn repo(&self) -> LocalRepository {
        let storage = LocalStorage::open(self.dir.path()).expect("open storage");
        LocalRepository::new(storage, self.fixtures.clone())
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
