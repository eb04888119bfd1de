//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tempfile::TempDir;

use pustok_store::config::StoreConfig;
use pustok_store::db::{DbPool, establish_connection_pool};
use pustok_store::domain::audit::Clock;
use pustok_store::repository::DieselRepository;

/// Temporary database used in integration tests, migrated and seeded.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join("catalog.db");

        let config = StoreConfig::default()
            .with_database_url(path.to_string_lossy().into_owned());
        let pool = establish_connection_pool(&config)
            .expect("Failed to establish SQLite connection.");
        DieselRepository::new(pool.clone())
            .initialize_schema()
            .expect("Schema initialization failed");

        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn repo_with_clock(&self, clock: Arc<dyn Clock>) -> DieselRepository {
        DieselRepository::with_clock(self.pool(), clock)
    }
}

/// Clock advancing one second on every reading.
pub struct SteppingClock {
    base: NaiveDateTime,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(base: NaiveDateTime) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }

    /// Timestamp handed out by the `n`-th reading (0-based).
    pub fn reading(&self, n: i64) -> NaiveDateTime {
        self.base + TimeDelta::seconds(n)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.reading(tick)
    }
}

pub fn fixed_datetime() -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(2024, 1, 1) {
        Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        None => NaiveDateTime::default(),
    }
}
