//! Reference colors and sizes installed during schema initialization.
//!
//! Seed rows use reserved negative identifiers; rows created at runtime get
//! positive ids from `AUTOINCREMENT`. Rows are inserted with `INSERT OR IGNORE`
//! keyed on those ids, so initialization can run any number of times.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::run_pending_migrations;
use crate::models::color::Color as DbColor;
use crate::models::size::Size as DbSize;
use crate::repository::DieselRepository;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Reference sizes as `(id, name)`.
pub const SIZE_SEEDS: [(i32, &str); 6] = [
    (-1, "X"),
    (-2, "S"),
    (-3, "XS"),
    (-4, "L"),
    (-5, "XL"),
    (-6, "XXL"),
];

/// Reference colors as `(id, name)`.
pub const COLOR_SEEDS: [(i32, &str); 6] = [
    (-1, "Blue"),
    (-2, "Red"),
    (-3, "Green"),
    (-4, "Purple"),
    (-5, "Yellow"),
    (-6, "Black"),
];

/// Creation and update timestamp of every seed row: 2023-08-30T00:00:00Z.
pub fn seed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 8, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Outcome of [`DieselRepository::initialize_schema`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub migrations_applied: usize,
    pub colors_seeded: usize,
    pub sizes_seeded: usize,
}

/// Insert any missing seed rows, returning `(colors, sizes)` inserted.
pub fn apply_seed_data(conn: &mut SqliteConnection) -> RepositoryResult<(usize, usize)> {
    use crate::schema::{colors, sizes};

    let stamp = seed_timestamp();

    conn.transaction::<(usize, usize), RepositoryError, _>(|conn| {
        let mut colors_seeded = 0;
        for (id, name) in COLOR_SEEDS {
            let row = DbColor {
                id,
                name: name.to_string(),
                created_at: stamp,
                updated_at: stamp,
            };
            colors_seeded += diesel::insert_or_ignore_into(colors::table)
                .values(&row)
                .execute(conn)?;
        }

        let mut sizes_seeded = 0;
        for (id, name) in SIZE_SEEDS {
            let row = DbSize {
                id,
                name: name.to_string(),
                created_at: stamp,
                updated_at: stamp,
            };
            sizes_seeded += diesel::insert_or_ignore_into(sizes::table)
                .values(&row)
                .execute(conn)?;
        }

        Ok((colors_seeded, sizes_seeded))
    })
}

impl DieselRepository {
    /// Run pending migrations, then install the reference colors and sizes.
    pub fn initialize_schema(&self) -> RepositoryResult<SchemaReport> {
        let mut conn = self.conn()?;

        let migrations_applied = run_pending_migrations(&mut conn)?;
        let (colors_seeded, sizes_seeded) = apply_seed_data(&mut conn)?;

        log::info!(
            "Schema ready: {migrations_applied} migrations applied, \
             {colors_seeded} colors and {sizes_seeded} sizes seeded"
        );

        Ok(SchemaReport {
            migrations_applied,
            colors_seeded,
            sizes_seeded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_reserved_negative_values() {
        for (id, _) in COLOR_SEEDS.iter().chain(SIZE_SEEDS.iter()) {
            assert!(*id < 0, "seed id {id} must stay out of the user id space");
        }
    }

    #[test]
    fn seed_ids_are_unique_per_table() {
        let color_ids: HashSet<i32> = COLOR_SEEDS.iter().map(|(id, _)| *id).collect();
        let size_ids: HashSet<i32> = SIZE_SEEDS.iter().map(|(id, _)| *id).collect();

        assert_eq!(color_ids.len(), COLOR_SEEDS.len());
        assert_eq!(size_ids.len(), SIZE_SEEDS.len());
    }

    #[test]
    fn seed_timestamp_is_midnight_utc_august_30th() {
        assert_eq!(seed_timestamp().to_string(), "2023-08-30 00:00:00");
    }
}
