use std::sync::Arc;

use crate::domain::audit::Clock;
use crate::repository::unit_of_work::{EntityState, TrackedEntry};

/// Commit hook that stamps audit timestamps on tracked entities.
///
/// Added entities get both `created_at` and `updated_at`; modified entities
/// get only `updated_at`. The clock is read once per commit so every stamp in
/// a commit carries the same instant. Nothing is written to the database here.
pub struct AuditInterceptor {
    clock: Arc<dyn Clock>,
}

impl AuditInterceptor {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Stamp every pending auditable entry, returning how many were stamped.
    pub(crate) fn before_commit(&self, entries: &mut [TrackedEntry]) -> usize {
        let has_writes = entries.iter().any(|entry| {
            matches!(entry.state, EntityState::Added | EntityState::Modified)
        });
        if !has_writes {
            return 0;
        }

        let now = self.clock.now();
        let mut stamped = 0;

        for entry in entries.iter_mut() {
            let state = entry.state;
            let Some(auditable) = entry.entity.as_auditable_mut() else {
                continue;
            };

            match state {
                EntityState::Added => {
                    auditable.set_created_at(now);
                    auditable.set_updated_at(now);
                    stamped += 1;
                }
                EntityState::Modified => {
                    auditable.set_updated_at(now);
                    stamped += 1;
                }
                EntityState::Unchanged | EntityState::Deleted | EntityState::Detached => {}
            }
        }

        stamped
    }
}
