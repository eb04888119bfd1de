use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Capability implemented by entities that carry creation and update timestamps.
///
/// The unit of work stamps these fields right before every commit: both on
/// first persistence, only `updated_at` on later modifications.
pub trait Auditable {
    fn created_at(&self) -> NaiveDateTime;
    fn set_created_at(&mut self, value: NaiveDateTime);
    fn updated_at(&self) -> NaiveDateTime;
    fn set_updated_at(&mut self, value: NaiveDateTime);
}

/// Source of the current UTC time used for audit stamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock reading UTC time from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Placeholder timestamp carried by entities that were never committed.
pub fn unstamped() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Implements [`Auditable`] for structs exposing `created_at` and `updated_at` fields.
macro_rules! impl_auditable {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl $crate::domain::audit::Auditable for $entity {
                fn created_at(&self) -> chrono::NaiveDateTime {
                    self.created_at
                }

                fn set_created_at(&mut self, value: chrono::NaiveDateTime) {
                    self.created_at = value;
                }

                fn updated_at(&self) -> chrono::NaiveDateTime {
                    self.updated_at
                }

                fn set_updated_at(&mut self, value: chrono::NaiveDateTime) {
                    self.updated_at = value;
                }
            }
        )+
    };
}

impl_auditable!(
    super::product::Product,
    super::category::Category,
    super::color::Color,
    super::size::Size,
    super::slide_banner::SlideBanner,
    super::email_message::EmailMessage,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;

    #[test]
    fn utc_clock_tracks_system_time() {
        let before = Utc::now().naive_utc();
        let now = UtcClock.now();
        let after = Utc::now().naive_utc();

        assert!(before <= now && now <= after);
    }

    #[test]
    fn auditable_accessors_read_and_write_fields() {
        let mut color = Color::new("Teal");
        assert_eq!(color.created_at(), unstamped());

        let stamp = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_default();
        color.set_created_at(stamp);
        color.set_updated_at(stamp);

        assert_eq!(color.created_at, stamp);
        assert_eq!(color.updated_at(), stamp);
    }
}
