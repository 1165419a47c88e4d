use chrono::{DateTime, Utc};

/// Records that are deleted by stamping a timestamp instead of being removed.
///
/// A record with `deleted_at` set is invisible to every read path. Stores apply
/// this as a mandatory predicate so new queries inherit it.
pub trait SoftDelete {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Stamp the record as deleted at `at`.
    fn mark_deleted(&mut self, at: DateTime<Utc>);

    fn is_active(&self) -> bool {
        self.deleted_at().is_none()
    }
}
