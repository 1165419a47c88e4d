//! Soft-delete aware row storage shared by the in-memory repositories.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use sns_core::domain::{Page, PageRequest, SoftDelete};
use sns_core::error::RepoError;

/// Rows keyed by store-assigned id, behind an async RwLock.
///
/// Readers never see rows with `deleted_at` set; only the uniqueness check on insert does.
pub(crate) struct Table<T> {
    inner: RwLock<Rows<T>>,
}

struct Rows<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Table<T>
where
    T: SoftDelete + Clone + Send + Sync,
{
    pub(crate) fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Assign the next id and insert, unless any row (deleted or not) conflicts.
    pub(crate) async fn insert(
        &self,
        conflicts: impl Fn(&T) -> bool,
        build: impl FnOnce(i64) -> T,
    ) -> Result<T, RepoError> {
        let mut inner = self.inner.write().await;

        if inner.rows.values().any(conflicts) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        inner.last_id += 1;
        let id = inner.last_id;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    pub(crate) async fn find(&self, id: i64) -> Option<T> {
        let inner = self.inner.read().await;
        inner.rows.get(&id).filter(|row| row.is_active()).cloned()
    }

    pub(crate) async fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let inner = self.inner.read().await;
        inner
            .rows
            .values()
            .find(|row| row.is_active() && predicate(*row))
            .cloned()
    }

    pub(crate) async fn count_where(&self, predicate: impl Fn(&T) -> bool) -> u64 {
        let inner = self.inner.read().await;
        inner
            .rows
            .values()
            .filter(|row| row.is_active() && predicate(*row))
            .count() as u64
    }

    /// Overwrite an active row.
    pub(crate) async fn update(&self, id: i64, row: T) -> Result<T, RepoError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(existing) if existing.is_active() => {
                *existing = row.clone();
                Ok(row)
            }
            _ => Err(RepoError::NotFound),
        }
    }

    /// Stamp `deleted_at` on an active row.
    pub(crate) async fn soft_delete(&self, id: i64) -> Result<(), RepoError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(existing) if existing.is_active() => {
                existing.mark_deleted(Utc::now());
                Ok(())
            }
            _ => Err(RepoError::NotFound),
        }
    }

    /// Active rows matching `predicate`, sorted by `sort_key` descending, one page at a time.
    pub(crate) async fn page_where<K: Ord>(
        &self,
        predicate: impl Fn(&T) -> bool,
        sort_key: impl Fn(&T) -> K,
        request: PageRequest,
    ) -> Page<T> {
        let inner = self.inner.read().await;

        let mut matching: Vec<&T> = inner
            .rows
            .values()
            .filter(|row| row.is_active() && predicate(*row))
            .collect();
        matching.sort_by_key(|row| Reverse(sort_key(*row)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();

        Page::new(items, request, total)
    }
}
