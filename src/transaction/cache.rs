use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::OrmError;
use crate::driver::StatementId;
use crate::schema::Descriptor;
use crate::sql;

#[derive(Default)]
struct CacheInner {
    /// Compiled select text per type name, before condition concatenation.
    selects: HashMap<&'static str, String>,
    /// Compiled insert text per type name.
    inserts: HashMap<&'static str, String>,
    /// Prepared handle per full SQL text, so each distinct trailing
    /// condition fragment gets its own prepared statement.
    statements: HashMap<String, StatementId>,
}

/// Per-transaction memo of compiled SQL text and prepared statement
/// handles. One mutex guards lazy population, making first-use-wins
/// warm-up safe if a transaction is ever shared across threads.
#[derive(Default)]
pub struct StatementCache {
    inner: Mutex<CacheInner>,
}

impl StatementCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select text for a type, compiled on first request.
    pub fn select_sql(&self, descriptor: &'static Descriptor) -> String {
        let mut inner = self.lock();
        inner
            .selects
            .entry(descriptor.name)
            .or_insert_with(|| sql::compile_select(descriptor))
            .clone()
    }

    /// Insert text for a type, compiled on first request.
    pub fn insert_sql(&self, descriptor: &'static Descriptor) -> String {
        let mut inner = self.lock();
        inner
            .inserts
            .entry(descriptor.name)
            .or_insert_with(|| sql::compile_insert(descriptor))
            .clone()
    }

    /// Prepared handle for the given full SQL text, preparing through the
    /// supplied closure on a miss.
    pub fn statement<F>(&self, sql_text: &str, prepare: F) -> Result<StatementId, OrmError>
    where
        F: FnOnce(&str) -> Result<StatementId, OrmError>,
    {
        let mut inner = self.lock();
        if let Some(&statement) = inner.statements.get(sql_text) {
            return Ok(statement);
        }
        let statement = prepare(sql_text)?;
        inner.statements.insert(sql_text.to_string(), statement);
        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldKind, ScalarKind};
    use std::cell::Cell;

    static MASTER1: Descriptor = Descriptor {
        name: "Master1",
        fields: &[
            FieldDef {
                name: "Id",
                kind: FieldKind::Scalar(ScalarKind::BigInt),
            },
            FieldDef {
                name: "Name",
                kind: FieldKind::Scalar(ScalarKind::Text),
            },
        ],
    };

    #[test]
    fn test_select_sql_is_stable_across_calls() {
        let cache = StatementCache::new();
        let first = cache.select_sql(&MASTER1);
        let second = cache.select_sql(&MASTER1);
        assert_eq!(first, second);
        assert_eq!(first, "select o.Id, o.Name from Master1 o");
    }

    #[test]
    fn test_statement_prepares_once_per_text() {
        let cache = StatementCache::new();
        let calls = Cell::new(0usize);
        assert_eq!(
            cache
                .statement("select 1", |_| {
                    calls.set(calls.get() + 1);
                    Ok(7)
                })
                .unwrap(),
            7
        );
        assert_eq!(cache.statement("select 1", |_| Ok(99)).unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_distinct_texts_get_distinct_handles() {
        let cache = StatementCache::new();
        let a = cache.statement("select 1", |_| Ok(1)).unwrap();
        let b = cache.statement("select 2", |_| Ok(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_prepare_failure_is_not_cached() {
        let cache = StatementCache::new();
        let err = cache.statement("select 1", |_| {
            Err(OrmError::Prepare("boom".to_string()))
        });
        assert!(err.is_err());
        // A later successful prepare still runs.
        assert_eq!(cache.statement("select 1", |_| Ok(3)).unwrap(), 3);
    }
}
