use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::OrmError;

/// Monotonic id source with one independent counter per table name.
///
/// Called exactly once per persisted record, with the lowercased type name.
/// Production deployments back this with a sequence table; the mapper only
/// depends on monotonicity within a process lifetime.
pub trait SequenceSource {
    fn next(&self, table: &str) -> Result<i64, OrmError>;
}

/// In-memory sequence source. Counters start at 1 and are shared across
/// clones, so a manager and the transactions it starts observe one
/// numbering.
#[derive(Debug, Clone, Default)]
pub struct MemorySequences {
    counters: Arc<Mutex<HashMap<String, i64>>>,
}

impl MemorySequences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceSource for MemorySequences {
    fn next(&self, table: &str) -> Result<i64, OrmError> {
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let counter = counters.entry(table.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }
}
