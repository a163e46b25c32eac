//! Collaborator boundary: the database driver and the id sequence source.
//!
//! The mapper itself issues PostgreSQL-style SQL (`$1..$N` positional
//! placeholders) through these traits and never touches a wire protocol.
//! Calls are synchronous and blocking; query results are materialized
//! eagerly.

mod sequence;

pub use sequence::{MemorySequences, SequenceSource};

use crate::core::{OrmError, Value};
use crate::schema::ScalarKind;

/// Handle to a prepared statement, valid for the lifetime of the
/// connection that produced it.
pub type StatementId = usize;

/// One live database connection with at most one open transaction.
pub trait Connection {
    /// Begins a transaction on this connection.
    fn begin(&mut self) -> Result<(), OrmError>;

    /// Prepares a statement and returns a reusable handle.
    fn prepare(&mut self, sql: &str) -> Result<StatementId, OrmError>;

    /// Executes a non-returning statement; yields the affected row count.
    fn execute(&mut self, statement: StatementId, args: &[Value]) -> Result<u64, OrmError>;

    /// Executes a query and drains it. `slots` describes the expected
    /// column kinds in select-list order so the driver can scan into
    /// matching destinations; rows must come back with exactly that width.
    fn query(
        &mut self,
        statement: StatementId,
        args: &[Value],
        slots: &[ScalarKind],
    ) -> Result<Vec<Vec<Value>>, OrmError>;

    fn commit(&mut self) -> Result<(), OrmError>;

    fn rollback(&mut self) -> Result<(), OrmError>;

    fn close(&mut self) -> Result<(), OrmError>;
}

/// Opens connections for a configured database.
pub trait Driver {
    type Conn: Connection;

    fn connect(&self, config: &crate::config::DatabaseConfig) -> Result<Self::Conn, OrmError>;
}
