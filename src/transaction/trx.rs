use tracing::{debug, error};

use crate::codec;
use crate::core::{OrmError, Value};
use crate::driver::{Connection, SequenceSource};
use crate::schema::{Descriptor, Record, RecordSet};
use crate::sql;
use crate::sql::JoinSpec;
use crate::transaction::cache::StatementCache;

/// One unit of work: a live connection with an open database transaction,
/// the statement cache scoped to it, and a sequence source for generated
/// ids.
///
/// A transaction ends with exactly one [`commit`](Self::commit) or
/// [`rollback`](Self::rollback); afterwards every operation fails with
/// [`OrmError::Inactive`]. Dropping an active transaction rolls it back,
/// so an early return or panic never leaves the database half-committed.
pub struct Transaction<C: Connection, S: SequenceSource> {
    conn: C,
    sequences: S,
    cache: StatementCache,
    active: bool,
}

impl<C: Connection, S: SequenceSource> Transaction<C, S> {
    /// Wraps a connection whose database transaction has already begun.
    pub fn new(conn: C, sequences: S) -> Self {
        Self {
            conn,
            sequences,
            cache: StatementCache::new(),
            active: true,
        }
    }

    fn ensure_active(&self) -> Result<(), OrmError> {
        if self.active { Ok(()) } else { Err(OrmError::Inactive) }
    }

    /// Fetches all records of type `R` matching the raw trailing condition
    /// fragment (`where ...`/`order by ...`, or empty). Relations are
    /// fetched in the same statement through the compiled joins; the result
    /// is fully materialized before returning.
    ///
    /// The fragment is concatenated verbatim after the cached select text;
    /// args bind to its `$1..$N` placeholders.
    pub fn query<R: Record>(
        &mut self,
        conditions: &str,
        args: &[Value],
    ) -> Result<Vec<R>, OrmError> {
        self.ensure_active()?;
        let descriptor = R::descriptor();
        let sql_text = format!("{} {conditions}", self.cache.select_sql(descriptor));
        debug!(target: "orm", "{sql_text}");
        let conn = &mut self.conn;
        let statement = self.cache.statement(&sql_text, |s| conn.prepare(s))?;
        let slots = codec::scan_slots(descriptor);
        let rows = self.conn.query(statement, args, &slots)?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != slots.len() {
                return Err(OrmError::ShapeMismatch {
                    expected: slots.len(),
                    actual: row.len(),
                });
            }
            let (record, consumed) = R::from_row(&row, 0)?;
            if consumed != row.len() {
                return Err(OrmError::ShapeMismatch {
                    expected: consumed,
                    actual: row.len(),
                });
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Fetches one record by primary key. Zero rows is `None`, not an
    /// error.
    pub fn find<R: Record>(&mut self, id: i64) -> Result<Option<R>, OrmError> {
        let mut records = self.query::<R>("where o.Id = $1", &[Value::BigInt(id)])?;
        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records.remove(0)))
        }
    }

    /// Inserts a record. The next sequence value for the record's table is
    /// assigned into its primary-key field in place, so the caller's
    /// instance carries the generated id afterwards. Related records must
    /// already be persisted; only their ids are written.
    pub fn persist<R: Record>(&mut self, entity: &mut R) -> Result<(), OrmError> {
        self.ensure_active()?;
        let descriptor = R::descriptor();
        let sql_text = self.cache.insert_sql(descriptor);
        debug!(target: "orm", "{sql_text}");
        let conn = &mut self.conn;
        let statement = self.cache.statement(&sql_text, |s| conn.prepare(s))?;
        let id = self.sequences.next(&descriptor.table())?;
        entity.assign_id(id);
        let args = entity.insert_args();
        self.conn.execute(statement, &args)?;
        Ok(())
    }

    /// Fetches rows spanning several independent record types in one
    /// statement. Roots are aliased `o1..oN` in the order of the tuple
    /// type `T`; the join specification supplies the clause connecting
    /// each root after the first, and its ON fragments must reference
    /// those aliases. Each result row decodes to one `Option` per root;
    /// a left-outer root with no matching row decodes to `None`.
    pub fn query_multi<T: RecordSet>(
        &mut self,
        spec: &JoinSpec,
        conditions: &str,
        args: &[Value],
    ) -> Result<Vec<T>, OrmError> {
        self.ensure_active()?;
        let descriptors = T::descriptors();
        let base = sql::compile_multi_select(&descriptors, spec)?;
        let sql_text = format!("{base} {conditions}");
        debug!(target: "orm", "{sql_text}");
        let conn = &mut self.conn;
        let statement = self.cache.statement(&sql_text, |s| conn.prepare(s))?;
        let slots: Vec<_> = descriptors
            .iter()
            .flat_map(|descriptor| codec::scan_slots(descriptor))
            .collect();
        let rows = self.conn.query(statement, args, &slots)?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != slots.len() {
                return Err(OrmError::ShapeMismatch {
                    expected: slots.len(),
                    actual: row.len(),
                });
            }
            records.push(T::decode(&row)?);
        }
        Ok(records)
    }

    /// Executes a raw statement through the prepared-statement cache.
    /// Used by schema bootstrap; everyday work goes through the typed
    /// operations.
    pub fn execute(&mut self, sql_text: &str, args: &[Value]) -> Result<u64, OrmError> {
        self.ensure_active()?;
        debug!(target: "orm", "{sql_text}");
        let conn = &mut self.conn;
        let statement = self.cache.statement(sql_text, |s| conn.prepare(s))?;
        self.conn.execute(statement, args)
    }

    /// Probes whether a record type's table exists by preparing a
    /// never-matching select against it.
    pub fn table_exists(&mut self, descriptor: &Descriptor) -> bool {
        self.conn
            .prepare(&format!("select * from {} where 1 = 2", descriptor.name))
            .is_ok()
    }

    /// Commits the underlying transaction. The transaction becomes inert
    /// whether or not the commit succeeds; a failure is surfaced.
    pub fn commit(&mut self) -> Result<(), OrmError> {
        self.ensure_active()?;
        self.active = false;
        self.conn.commit()
    }

    /// Rolls back the underlying transaction. A no-op when already
    /// inactive.
    pub fn rollback(&mut self) -> Result<(), OrmError> {
        if self.active {
            self.active = false;
            self.conn.rollback()?;
        }
        Ok(())
    }

    /// Rolls back if still active, then closes the connection.
    pub fn close(mut self) -> Result<(), OrmError> {
        self.rollback()?;
        self.conn.close()
    }
}

impl<C: Connection, S: SequenceSource> Drop for Transaction<C, S> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(err) = self.conn.rollback() {
                error!(target: "orm", "rollback on drop failed: {err}");
            }
        }
    }
}
