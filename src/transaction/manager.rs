use tracing::debug;

use crate::config::DatabaseConfig;
use crate::core::OrmError;
use crate::driver::{Connection, Driver, SequenceSource};
use crate::schema::Descriptor;
use crate::sql;
use crate::transaction::Transaction;

/// Factory for transactions: opens a connection per unit of work, begins
/// the database transaction and attaches the sequence source.
pub struct Manager<D: Driver, S: SequenceSource + Clone> {
    driver: D,
    sequences: S,
    config: DatabaseConfig,
}

impl<D: Driver, S: SequenceSource + Clone> Manager<D, S> {
    pub fn new(driver: D, sequences: S, config: DatabaseConfig) -> Self {
        Self {
            driver,
            sequences,
            config,
        }
    }

    pub fn start_transaction(&self) -> Result<Transaction<D::Conn, S>, OrmError> {
        let mut conn = self.driver.connect(&self.config)?;
        conn.begin()?;
        Ok(Transaction::new(conn, self.sequences.clone()))
    }

    /// One-shot schema bootstrap: creates the table for every descriptor
    /// that does not exist yet, in one committed transaction. Descriptors
    /// must be ordered so referenced types come before their referrers.
    pub fn create_tables(&self, descriptors: &[&'static Descriptor]) -> Result<(), OrmError> {
        let mut trx = self.start_transaction()?;
        for descriptor in descriptors {
            if trx.table_exists(descriptor) {
                debug!(target: "orm", "{} already exists", descriptor.name);
                continue;
            }
            trx.execute(&sql::create_table(descriptor), &[])?;
        }
        trx.commit()
    }
}
