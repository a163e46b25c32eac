// relmap - minimal relational mapper
// Derives SELECT/INSERT SQL from static record descriptors, fetches
// arbitrarily deep many-to-one graphs in one statement, and persists
// records inside explicit transactions.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::clone_on_copy)]

// Core value model and error taxonomy
pub mod core;

// Record descriptors and the typed Record/RecordSet traits
pub mod schema;

// Row buffer codec: scan slots and flattened-row decoding
pub mod codec;

// SQL text generation (select/insert/ddl) and the join builder
pub mod sql;

// Driver and sequence-generator collaborator boundary
pub mod driver;

// Transactions, statement cache, manager
pub mod transaction;

// Database connection configuration
pub mod config;

// Re-export commonly used types for convenience
pub use crate::codec::FromValue;
pub use crate::config::DatabaseConfig;
pub use crate::core::{OrmError, Value};
pub use crate::driver::{Connection, Driver, MemorySequences, SequenceSource, StatementId};
pub use crate::schema::{Descriptor, FieldDef, FieldKind, Record, RecordSet, ScalarKind};
pub use crate::sql::{JoinKind, JoinSpec, ij, loj};
pub use crate::transaction::{Manager, Transaction};
