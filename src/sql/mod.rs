// Module declarations
pub mod ddl;
pub mod insert;
pub mod joins;
pub mod select;

// Re-exports for convenience
pub use ddl::create_table;
pub use insert::compile_insert;
pub use joins::{JoinKind, JoinSpec, ij, loj};
pub use select::{compile_multi_select, compile_select};
