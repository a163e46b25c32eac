// Module declarations
pub mod descriptor;
pub mod record;

// Re-exports for convenience
pub use descriptor::{Descriptor, FieldDef, FieldKind, ScalarKind};
pub use record::{Record, RecordSet};
