// Module declarations
pub mod error;
pub mod value;

// Re-exports for convenience
pub use error::OrmError;
pub use value::Value;
