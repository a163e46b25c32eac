// Transaction module - unit of work, statement cache, manager

mod cache;
mod manager;
mod trx;

pub use cache::StatementCache;
pub use manager::Manager;
pub use trx::Transaction;
