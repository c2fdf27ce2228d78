//! User store trait and its implementations.

pub mod users;
pub mod users_memory;

pub use users::{UserRecord, UserStore};
pub use users_memory::MemoryUserStore;
