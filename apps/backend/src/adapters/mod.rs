//! Adapters for external dependencies.

pub mod users_sea;

pub use users_sea::SeaUserStore;
