pub mod cache;
pub mod config_store;
pub mod directory_repository;

pub use cache::*;
pub use config_store::*;
pub use directory_repository::*;
