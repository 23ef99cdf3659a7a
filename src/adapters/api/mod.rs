pub mod client;
pub mod directory_repo;
pub mod dto;

pub use client::DirectoryClient;
pub use directory_repo::RestDirectoryRepository;
