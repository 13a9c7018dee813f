pub mod audit;
pub mod catalog;
pub mod database;
pub mod dto;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod seed;

pub use catalog::{Catalog, SharedCatalog};
pub use database::Database;
pub use memory::MemoryCatalog;
