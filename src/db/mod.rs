//! Database module for SQLite operations.
//!
//! This module provides:
//! - Connection setup and SQLite pragma configuration
//! - Schema creation from the embedded declarative schema
//! - Default-data seeding
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::{create_tables, init_db};
pub use repo::Repository;
pub use seed::init_database;
