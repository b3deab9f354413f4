pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod setup;

pub use config::Config;
pub use db::{create_tables, init_database, init_db, Repository};
pub use domain::{SystemSetting, User};
pub use error::SetupError;
pub use setup::setup_database;
