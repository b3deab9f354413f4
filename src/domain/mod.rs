//! Entity types persisted by the setup flow.

pub mod setting;
pub mod user;

pub use setting::{default_settings, SystemSetting};
pub use user::{demo_user, User};
