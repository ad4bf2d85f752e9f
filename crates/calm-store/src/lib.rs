pub mod config;
pub mod error;
pub mod home;
pub mod schema;
pub mod store;

pub use config::{BreathingConfig, Config};
pub use error::{Result, StoreError};
pub use home::CalmHome;
pub use store::{Session, Store};
