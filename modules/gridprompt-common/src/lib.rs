pub mod config;
pub mod schema;
pub mod types;

pub use config::Config;
pub use schema::*;
pub use types::*;
