mod config;

pub use config::{Config, get_config_manager};
