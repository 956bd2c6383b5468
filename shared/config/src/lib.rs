mod config;
mod load;

pub use crate::config::{Config, Display, Logo};
pub use load::{get, init, ConfigError, ConfigType, CONFIG_PATH_VAR, DEFAULT_CONFIG};
