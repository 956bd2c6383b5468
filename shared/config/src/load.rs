use std::borrow::Cow;
use std::path::Path;

use once_cell::sync::OnceCell;

use common::*;

use crate::config::Config;

/// Baked into the binary, used unless overridden by [CONFIG_PATH_VAR]
pub const DEFAULT_CONFIG: &str = include_str!("../../../resources/config.ron");

/// Environment variable pointing at a config file to use instead of the default
pub const CONFIG_PATH_VAR: &str = "DVD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parsing(#[from] ron::de::Error),

    #[error("Path is not a file")]
    NotAFile,

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub enum ConfigType<'a> {
    String(&'a str),
    File(&'a Path),
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Must be called once only, and before [get]
pub fn init(cfg: ConfigType) -> ConfigResult<()> {
    // parse config and fail early
    let config = cfg.load()?;

    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Panics if [init] has not been called
pub fn get() -> &'static Config {
    CONFIG.get().expect("config has not been initialized")
}

impl<'a> ConfigType<'a> {
    pub fn load(&self) -> ConfigResult<Config> {
        let text = match self {
            ConfigType::String(s) => Cow::Borrowed(*s),
            ConfigType::File(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotAFile);
                }

                let contents = std::fs::read_to_string(path)?;
                Cow::Owned(contents)
            }
        };

        ron::de::from_str(&text).map_err(ConfigError::Parsing)
    }

    pub fn describe(&self) -> Cow<str> {
        match self {
            ConfigType::String(_) => Cow::Borrowed("<embedded>"),
            ConfigType::File(path) => path.to_string_lossy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses() {
        let config = ConfigType::String(DEFAULT_CONFIG)
            .load()
            .expect("default config should be valid");

        assert_eq!(config.display.resolution, (1280, 720));
        assert!(config.display.resizable);
        assert!(config.logo.scale > 0.0);
    }

    #[test]
    fn bad_config() {
        let err = ConfigType::String("(display: ())").load();
        assert!(matches!(err, Err(ConfigError::Parsing(_))));
    }

    #[test]
    fn missing_file() {
        let err = ConfigType::File(Path::new("/definitely/not/here.ron")).load();
        assert!(matches!(err, Err(ConfigError::NotAFile)));
    }

    #[test]
    fn init_once() {
        init(ConfigType::String(DEFAULT_CONFIG)).expect("first init");
        assert!(matches!(
            init(ConfigType::String(DEFAULT_CONFIG)),
            Err(ConfigError::AlreadyInitialized)
        ));

        assert_eq!(get().display.title, "DVD Logo Simulator 2020");
    }
}
