use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by layering TOML, environment
    /// variables (`BOT_` prefix, `__` for nesting, e.g. `BOT_MAIL__USER`),
    /// and JSON over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_file("config/Config.toml")
    }

    /// Loads configuration from a specific TOML file instead of the default
    /// location.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_file(path: &str) -> Result<AppConfig> {
        let figment =
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::file(path));
        Self::load_from(figment)
    }

    fn load_from(figment: Figment) -> Result<AppConfig> {
        let config: AppConfig = figment
            .merge(Env::prefixed("BOT_").split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        Ok(config)
    }
}
