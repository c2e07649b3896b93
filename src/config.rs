// compliance-docgen/src/config.rs

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that generated artifacts are written to.
    pub dir: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default values
            .set_default("service.name", "compliance-docgen")?
            .set_default("service.log_level", "info")?
            .set_default("output.dir", "./out")?
            // Load from config file if it exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., DOCGEN__OUTPUT__DIR)
            .add_source(Environment::with_prefix("DOCGEN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
