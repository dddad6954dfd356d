use crate::payload_loader::PayloadKind;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    payloads: Payloads,
}

impl AppConfig {
    /// Reads `config`, then `config_local` and finally `TRACKER__*` environment variables, each
    /// overriding the previous one.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("config").required(true))
                .add_source(File::with_name("config_local").required(false))
                .add_source(Environment::with_prefix("TRACKER").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn payloads(&self) -> &Payloads {
        &self.payloads
    }
}

#[derive(Debug, Deserialize)]
pub struct Payloads {
    directory: String,
    extension: String,
    kind: PayloadKind,
}

impl Payloads {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }
}
