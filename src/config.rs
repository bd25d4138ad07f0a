use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::slice_utils::NegativeOffsets;

pub const ENV_PREFIX: &str = "ROTATE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default)]
    pub negative_offsets: NegativeOffsets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Plain,
}

impl Config {
    /// Layers an optional TOML file under `ROTATE__*` environment variables.
    pub fn load(path: Option<PathBuf>) -> eyre::Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings =
                settings.add_source(config::File::from(path).required(true));
        }

        let settings = settings
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<Config>()?)
    }
}
