use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::article::DEFAULT_TEMPLATE;
use crate::error::Result;

pub const ENV_PREFIX: &str = "STRUCTURER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub template: String,
    pub generate_wikitext: bool,
    pub log_level: String,
    pub batch_chunk_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            template: DEFAULT_TEMPLATE.to_string(),
            generate_wikitext: true,
            log_level: "info".to_string(),
            batch_chunk_size: 500,
        }
    }
}

impl Settings {
    /// Defaults, then the optional TOML file, then `STRUCTURER_*` env vars.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::builder(file)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    fn builder(file: Option<&Path>) -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("template", defaults.template)?
            .set_default("generate_wikitext", defaults.generate_wikitext)?
            .set_default("log_level", defaults.log_level)?
            .set_default("batch_chunk_size", defaults.batch_chunk_size as u64)?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        Ok(builder)
    }

    pub fn chunk_size(&self) -> usize {
        self.batch_chunk_size.max(1)
    }
}

// ── Tests ──
