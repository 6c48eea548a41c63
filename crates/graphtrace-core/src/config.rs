//! Configuration for graphtrace
//!
//! Configuration is read from `graphtrace.toml` in the working directory, or
//! from an explicit `--config` path. Every field is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::dispatch::Algorithm;
use crate::error::{Result, TraceError};

pub use types::{LayoutConfig, RandomGraphConfig, RunConfig, TraceConfig, CONFIG_FILE_NAME};

impl TraceConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TraceError::io_operation("read config", path.display(), e))?;
        let config: TraceConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `graphtrace.toml` from a directory, falling back to defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let p = self.random.edge_probability;
        if !(0.0..=1.0).contains(&p) {
            crate::bail_invalid!("random.edge_probability", p);
        }
        if self.random.max_weight < 1 {
            crate::bail_invalid!("random.max_weight", self.random.max_weight);
        }
        if !self.layout.radius.is_finite() || self.layout.radius < 0.0 {
            crate::bail_invalid!("layout.radius", self.layout.radius);
        }
        if self.run.algorithm.parse::<Algorithm>().is_err() {
            crate::bail_invalid!("run.algorithm", &self.run.algorithm);
        }
        Ok(())
    }
}
