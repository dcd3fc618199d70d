// Mon Oct 19 2026 - Alex

use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_DIR: &str = ".";
pub const DEFAULT_HEADER_TEMPLATE: &str = "include/datametric___metric_type__.h";
pub const DEFAULT_SOURCE_TEMPLATE: &str = "src/datametric___metric_type__.cpp";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,
    pub header_template: String,
    pub source_template: String,
    pub output_dir: PathBuf,
    pub strict_tokens: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            source_template: DEFAULT_SOURCE_TEMPLATE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            strict_tokens: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON config file; keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> GeneratorResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| GeneratorError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| GeneratorError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_template_dir(mut self, dir: PathBuf) -> Self {
        self.template_dir = dir;
        self
    }

    pub fn with_header_template(mut self, filename: &str) -> Self {
        self.header_template = filename.to_string();
        self
    }

    pub fn with_source_template(mut self, filename: &str) -> Self {
        self.source_template = filename.to_string();
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_strict_tokens(mut self, strict: bool) -> Self {
        self.strict_tokens = strict;
        self
    }

    pub fn validate(&self) -> GeneratorResult<()> {
        if self.template_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Config("template_dir must not be empty".to_string()));
        }
        if self.header_template.is_empty() || self.source_template.is_empty() {
            return Err(GeneratorError::Config(
                "header_template and source_template must not be empty".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Config("output_dir must not be empty".to_string()));
        }
        Ok(())
    }
}
