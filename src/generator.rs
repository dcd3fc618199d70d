// Mon Oct 19 2026 - Alex

use crate::config::GeneratorConfig;
use crate::error::GeneratorResult;
use crate::metric::MetricVariables;
use crate::template::TemplatedFile;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub variables: MetricVariables,
    pub written: Vec<PathBuf>,
}

/// Turns a metric name into a header and a source file.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, metric_name: &str) -> GeneratorResult<GenerationReport> {
        self.config.validate()?;

        let variables = MetricVariables::derive(metric_name)?;
        let data = Arc::new(variables.to_substitutions());
        for (key, value) in data.iter() {
            debug!("{} = {}", key, value);
        }

        // Both templates are read before anything is written.
        let header = TemplatedFile::new(
            &self.config.template_dir,
            &self.config.header_template,
            Arc::clone(&data),
        )?
        .with_strict_tokens(self.config.strict_tokens);
        let source = TemplatedFile::new(
            &self.config.template_dir,
            &self.config.source_template,
            Arc::clone(&data),
        )?
        .with_strict_tokens(self.config.strict_tokens);

        let mut written = Vec::with_capacity(2);
        for file in [&header, &source] {
            written.push(file.write_to_file(&self.config.output_dir)?);
        }

        Ok(GenerationReport { variables, written })
    }
}
