// Mon Oct 19 2026 - Alex

use crate::error::{GeneratorError, GeneratorResult};
use crate::template::Substitutions;
use serde::Serialize;

pub const METRIC_TYPE: &str = "metric_type";
pub const METRIC_CLASS: &str = "metric_class";
pub const METRIC_INCLUDE: &str = "metric_include";
pub const METRIC_TYPE_NAME: &str = "metric_type_name";
pub const METRIC_OUTPUT_VAR: &str = "metric_output_var";

/// Placeholder left for the author of the new metric to edit by hand.
pub const DEFAULT_OUTPUT_VAR: &str = "\"Test\"";

/// The five names derived from a metric's display name, e.g. `"Oil Pressure"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricVariables {
    pub metric_type: String,
    pub metric_class: String,
    pub metric_include: String,
    pub metric_type_name: String,
    pub metric_output_var: String,
}

impl MetricVariables {
    pub fn derive(name: &str) -> GeneratorResult<Self> {
        if name.trim().is_empty() {
            return Err(GeneratorError::Usage(
                "a metric name is required, e.g. \"Oil Pressure\"".to_string(),
            ));
        }

        let metric_type = name.to_lowercase().replace(' ', "_");
        let metric_class = format!("{}METRIC", name.to_uppercase().replace(' ', ""));
        let metric_include = format!("\"datametric_{}.h\"", metric_type);
        let metric_type_name = format!("\"{}\"", name.replace(' ', ""));

        Ok(Self {
            metric_type,
            metric_class,
            metric_include,
            metric_type_name,
            metric_output_var: DEFAULT_OUTPUT_VAR.to_string(),
        })
    }

    pub fn to_substitutions(&self) -> Substitutions {
        Substitutions::new()
            .with(METRIC_TYPE, &self.metric_type)
            .with(METRIC_CLASS, &self.metric_class)
            .with(METRIC_INCLUDE, &self.metric_include)
            .with(METRIC_TYPE_NAME, &self.metric_type_name)
            .with(METRIC_OUTPUT_VAR, &self.metric_output_var)
    }
}
