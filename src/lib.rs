// Mon Oct 19 2026 - Alex

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod metric;
pub mod template;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{GenerationReport, Generator};
pub use metric::MetricVariables;
pub use template::{Substitutions, TemplatedFile};
