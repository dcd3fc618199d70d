// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("not enough arguments: {0}")]
    Usage(String),

    #[error("could not open file {}", .path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("contract violation: {0}")]
    Contract(String),

    #[error("could not open file {} for writing", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unresolved tokens in {}: {}", .file.display(), .tokens.join(", "))]
    UnresolvedTokens { file: PathBuf, tokens: Vec<String> },

    #[error("Token pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
