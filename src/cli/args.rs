// Mon Oct 19 2026 - Alex

use crate::config::GeneratorConfig;
use crate::error::GeneratorResult;
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "datametric-generator")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate a new DATAMETRIC-derived class from header and source templates", long_about = None)]
pub struct Args {
    /// Name of the new metric type with each word capitalized, e.g. "Oil Pressure"
    pub metric_name: String,

    /// Directory the template paths are relative to
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// Directory the generated files are written into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Header template path, relative to the template directory
    #[arg(long)]
    pub header_template: Option<String>,

    /// Source template path, relative to the template directory
    #[arg(long)]
    pub source_template: Option<String>,

    /// JSON file with generator settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write files even if they still contain unknown placeholders
    #[arg(long)]
    pub allow_unresolved: bool,

    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    /// `--log-level` wins; otherwise each `-v` raises the level one step above warn.
    /// `None` leaves the choice to `RUST_LOG`.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        if let Some(level) = self.log_level {
            return Some(level.into());
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }

    /// Defaults, then the config file, then command-line flags.
    pub fn resolve_config(&self) -> GeneratorResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(dir) = &self.template_dir {
            config = config.with_template_dir(dir.clone());
        }
        if let Some(filename) = &self.header_template {
            config = config.with_header_template(filename);
        }
        if let Some(filename) = &self.source_template {
            config = config.with_source_template(filename);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if self.allow_unresolved {
            config = config.with_strict_tokens(false);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_metric_name_is_required() {
        let result = Args::try_parse_from(["datametric-generator"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quoted_name_is_one_argument() {
        let args = Args::try_parse_from(["datametric-generator", "Oil Pressure"]).unwrap();
        assert_eq!(args.metric_name, "Oil Pressure");
        assert_eq!(args.verbose, 0);
        assert!(!args.allow_unresolved);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generator.json");
        fs::write(&path, r#"{ "template_dir": "tools/templates", "output_dir": "/from/file" }"#).unwrap();

        let args = Args::try_parse_from([
            "datametric-generator",
            "Speed",
            "--config",
            path.to_str().unwrap(),
            "--output-dir",
            "/from/flag",
            "--allow-unresolved",
            "-vv",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.template_dir, PathBuf::from("tools/templates"));
        assert_eq!(config.output_dir, PathBuf::from("/from/flag"));
        assert!(!config.strict_tokens);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = Args::try_parse_from([
            "datametric-generator",
            "Speed",
            "--config",
            "/nonexistent/generator.json",
        ])
        .unwrap();
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_template_name_flags() {
        let args = Args::try_parse_from([
            "datametric-generator",
            "Speed",
            "--header-template",
            "metric.h.in",
            "--source-template",
            "metric.cpp.in",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.header_template, "metric.h.in");
        assert_eq!(config.source_template, "metric.cpp.in");
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = Args::try_parse_from(["datametric-generator", "Speed", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter() {
        let args = Args::try_parse_from(["datametric-generator", "Speed", "-l", "debug", "-v"]).unwrap();
        assert_eq!(args.log_filter(), Some(LevelFilter::Debug));

        let args = Args::try_parse_from(["datametric-generator", "Speed", "-vvvv"]).unwrap();
        assert_eq!(args.log_filter(), Some(LevelFilter::Trace));

        let args = Args::try_parse_from(["datametric-generator", "Speed"]).unwrap();
        assert_eq!(args.log_filter(), None);
    }
}
