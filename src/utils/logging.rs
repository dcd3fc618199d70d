// Mon Oct 19 2026 - Alex

use env_logger::{Builder, Env};
use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs env_logger. With no explicit level, `RUST_LOG` decides and warnings are the default.
    pub fn init_logger(level: Option<LevelFilter>) {
        let mut builder = match level {
            Some(level) => {
                let mut builder = Builder::new();
                builder.filter_level(level);
                builder
            }
            None => Builder::from_env(Env::default().default_filter_or("warn")),
        };

        builder.format_timestamp(None).try_init().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        LoggingUtils::init_logger(Some(LevelFilter::Debug));
        LoggingUtils::init_logger(None);
    }
}
