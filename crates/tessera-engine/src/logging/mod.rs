//! Logging utilities.
//!
//! The engine itself only speaks through the `log` facade (`debug!` on
//! display wiring, `trace!` per refresh); this module gives hosts a one-call
//! `env_logger` setup so those records land somewhere during development.
//! Embedders with their own logger just skip it.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tessera_engine=trace"). When unset, `RUST_LOG` applies, and failing
/// that the default keeps the host at `warn` with the engine itself at
/// `info` (per-refresh `trace!` records stay opt-in either way).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Intended usage is early in the host's `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(engine_default_filter);

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

/// Fallback filter when neither the config nor `RUST_LOG` says otherwise.
fn engine_default_filter() -> String {
    format!("warn,{}=info", env!("CARGO_CRATE_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_engine_to_info() {
        assert_eq!(engine_default_filter(), "warn,tessera_engine=info");
    }

    #[test]
    fn config_defaults_leave_filter_unset() {
        let config = LoggingConfig::default();
        assert!(config.env_filter.is_none());
    }
}
