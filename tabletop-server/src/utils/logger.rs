//! Logging Infrastructure
//!
//! `RUST_LOG` drives the filter. Output is plain text on stdout by default,
//! JSON lines with `LOG_JSON`, and a daily rolling file when `LOG_DIR` names
//! an existing directory.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "tabletop_server=info,tower_http=info";

/// Log file prefix inside `LOG_DIR`
const LOG_FILE_PREFIX: &str = "tabletop-server";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the global subscriber. Call once, at startup.
pub fn init_logger(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let log_dir = config
        .log_dir
        .as_deref()
        .map(Path::new)
        .filter(|dir| dir.is_dir());

    match (log_dir, config.log_json) {
        (Some(dir), true) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            subscriber.json().with_writer(file_appender).init();
        }
        (Some(dir), false) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            subscriber.with_ansi(false).with_writer(file_appender).init();
        }
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}
