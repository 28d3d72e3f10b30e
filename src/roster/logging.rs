//! Diagnostic logging for the CLI.
//!
//! The library only emits `log` records; it never installs a logger. The
//! binary calls [`init_logging`] once at startup, sending records to stderr so
//! they never mix with table output on stdout.
//!
//! # Invariants
//! - Initialization happens at most once per process; later calls are no-ops.
//! - Initialization never panics. A failure leaves logging disabled.
//! - `RUST_LOG`, when set, overrides the verbosity-derived level.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Maps the count of `-v` flags to a level spec.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr at `level` unless `RUST_LOG` says otherwise.
pub fn init_logging(level: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| {
            log::debug!("logging started at level {}", level);
        })
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn init_is_idempotent() {
        assert!(init_logging("warn").is_ok());
        assert!(is_initialized());
        assert!(init_logging("debug").is_ok());
    }
}
