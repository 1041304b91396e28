//! Logging to stderr via `flexi_logger`.
//!
//! The level defaults to `warn` and is raised by each `-v` flag. `RUST_LOG`
//! takes precedence when set.

use flexi_logger::{Logger, LoggerHandle};

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts logging. The returned handle must be kept alive for as long as
/// messages should be written.
pub fn init(verbosity: u8) -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str(level(verbosity)).and_then(|logger| {
        logger
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
    });
    match started {
        Ok(handle) => Some(handle),
        Err(error) => {
            eprintln!("Could not start logging: {error}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::level;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(9), "trace");
    }
}
