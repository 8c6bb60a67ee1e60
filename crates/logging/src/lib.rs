//! helpers for logging.

/// Used when `RUST_LOG` isn't set.
pub const DEFAULT_FILTER: &str = "info";

/// Log to stderr, filtered by `RUST_LOG` or [DEFAULT_FILTER].
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    log_to_stderr_with_default(DEFAULT_FILTER);
}

/// Log to stderr, filtered by `RUST_LOG` or, when that is unset, `default_filter`.
///
/// Only the first call in a process has any effect.
pub fn log_to_stderr_with_default(default_filter: &str) {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .init();
        log::debug!("Logging initialized");
    });
}
