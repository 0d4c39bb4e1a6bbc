//! File-backed logging setup.
//!
//! Stdout belongs to the terminal UI, so diagnostics go to a daily-rolled
//! file under the configured log directory. `RUST_LOG` filters as usual.
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The returned guard must stay alive for the
/// duration of the program or buffered lines are lost on exit.
pub fn init(log_dir: &Path) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(log_dir, "stonehaven.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
