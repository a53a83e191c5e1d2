//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with
//! command output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for moodlog crates when `verbose` is on.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "moodlog_core=debug,moodlog=debug,warn"
    } else {
        "warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init();
}
