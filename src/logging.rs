//! Diagnostic logging to stderr.
//!
//! Filter directives come from `TRANSKEY_LOG` (e.g. `transkey=trace`). When
//! unset, only warnings are shown, or debug output with `--verbose`.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "TRANSKEY_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,transkey=debug" } else { "warn" }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
