use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `WORDGRAMS_LOG=wordgrams=debug`.
pub const LOG_ENV: &str = "WORDGRAMS_LOG";

static INIT: Once = Once::new();

/// Installs the stderr log subscriber. Falls back to `wordgrams=info` when
/// `WORDGRAMS_LOG` is unset or invalid. Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("wordgrams=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    });
}
