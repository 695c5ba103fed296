//! Tracing setup. Handshake settlements are only observable here, so the
//! host should install a subscriber before dispatching anything.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber. `RUST_LOG` controls the filter
/// (default `info`); `WALLETBRIDGE_LOG_JSON=1` switches to JSON lines on
/// stderr. Safe to call more than once.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("WALLETBRIDGE_LOG_JSON").as_deref() == Ok("1");

    if json {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
