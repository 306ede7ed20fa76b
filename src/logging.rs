use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "rusty_round=debug,info"
    } else {
        "rusty_round=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// # Errors
///
/// Will return `Err` if a global subscriber is already installed
pub fn init_logger(verbose: bool, json: bool) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    }
}
