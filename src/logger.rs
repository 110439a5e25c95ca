//! Log output for the command-line front end.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug or warn.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose { "tritlogic=debug,trit_calc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
