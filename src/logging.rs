use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber for the command line tool
///
/// Logs go to stderr so stdout only carries the descriptor. `RUST_LOG`
/// overrides the default filter.
pub fn init_logger(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "meta_descriptor=debug"
    } else {
        "meta_descriptor=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    }
}
