use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "hay_bicis=info";
const VERBOSE_DIRECTIVES: &str = "hay_bicis=debug,info";

/// `RUST_LOG` wins over the built-in directives when it parses.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable single-line events on stderr.
pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// One JSON object per event, for the Lambda log stream.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVES))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                // Lambda stamps every log line on ingestion.
                .without_time()
                .json()
                .with_current_span(false),
        )
        .init();
}
