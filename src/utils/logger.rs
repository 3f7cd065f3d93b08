use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "elec_client=debug,info"
    } else {
        "elec_client=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Structured output for log collectors.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
