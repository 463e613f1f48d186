use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable which overrides the default log filter
pub const LOG_ENV: &str = "NACA_GCODE_LOG";

/// Logs go to stderr so that stdout only carries the generated output
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "naca_gcode=debug,info"
    } else {
        "naca_gcode=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
