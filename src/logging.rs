use tracing_subscriber::EnvFilter;

/// Only mkical's own crates log; dependencies stay quiet unless `RUST_LOG`
/// asks for them.
const CRATE_TARGETS: &[&str] = &["mkical", "mkical_core"];

/// Send diagnostics to stderr so they never mix with the calendar on stdout.
///
/// Without `-v` only warnings show (such as a day of month clamped to 28).
/// `-v` adds the generated range, `-vv` the config file lookup. A set
/// `RUST_LOG` replaces the `-v` level entirely.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
