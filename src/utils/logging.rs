//! Logging setup for the `repomesh` binary.
//!
//! Logs go to stderr so the JSON documents printed on stdout stay parseable.
//! Verbosity comes from the global flags, falling back to `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Default filter when neither a flag nor `RUST_LOG` selects one.
const DEFAULT_FILTER: &str = "warn";

/// Map the global verbosity flags to a filter directive.
///
/// `--quiet` wins over `--verbose`; `None` means "defer to `RUST_LOG`".
#[must_use]
pub fn derive_filter(verbose: bool, quiet: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
