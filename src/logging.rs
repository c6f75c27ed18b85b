// Logging setup. Everything goes to stderr so stdout stays clean for
// `render` output and note listings.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "btree_notes=warn,btree_notes_lib=warn";

/// Install the global subscriber
///
/// `RUST_LOG` wins over `level`; `level` wins over the default filter.
pub fn init(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("btree_notes={level},btree_notes_lib={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    });

    // A second init (tests, embedding) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
