use tracing_subscriber::{EnvFilter, fmt};

/// Install a fmt subscriber for applications that have none.
///
/// The level follows `RUST_LOG` and defaults to `info`, e.g.
/// `RUST_LOG=the100=debug` to see every request. Safe to call more than
/// once; only the first call installs anything.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logger initialized");
    }
}
