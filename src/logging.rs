//! Logging setup.
//!
//! The library emits `tracing` events: `debug` for accepted mutations,
//! `warn` for rejected ones. Applications install a subscriber with
//! [`init`]; tests use [`init_test`].

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber.
///
/// The filter is read from `RUST_LOG` (e.g. `RUST_LOG=u_timetable=debug`)
/// and defaults to `info`. Returns quietly if a subscriber is already set.
///
/// ```no_run
/// u_timetable::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Installs a `debug` subscriber writing through the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
