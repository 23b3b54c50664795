//! Shared helpers for integration tests.

/// Route battle and session logs to the test output.
///
/// Defaults to warnings only; set `RUST_LOG=countryball_battle=trace` to
/// follow every attack. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_test_writer()
        .try_init();
}
