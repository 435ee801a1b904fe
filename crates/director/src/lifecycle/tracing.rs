/// Initializes structured logging.
///
/// Verbosity comes from `RUST_LOG`:
/// - `RUST_LOG=info` - store start/stop and every write
/// - `RUST_LOG=debug` - adds reads and client request payloads
/// - `RUST_LOG=tenant_store=debug` - debug output for the store only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
