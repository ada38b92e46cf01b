/// Install a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden; log lines carry the collection name as a field instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
