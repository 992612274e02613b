use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber for the duration of a test. Capture output
/// with `RUST_LOG=debug` when debugging a failing case.
pub struct TestTracing {
    _guard: tracing::subscriber::DefaultGuard,
}

impl TestTracing {
    pub fn init() -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
