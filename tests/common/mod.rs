// Shared test support: fake host editor and tracing setup

pub mod fake_host;

/// Initialize tracing for a test; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
