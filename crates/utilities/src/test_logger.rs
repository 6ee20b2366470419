/// Installs `env_logger` for tests, output is captured by the test harness.
///
/// Safe to call from every test, repeated initialisation is ignored since
/// tests run in parallel.
pub fn test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
