use log::LevelFilter;

/// Route `log` output through the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
/// `RUST_LOG` still overrides the default `debug` level.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .try_init();
}
