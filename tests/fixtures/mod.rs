//! Shared test fixtures for integration testing

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Route engine logs to the test harness output
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Four-player field in finishing order
#[allow(dead_code)]
pub fn sample_field() -> Vec<f64> {
    vec![1520.0, 1610.0, 1380.0, 1455.0]
}

/// Home and opponent team ratings for a 3v3 match
#[allow(dead_code)]
pub fn sample_teams() -> (Vec<f64>, Vec<f64>) {
    (vec![1500.0, 1420.0, 1610.0], vec![1550.0, 1480.0, 1390.0])
}

/// Assert two floats agree within `1e-9`
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be within 1e-9 of {}",
        actual,
        expected
    );
}
