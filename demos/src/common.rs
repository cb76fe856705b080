use footfall_core::FootfallConnector;
use std::sync::Arc;

/// Return a connector for demos.
///
/// Uses the HTTP connector when `FOOTFALL_BASE_URL` is set; otherwise falls
/// back to the deterministic mock so demos run offline and in CI.
///
/// # Panics
/// Panics if `FOOTFALL_BASE_URL` is set but the HTTP connector cannot be built.
#[must_use]
pub fn get_connector() -> Arc<dyn FootfallConnector> {
    if let Ok(base_url) = std::env::var("FOOTFALL_BASE_URL") {
        Arc::new(
            footfall_http::HttpConnector::builder()
                .base_url(base_url)
                .build()
                .expect("HTTP connector configuration is invalid"),
        )
    } else {
        println!("--- (Using Mock Connector; set FOOTFALL_BASE_URL for live data) ---");
        Arc::new(footfall_mock::MockConnector::new())
    }
}
