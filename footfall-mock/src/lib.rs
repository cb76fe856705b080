use async_trait::async_trait;

use footfall_core::connector::{FootfallConnector, ShopDirectoryProvider, VisitorDataProvider};
use footfall_core::{FootfallError, Shop, VisitorRequest, VisitorSeries};

mod fixtures;

pub mod dynamic;
pub use dynamic::{DynamicMock, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Provides deterministic data from fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(shop: &str, capability: &'static str) -> Result<(), FootfallError> {
        match shop {
            "FAIL" => Err(FootfallError::connector(
                "footfall-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Simulate brief latency; the orchestrator may time out
                // depending on config. Kept short to avoid slowing tests.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl FootfallConnector for MockConnector {
    fn name(&self) -> &'static str {
        "footfall-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_visitor_data_provider(&self) -> Option<&dyn VisitorDataProvider> {
        Some(self as &dyn VisitorDataProvider)
    }

    fn as_shop_directory_provider(&self) -> Option<&dyn ShopDirectoryProvider> {
        Some(self as &dyn ShopDirectoryProvider)
    }
}

#[async_trait]
impl VisitorDataProvider for MockConnector {
    async fn visitor_data(&self, req: &VisitorRequest) -> Result<VisitorSeries, FootfallError> {
        Self::maybe_fail_or_stall(req.shop.as_str(), "visitor_data").await?;
        Ok(fixtures::visitors::series(req))
    }
}

#[async_trait]
impl ShopDirectoryProvider for MockConnector {
    async fn shops(&self) -> Result<Vec<Shop>, FootfallError> {
        Ok(fixtures::shops::directory())
    }
}
