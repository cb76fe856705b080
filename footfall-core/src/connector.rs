use async_trait::async_trait;

use crate::FootfallError;
pub use footfall_types::ConnectorKey;
use footfall_types::{Shop, VisitorRequest, VisitorSeries};

/// Focused role trait for connectors that provide raw visitor-count series.
#[async_trait]
pub trait VisitorDataProvider: Send + Sync {
    /// Fetch the raw overnight series for the given shop and anchor date.
    ///
    /// The returned samples may be unordered and irregularly spaced; callers
    /// are expected to run them through the alignment engine before display.
    async fn visitor_data(&self, req: &VisitorRequest) -> Result<VisitorSeries, FootfallError>;
}

/// Focused role trait for connectors that can enumerate shops.
#[async_trait]
pub trait ShopDirectoryProvider: Send + Sync {
    /// Fetch the directory of shops available through this connector.
    async fn shops(&self) -> Result<Vec<Shop>, FootfallError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait FootfallConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "footfall-http", "footfall-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring orchestrator priorities.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise visitor-data capability by returning a usable trait object
    /// reference when supported.
    fn as_visitor_data_provider(&self) -> Option<&dyn VisitorDataProvider> {
        None
    }

    /// Advertise shop-directory capability by returning a usable trait object
    /// reference when supported.
    fn as_shop_directory_provider(&self) -> Option<&dyn ShopDirectoryProvider> {
        None
    }
}
