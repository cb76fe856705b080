//! Configuration shared between the orchestrator and connectors.

use std::time::Duration;

use crate::ConnectorKey;

/// Configuration for the footfall orchestrator.
#[derive(Debug, Clone)]
pub struct FootfallConfig {
    /// Per-provider call timeout, applied to every connector invocation.
    pub provider_timeout: Duration,
    /// Optional overall deadline for a whole request (both nights together).
    pub request_timeout: Option<Duration>,
    /// Timezone used for grid construction and wall-clock labels.
    pub timezone: chrono_tz::Tz,
    /// How many days before the anchor date the comparison night lies.
    pub comparison_offset_days: u32,
    /// Connector priority order; unlisted connectors follow in registration
    /// order.
    pub priority: Vec<ConnectorKey>,
}

impl Default for FootfallConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            timezone: chrono_tz::Asia::Tokyo,
            comparison_offset_days: 7,
            priority: Vec::new(),
        }
    }
}
