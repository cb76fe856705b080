use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use footfall_core::connector::ConnectorKey;
use footfall_core::{Capability, FootfallConfig, FootfallConnector, FootfallError};

/// Orchestrator that routes requests across registered providers.
pub struct Footfall {
    pub(crate) connectors: Vec<Arc<dyn FootfallConnector>>,
    pub(crate) cfg: FootfallConfig,
}

impl std::fmt::Debug for Footfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Footfall")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Footfall` orchestrator with custom configuration.
pub struct FootfallBuilder {
    connectors: Vec<Arc<dyn FootfallConnector>>,
    cfg: FootfallConfig,
}

impl Default for FootfallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FootfallBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via [`with_connector`].
    /// - Defaults are conservative: 5s provider timeout, no overall request deadline,
    ///   Asia/Tokyo display timezone, and a 7-day comparison offset.
    ///
    /// [`with_connector`]: FootfallBuilder::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: FootfallConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - The order in which you register connectors is used when no explicit
    ///   priority is set via [`prefer`].
    /// - Multiple connectors can support the same capability; the orchestrator
    ///   tries them in priority order and falls back on failure.
    /// - Duplicates are not deduplicated; avoid registering the same connector twice.
    ///
    /// [`prefer`]: FootfallBuilder::prefer
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FootfallConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred provider order using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Influences ordering among eligible providers; it does not filter out
    ///   unlisted connectors (they remain after the listed ones, in
    ///   registration order).
    /// - Type-safe and ergonomic: eliminates the possibility of typos and makes
    ///   refactoring safer.
    #[must_use]
    pub fn prefer(mut self, connectors_desc: &[Arc<dyn FootfallConnector>]) -> Self {
        self.cfg.priority = connectors_desc.iter().map(|c| c.key()).collect();
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied to every connector invocation so a stalled provider cannot hold
    /// up the fallback chain indefinitely.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for a whole request.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency even when several providers time out sequentially.
    /// - When exceeded, returns a `RequestTimeout` error for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Set the timezone used for grid construction and wall-clock labels.
    #[must_use]
    pub const fn timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Set how many days before the anchor date the comparison night lies.
    ///
    /// Defaults to 7, i.e. the same weekday one week earlier.
    #[must_use]
    pub const fn comparison_offset_days(mut self, days: u32) -> Self {
        self.cfg.comparison_offset_days = days;
        self
    }

    /// Build the `Footfall` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](FootfallBuilder::with_connector).
    pub fn build(mut self) -> Result<Footfall, FootfallError> {
        // Validate priority keys against registered connectors; drop unknowns and dedup.
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();

        let mut out: Vec<ConnectorKey> = Vec::new();
        let mut seen: HashSet<&'static str> = HashSet::new();
        for k in self.cfg.priority.iter().copied() {
            let n = k.as_str();
            if known.contains(n) && seen.insert(n) {
                out.push(k);
            }
        }
        self.cfg.priority = out;

        if self.connectors.is_empty() {
            return Err(FootfallError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Footfall {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: FootfallError) -> FootfallError {
    match e {
        e @ (FootfallError::NotFound { .. }
        | FootfallError::ProviderTimeout { .. }
        | FootfallError::Connector { .. }
        | FootfallError::RequestTimeout { .. }
        | FootfallError::AllProvidersTimedOut { .. }
        | FootfallError::AllProvidersFailed(_)) => e,
        other => FootfallError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Apply an optional request-level deadline to a future.
///
/// On timeout returns `FootfallError::RequestTimeout` labelled "request";
/// call sites remap the label to a more specific capability as needed.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<std::time::Duration>,
    fut: F,
) -> Result<T, FootfallError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .map_err(|_| FootfallError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Footfall {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "footfall::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, FootfallError>
    where
        Fut: core::future::Future<Output = Result<T, FootfallError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(FootfallError::provider_timeout(
                connector_name,
                capability.to_string(),
            ))
        })
    }

    /// Start building a new `Footfall` instance.
    ///
    /// Typical usage chains provider registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let http = Arc::new(HttpConnector::builder().base_url("https://...").build()?);
    /// let mock = Arc::new(footfall_mock::MockConnector::new());
    ///
    /// let footfall = footfall::Footfall::builder()
    ///     .with_connector(http.clone())
    ///     .with_connector(mock.clone())
    ///     .prefer(&[http, mock])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> FootfallBuilder {
        FootfallBuilder::new()
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn FootfallConnector>> {
        let mut out: Vec<(usize, Arc<dyn FootfallConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if !self.cfg.priority.is_empty() {
            let pos: HashMap<_, _> = self
                .cfg
                .priority
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch helper: priority order with fallback.
    ///
    /// - Applies the per-provider timeout to every attempted call
    /// - Aggregates errors and treats `NotFound` specially: when every attempted
    ///   provider reported `NotFound`, the outcome is a single `NotFound`
    /// - If no registered connector supports the capability, returns
    ///   `Unsupported` without attempting anything
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "footfall::core::fetch_single",
            skip(self, call, not_found_what),
            fields(capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: Option<String>,
        call: F,
    ) -> Result<T, FootfallError>
    where
        T: Send,
        F: Fn(Arc<dyn FootfallConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, FootfallError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<FootfallError> = Vec::new();

        for c in self.ordered() {
            if let Some(fut) = call(c.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(
                        e @ (FootfallError::NotFound { .. } | FootfallError::ProviderTimeout { .. }),
                    ) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            not_found_what,
        ))
    }
}
