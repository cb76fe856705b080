//! footfall-http
//!
//! Production connector that implements `FootfallConnector` against the
//! visitor-count HTTP API: a single endpoint accepting
//! `POST {"shop": ..., "date": "yyyy-MM-dd"}` and returning the raw overnight
//! samples for that shop and night.
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;

use footfall_core::connector::{FootfallConnector, VisitorDataProvider};
use footfall_core::{FootfallError, VisitorRequest, VisitorSeries};

const CONNECTOR_NAME: &str = "footfall-http";

/// Connector backed by the visitor-count HTTP endpoint.
#[derive(Debug)]
pub struct HttpConnector {
    base_url: String,
    client: reqwest::Client,
}

/// Builder for [`HttpConnector`].
#[derive(Default)]
pub struct HttpConnectorBuilder {
    base_url: Option<String>,
    client: Option<reqwest::Client>,
}

impl HttpConnectorBuilder {
    /// Set the endpoint URL. Required.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Supply a preconfigured `reqwest` client (proxies, TLS, timeouts).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no endpoint URL has been set.
    pub fn build(self) -> Result<HttpConnector, FootfallError> {
        let base_url = self.base_url.ok_or_else(|| {
            FootfallError::InvalidArg("no endpoint URL; set one via base_url(...)".to_string())
        })?;
        Ok(HttpConnector {
            base_url,
            client: self.client.unwrap_or_default(),
        })
    }
}

impl HttpConnector {
    /// Start building a connector.
    #[must_use]
    pub fn builder() -> HttpConnectorBuilder {
        HttpConnectorBuilder::default()
    }

    async fn post_request(&self, req: &VisitorRequest) -> Result<VisitorSeries, FootfallError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(req)
            .send()
            .await
            .map_err(|e| FootfallError::connector(CONNECTOR_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Upstream reports failures as {"message": ...}; fall back to the
            // bare status line when the body is absent or unreadable.
            let msg = response
                .json::<wire::WireErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(FootfallError::not_found(format!(
                    "visitor data for {} on {}",
                    req.shop, req.date
                )));
            }
            return Err(FootfallError::connector(CONNECTOR_NAME, msg));
        }

        let body = response
            .json::<wire::WireSeries>()
            .await
            .map_err(|e| FootfallError::Data(format!("malformed visitor payload: {e}")))?;
        body.into_series()
    }
}

#[async_trait]
impl VisitorDataProvider for HttpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "footfall_http::visitor_data",
            skip(self, req),
            fields(shop = %req.shop, date = %req.date),
        )
    )]
    async fn visitor_data(&self, req: &VisitorRequest) -> Result<VisitorSeries, FootfallError> {
        self.post_request(req).await
    }
}

impl FootfallConnector for HttpConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Visitor API"
    }

    fn as_visitor_data_provider(&self) -> Option<&dyn VisitorDataProvider> {
        Some(self as &dyn VisitorDataProvider)
    }
}
