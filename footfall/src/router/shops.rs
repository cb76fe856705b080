use footfall_core::{Capability, FootfallError, Shop};

use crate::Footfall;

impl Footfall {
    /// Fetch the shop directory from the first provider that can serve it.
    ///
    /// Behavior and trade-offs:
    /// - Providers are tried in priority order; the first successful directory
    ///   wins. Directories from lower-priority providers are never merged in.
    /// - The per-provider timeout applies to every attempt.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered connector exposes a directory,
    /// and the aggregate provider errors when all attempts fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "footfall::router::shops", skip(self))
    )]
    pub async fn shops(&self) -> Result<Vec<Shop>, FootfallError> {
        crate::core::with_request_deadline(
            self.cfg.request_timeout,
            self.fetch_single(Capability::ShopDirectory, None, |c| {
                c.as_shop_directory_provider()?;
                Some(async move {
                    match c.as_shop_directory_provider() {
                        Some(p) => p.shops().await,
                        None => Err(FootfallError::unsupported(
                            Capability::ShopDirectory.to_string(),
                        )),
                    }
                })
            }),
        )
        .await
        .map_err(|e| match e {
            FootfallError::RequestTimeout { .. } => {
                FootfallError::request_timeout(Capability::ShopDirectory.to_string())
            }
            other => other,
        })?
    }
}
