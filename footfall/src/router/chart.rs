use chrono::NaiveDate;
use footfall_core::{
    Capability, FootfallError, NightChart, ShopId, VisitorRequest, VisitorSeries, align_night,
};

use crate::Footfall;

impl Footfall {
    /// Build the aligned overnight chart for one shop and one anchor date.
    ///
    /// Behavior and trade-offs:
    /// - Fetches the current night and the comparison night (the anchor date
    ///   minus the configured offset, 7 days by default) concurrently, each
    ///   through the provider priority chain with per-provider timeouts.
    /// - A comparison night that no provider has data for degrades to an empty
    ///   series, so the chart still renders current-night counts with every
    ///   `prev_*` field absent. A missing current night is an error.
    /// - The optional request deadline bounds both fetches together.
    ///
    /// # Errors
    /// Returns `NotFound` when no provider has current-night data for the shop,
    /// `Unsupported` when no registered connector provides visitor data,
    /// `RequestTimeout` when the overall deadline elapses, and the aggregate
    /// provider errors otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "footfall::router::night_chart",
            skip(self),
            fields(shop = %shop, date = %date),
        )
    )]
    pub async fn night_chart(
        &self,
        shop: &ShopId,
        date: NaiveDate,
    ) -> Result<NightChart, FootfallError> {
        let comparison_date = date
            .checked_sub_days(chrono::Days::new(u64::from(self.cfg.comparison_offset_days)))
            .ok_or_else(|| {
                FootfallError::InvalidArg(format!("comparison date underflows for {date}"))
            })?;

        let current_req = VisitorRequest {
            shop: shop.clone(),
            date,
        };
        let comparison_req = VisitorRequest {
            shop: shop.clone(),
            date: comparison_date,
        };

        let (current, comparison) = crate::core::with_request_deadline(
            self.cfg.request_timeout,
            futures::future::join(
                self.fetch_night(current_req),
                self.fetch_night(comparison_req),
            ),
        )
        .await
        .map_err(|e| match e {
            FootfallError::RequestTimeout { .. } => {
                FootfallError::request_timeout(Capability::VisitorData.to_string())
            }
            other => other,
        })?;

        let current = current?;
        let comparison = match comparison {
            Ok(s) => s,
            // No data a week ago is a normal condition for a recently opened
            // shop; render the current night against an empty baseline.
            Err(FootfallError::NotFound { .. }) => VisitorSeries {
                shop: shop.clone(),
                date: comparison_date,
                samples: Vec::new(),
            },
            Err(e) => return Err(e),
        };

        let points = align_night(date, self.cfg.timezone, Some(&current), Some(&comparison));

        Ok(NightChart {
            shop: shop.clone(),
            date,
            comparison_date,
            points,
        })
    }

    async fn fetch_night(&self, req: VisitorRequest) -> Result<VisitorSeries, FootfallError> {
        let what = format!("visitor data for {} on {}", req.shop, req.date);
        self.fetch_single(Capability::VisitorData, Some(what), move |c| {
            c.as_visitor_data_provider()?;
            let req = req.clone();
            Some(async move {
                match c.as_visitor_data_provider() {
                    Some(p) => p.visitor_data(&req).await,
                    None => Err(FootfallError::unsupported(
                        Capability::VisitorData.to_string(),
                    )),
                }
            })
        })
        .await
    }
}
