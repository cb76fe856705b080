use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use footfall::{Footfall, FootfallConnector, ShopId};
use footfall_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Prefer the configured connector (HTTP when FOOTFALL_BASE_URL is set) and
    // keep the mock registered as a fallback, so a dead endpoint degrades to
    // deterministic data instead of an error.
    let primary = get_connector();
    let fallback: Arc<dyn FootfallConnector> = Arc::new(footfall_mock::MockConnector::new());

    let footfall = Footfall::builder()
        .with_connector(primary.clone())
        .with_connector(fallback.clone())
        .prefer(&[primary, fallback])
        .provider_timeout(Duration::from_secs(3))
        .build()?;

    let shop = ShopId::from("shop-11");
    let date = NaiveDate::from_ymd_opt(2024, 6, 8).expect("valid date");

    let chart = footfall.night_chart(&shop, date).await?;
    let matched = chart.points.iter().filter(|p| p.male.is_some()).count();
    println!("{} slots matched for {} on {}", matched, shop, chart.date);

    Ok(())
}
