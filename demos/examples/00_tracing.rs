use chrono::NaiveDate;
use footfall::{Footfall, ShopId};
use footfall_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,footfall=trace,footfall_http=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let connector = get_connector();
    let footfall = Footfall::builder().with_connector(connector).build()?;

    let shop = ShopId::from("shop-11");
    let date = NaiveDate::from_ymd_opt(2024, 6, 8).expect("valid date");

    let chart = footfall.night_chart(&shop, date).await?;
    let matched = chart.points.iter().filter(|p| p.male.is_some()).count();
    println!(
        "night {} -> {} of {} slots matched",
        chart.date,
        matched,
        chart.points.len()
    );

    Ok(())
}
