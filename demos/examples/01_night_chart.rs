use chrono::NaiveDate;
use footfall::{Footfall, ShopId, is_overnight_hour};
use footfall_demos::common::get_connector;

fn cell(v: Option<u32>) -> String {
    v.map_or_else(|| "-".to_string(), |n| n.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let footfall = Footfall::builder().with_connector(connector).build()?;

    let shop = ShopId::from("shop-11");
    let date = NaiveDate::from_ymd_opt(2024, 6, 8).expect("valid date");

    let chart = footfall.night_chart(&shop, date).await?;

    println!(
        "overnight visitors for {} ({} vs {}):",
        shop, chart.date, chart.comparison_date
    );
    println!("{:>5}  {:>4} {:>6}  {:>4} {:>6}", "time", "male", "female", "male'", "female'");
    for p in chart
        .points
        .iter()
        .filter(|p| is_overnight_hour(p.hour_of_day))
    {
        println!(
            "{:>5}  {:>4} {:>6}  {:>4} {:>6}",
            p.time_label,
            cell(p.male),
            cell(p.female),
            cell(p.prev_male),
            cell(p.prev_female),
        );
    }

    Ok(())
}
