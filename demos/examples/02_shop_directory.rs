use std::collections::BTreeMap;

use footfall::{Footfall, Shop};
use footfall_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let footfall = Footfall::builder().with_connector(connector).build()?;

    let shops = footfall.shops().await?;

    // Group by prefecture the way a shop selector would.
    let mut by_prefecture: BTreeMap<String, Vec<Shop>> = BTreeMap::new();
    for shop in shops {
        by_prefecture
            .entry(shop.prefecture.clone())
            .or_default()
            .push(shop);
    }

    for (prefecture, shops) in by_prefecture {
        println!("{prefecture}:");
        for shop in shops {
            println!("  {} ({})", shop.label(), shop.id);
        }
    }

    Ok(())
}
