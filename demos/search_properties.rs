//! Property search demo
//!
//! Run with a `lightbnb.toml` (or `LIGHTBNB_CONFIG`) pointing at a seeded database:
//! `RUST_LOG=rental_store=debug cargo run --example search_properties -- Vancouver 100 200 4`

use lightbnb::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mut search = PropertySearch::new();
    if let Some(city) = args.next() {
        search = search.city(city);
    }
    if let (Some(minimum), Some(maximum)) = (args.next(), args.next()) {
        search = search.price_range(minimum.parse()?, maximum.parse()?);
    }
    if let Some(rating) = args.next() {
        search = search.minimum_rating(rating.parse()?);
    }

    let lightbnb = LightBnb::from_env().await?;
    lightbnb.health_check().await?;

    let store = lightbnb.store();
    let listings = store.get_all_properties(&search, None).await?;

    info!("Found {} properties", listings.len());
    for (i, listing) in listings.iter().enumerate() {
        let property = &listing.property;
        println!(
            "{}. {} - {}, {} (${:.2}/night, rated {:.2})",
            i + 1,
            property.title,
            property.city,
            property.province,
            property.cost_per_night as f64 / 100.0,
            listing.average_rating
        );
    }

    Ok(())
}
