//! Reservation history demo
//!
//! `cargo run --example guest_reservations -- tristanjacobs@gmail.com`

use lightbnb::prelude::*;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let email = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: guest_reservations <email>"))?;

    let lightbnb = LightBnb::from_env().await?;
    let store = lightbnb.store();

    let Some(user) = store.get_user_with_email(&email).await? else {
        warn!("No user registered with {}", email);
        return Ok(());
    };

    info!("Past reservations for {} (#{})", user.name, user.id);
    for reservation in store.get_all_reservations(user.id, None).await? {
        let rating = reservation
            .average_rating
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "unrated".to_string());
        println!(
            "{} -> {}: {} in {} ({})",
            reservation.start_date,
            reservation.end_date,
            reservation.property.title,
            reservation.property.city,
            rating
        );
    }

    Ok(())
}
