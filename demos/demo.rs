use stayhaus::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🏠 Stayhaus Demo\n");

    // Database setup: PG_* environment variables when present, local
    // defaults otherwise
    let config = DatabaseConfig::from_env().unwrap_or_else(|_| {
        DatabaseConfig::new(
            "localhost".to_string(), // host
            5432,                    // port
            "stayhaus".to_string(),  // database
            "postgres".to_string(),  // username
            "password".to_string(),  // password
            1,                       // min_connections
            5,                       // max_connections
            30,                      // connection_timeout_seconds
            600,                     // idle_timeout_seconds
            3600,                    // max_lifetime_seconds
        )
    });

    let stayhaus = Stayhaus::new(config).await?;
    stayhaus.health_check().await?;
    println!("✅ Database connected");

    // Register a guest
    let guest = stayhaus
        .users()
        .create(NewUser {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse-battery-staple".to_string(),
        })
        .await?;
    println!("✅ Registered {} <{}>", guest.name, guest.email);

    let found = stayhaus.users().find_by_email(&guest.email).await?;
    println!("🔎 Lookup by email: {:?}", found.map(|u| u.id));

    // Search the listings: downtown-ish price band, well reviewed
    let filter = PropertyFilter::new()
        .with_city("Vancouver")
        .with_minimum_price_per_night(5_000)
        .with_maximum_price_per_night(25_000)
        .with_minimum_rating(4.0);

    let listings = stayhaus.properties().search(&filter, Some(5)).await?;
    println!("\n🔎 {} matching properties:", listings.len());
    for listing in &listings {
        println!(
            "  {} — {} cents/night (avg rating {:.2})",
            listing.property.title, listing.property.cost_per_night, listing.average_rating,
        );
    }

    // Upcoming reservations for the guest
    let reservations = stayhaus.reservations().list_for_guest(guest.id, None).await?;
    println!("\n📅 {} reservations:", reservations.len());
    for reservation in &reservations {
        println!(
            "  {} → {}: {} ({})",
            reservation.reservation.start_date,
            reservation.reservation.end_date,
            reservation.title,
            reservation.city,
        );
    }

    Ok(())
}
