use chrono::{DateTime, Utc};

use flightdeck::{admin::{NewCity, NewFlight}, selector::Prices, traits::Administrable};

pub async fn add_city(ctx: flightdeck::Context, name: String, latitude: f64, longitude: f64) -> flightdeck::Result<()> {
	let id = ctx.add_city(NewCity { name, latitude, longitude }).await?;
	tracing::info!("inserted city #{id}");
	Ok(())
}

pub async fn add_flight(
	ctx: flightdeck::Context,
	name: String,
	departure: (i64, DateTime<Utc>),
	arrival: (i64, DateTime<Utc>),
	prices: Prices,
) -> flightdeck::Result<()> {
	if arrival.1 < departure.1 {
		tracing::warn!("flight '{name}' arrives before it departs");
	}
	let id = ctx.add_flight(NewFlight { name, departure, arrival, prices }).await?;
	tracing::info!("inserted flight #{id}");
	Ok(())
}
