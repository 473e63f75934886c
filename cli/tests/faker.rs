use futures::TryStreamExt;
use sea_orm::Database;

use flightdeck::{admin::RecordKind, traits::Administrable, Flights, RichFlight};
use flightdeck_migrations::{Migrator, MigratorTrait};

async fn context() -> flightdeck::Context {
	let db = Database::connect("sqlite::memory:").await.unwrap();
	Migrator::up(&db, None).await.unwrap();
	flightdeck::Context::new(db, flightdeck::Config::default())
}

#[tokio::test]
async fn faker_seeds_cities_and_flights() {
	let ctx = context().await;
	flightdeck_cli::faker(ctx.clone(), 3).await.unwrap();

	assert_eq!(ctx.count(RecordKind::City).await.unwrap(), 6);
	assert_eq!(ctx.count(RecordKind::Flight).await.unwrap(), 4);
	assert_eq!(ctx.count(RecordKind::FlightPrice).await.unwrap(), 4);
	assert_eq!(ctx.count(RecordKind::FlightRoute).await.unwrap(), 8);

	let flights: Vec<RichFlight> = ctx.flights().await.unwrap().try_collect().await.unwrap();
	assert_eq!(flights.len(), 4);

	let sb100 = flights.iter().find(|x| x.flight.name == "SB100").unwrap();
	let summary = sb100.summary();
	assert_eq!(summary.trip, "Springfield TO Shelbyville");
	assert_eq!(summary.duration.to_string(), "2:30:00");

	for flight in &flights {
		assert_ne!(flight.departure_city.id, flight.arrival_city.id, "{} lands where it took off", flight.flight.name);
	}
}
