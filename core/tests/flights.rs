use chrono::{DateTime, TimeZone, Utc};
use futures::TryStreamExt;
use sea_orm::{Database, EntityTrait, PaginatorTrait};

use flightdeck::{admin::{NewCity, NewFlight, RecordKind}, model, selector::Prices, traits::Administrable, Flights};
use flightdeck_migrations::{Migrator, MigratorTrait};

async fn context() -> flightdeck::Context {
	let db = Database::connect("sqlite::memory:").await.unwrap();
	Migrator::up(&db, None).await.unwrap();
	flightdeck::Context::new(db, flightdeck::Config::default())
}

async fn city(ctx: &flightdeck::Context, name: &str) -> i64 {
	ctx.add_city(NewCity { name: name.to_string(), latitude: 39.8, longitude: -89.6 }).await.unwrap()
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
}

fn prices() -> Prices {
	Prices { economy: 100.0, economy_plus: 150.0, business: 400.0, first_class: 900.0 }
}

async fn sb100(ctx: &flightdeck::Context) -> i64 {
	let springfield = city(ctx, "Springfield").await;
	let shelbyville = city(ctx, "Shelbyville").await;
	ctx.add_flight(NewFlight {
		name: "SB100".to_string(),
		departure: (springfield, at(10, 0)),
		arrival: (shelbyville, at(12, 30)),
		prices: prices(),
	}).await.unwrap()
}

#[tokio::test]
async fn lookup_computes_trip_duration_and_prices() {
	let ctx = context().await;
	let id = sb100(&ctx).await;

	let flight = ctx.flight(id).await.unwrap();
	assert_eq!(flight.trip(), "Springfield TO Shelbyville");
	assert_eq!(flight.duration().delta(), chrono::TimeDelta::minutes(150));

	let detail = flight.detail();
	assert_eq!(detail.id, id);
	assert_eq!(detail.name, "SB100");
	assert_eq!(detail.duration.to_string(), "2:30:00");
	assert_eq!(detail.prices, prices());
}

#[tokio::test]
async fn lookup_of_missing_flight_is_not_found() {
	let ctx = context().await;
	sb100(&ctx).await;

	let err = ctx.flight(999999).await.unwrap_err();
	assert!(matches!(err, flightdeck::Error::NotFound(_)));
	assert_eq!(err.to_string(), "could not find flight");
}

#[tokio::test]
async fn listing_streams_every_flight_without_prices() {
	let ctx = context().await;

	let empty: Vec<_> = ctx.flights().await.unwrap().try_collect().await.unwrap();
	assert!(empty.is_empty());

	sb100(&ctx).await;
	let capital = city(&ctx, "Capital City").await;
	let springfield = ctx.flight(1).await.unwrap().departure_city.id;
	ctx.add_flight(NewFlight {
		name: "CC7".to_string(),
		departure: (capital, at(18, 0)),
		arrival: (springfield, at(17, 0)),
		prices: prices(),
	}).await.unwrap();

	let mut names: Vec<String> = ctx.flights()
		.await
		.unwrap()
		.map_ok(|x| x.summary().name)
		.try_collect()
		.await
		.unwrap();
	names.sort();
	assert_eq!(names, ["CC7", "SB100"]);

	let summaries: Vec<_> = ctx.flights().await.unwrap().map_ok(|x| x.summary()).try_collect().await.unwrap();
	let early = summaries.iter().find(|x| x.name == "CC7").unwrap();
	assert_eq!(early.trip, "Capital City TO Springfield");
	// arriving before departing is passed through untouched
	assert_eq!(early.duration.to_string(), "-1 day, 23:00:00");
}

#[tokio::test]
async fn deleting_a_city_cascades_to_routes_and_flights() {
	let ctx = context().await;
	sb100(&ctx).await;

	let springfield = model::city::Entity::find().one(ctx.db()).await.unwrap().unwrap();
	ctx.remove(RecordKind::City, springfield.id).await.unwrap();

	assert_eq!(ctx.count(RecordKind::FlightRoute).await.unwrap(), 1);
	assert_eq!(ctx.count(RecordKind::Flight).await.unwrap(), 0);
	// prices are not owned by routes
	assert_eq!(ctx.count(RecordKind::FlightPrice).await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_a_price_cascades_to_its_flight() {
	let ctx = context().await;
	let id = sb100(&ctx).await;
	let flight = ctx.flight(id).await.unwrap();

	ctx.remove(RecordKind::FlightPrice, flight.price.id).await.unwrap();

	assert_eq!(ctx.count(RecordKind::Flight).await.unwrap(), 0);
	assert_eq!(ctx.count(RecordKind::FlightRoute).await.unwrap(), 2);
	assert_eq!(ctx.flight(id).await.unwrap_err().to_string(), "could not find flight");
}

#[tokio::test]
async fn deleting_a_route_cascades_to_its_flight() {
	let ctx = context().await;
	let id = sb100(&ctx).await;
	let flight = ctx.flight(id).await.unwrap();

	ctx.remove(RecordKind::FlightRoute, flight.arrival.id).await.unwrap();

	assert_eq!(ctx.count(RecordKind::Flight).await.unwrap(), 0);
	// the departure route and the prices survive, only the flight referenced the arrival
	assert_eq!(ctx.count(RecordKind::FlightRoute).await.unwrap(), 1);
	assert_eq!(ctx.count(RecordKind::FlightPrice).await.unwrap(), 1);
	assert_eq!(ctx.count(RecordKind::City).await.unwrap(), 2);
}

#[tokio::test]
async fn removing_a_flight_drops_the_rows_it_owns() {
	let ctx = context().await;
	let id = sb100(&ctx).await;

	ctx.remove(RecordKind::Flight, id).await.unwrap();

	assert_eq!(model::flight::Entity::find().count(ctx.db()).await.unwrap(), 0);
	assert_eq!(model::flight_route::Entity::find().count(ctx.db()).await.unwrap(), 0);
	assert_eq!(model::flight_price::Entity::find().count(ctx.db()).await.unwrap(), 0);
	assert_eq!(model::city::Entity::find().count(ctx.db()).await.unwrap(), 2);

	let err = ctx.remove(RecordKind::Flight, id).await.unwrap_err();
	assert_eq!(err.to_string(), "could not find flight");
}

#[tokio::test]
async fn labels_follow_record_kind() {
	let ctx = context().await;
	sb100(&ctx).await;
	ctx.add_flight(NewFlight {
		name: "X".to_string(),
		departure: (1, at(1, 0)),
		arrival: (2, at(2, 0)),
		prices: prices(),
	}).await.unwrap();
	ctx.remove(RecordKind::FlightRoute, 3).await.unwrap();

	let labels: Vec<(i64, String)> = ctx.labels(RecordKind::FlightRoute).await.unwrap().try_collect().await.unwrap();
	assert!(labels.contains(&(1, "Springfield - 2024-01-01 10:00:00+00:00".to_string())));

	let mut prices: Vec<String> = ctx.labels(RecordKind::FlightPrice)
		.await
		.unwrap()
		.map_ok(|(_, label)| label)
		.try_collect()
		.await
		.unwrap();
	prices.sort();
	assert_eq!(prices, ["Prices for <unassigned>", "Prices for SB100"]);
}

#[tokio::test]
async fn flights_need_existing_cities_and_short_names() {
	let ctx = context().await;
	let springfield = city(&ctx, "Springfield").await;

	let err = ctx.add_flight(NewFlight {
		name: "nowhere".to_string(),
		departure: (springfield, at(10, 0)),
		arrival: (42, at(11, 0)),
		prices: prices(),
	}).await.unwrap_err();
	assert_eq!(err.to_string(), "could not find city");
	assert_eq!(ctx.count(RecordKind::FlightRoute).await.unwrap(), 0);

	let err = ctx.add_city(NewCity { name: "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch".to_string(), latitude: 53.2, longitude: -4.2 })
		.await
		.unwrap_err();
	assert!(matches!(err, flightdeck::Error::NameTooLong(_)));
}
