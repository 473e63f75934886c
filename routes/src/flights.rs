use axum::{extract::{Path, State}, response::Html, Extension};
use futures::TryStreamExt;

use flightdeck::{selector::FlightSummary, Context, Flights};

use crate::{ApiError, ApiResult, Templates};

pub async fn list(
	State(ctx): State<Context>,
	Extension(templates): Extension<Templates>,
) -> ApiResult<Html<String>> {
	let flights: Vec<FlightSummary> = ctx.flights()
		.await?
		.map_ok(|x| x.summary())
		.try_collect()
		.await?;

	let mut page = tera::Context::new();
	page.insert("site", &ctx.cfg().instance.name);
	page.insert("flights", &flights);
	templates.render("flight_list.html", &page)
}

pub async fn view(
	State(ctx): State<Context>,
	Extension(templates): Extension<Templates>,
	Path(flight_id): Path<String>,
) -> ApiResult<Html<String>> {
	// anything that isn't a primary key can't be a flight either, `parse` alone would take "+5"
	let id: i64 = flight_id
		.starts_with(|c: char| c.is_ascii_digit() || c == '-')
		.then(|| flight_id.parse().ok())
		.flatten()
		.ok_or_else(|| ApiError::from(flightdeck::Error::not_found("flight")))?;

	let flight = ctx.flight(id).await?.detail();

	let mut page = tera::Context::new();
	page.insert("site", &ctx.cfg().instance.name);
	page.insert("flight", &flight);
	templates.render("flight_detail.html", &page)
}
