use sea_orm::{DbErr, FromQueryResult, QueryResult};

use crate::model::{city, flight, flight_price, flight_route};

use super::{FlightDuration, ARRIVAL, ARRIVAL_CITY, DEPARTURE, DEPARTURE_CITY, FLIGHT, PRICE};

/// a flight with everything it references already loaded
#[derive(Debug, Clone, PartialEq)]
pub struct RichFlight {
	pub flight: flight::Model,
	pub departure: flight_route::Model,
	pub departure_city: city::Model,
	pub arrival: flight_route::Model,
	pub arrival_city: city::Model,
	pub price: flight_price::Model,
}

impl FromQueryResult for RichFlight {
	fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
		Ok(RichFlight {
			flight: flight::Model::from_query_result(res, &format!("{FLIGHT}_"))?,
			departure: flight_route::Model::from_query_result(res, &format!("{DEPARTURE}_"))?,
			departure_city: city::Model::from_query_result(res, &format!("{DEPARTURE_CITY}_"))?,
			arrival: flight_route::Model::from_query_result(res, &format!("{ARRIVAL}_"))?,
			arrival_city: city::Model::from_query_result(res, &format!("{ARRIVAL_CITY}_"))?,
			price: flight_price::Model::from_query_result(res, &format!("{PRICE}_"))?,
		})
	}
}

impl RichFlight {
	pub fn trip(&self) -> String {
		format!("{} TO {}", self.departure_city.name, self.arrival_city.name)
	}

	/// arrival minus departure, negative when the arrival comes first
	pub fn duration(&self) -> FlightDuration {
		let delta = self.arrival.time - self.departure.time;
		if delta < chrono::TimeDelta::zero() {
			tracing::debug!("flight #{} arrives before it departs ({delta})", self.flight.id);
		}
		FlightDuration(delta)
	}

	pub fn summary(&self) -> FlightSummary {
		FlightSummary {
			id: self.flight.id,
			name: self.flight.name.clone(),
			trip: self.trip(),
			duration: self.duration(),
		}
	}

	pub fn detail(self) -> FlightDetail {
		FlightDetail {
			id: self.flight.id,
			trip: self.trip(),
			duration: self.duration(),
			name: self.flight.name,
			prices: self.price.into(),
		}
	}
}

/// what the flight list shows for each flight, prices left out
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FlightSummary {
	pub id: i64,
	pub name: String,
	pub trip: String,
	pub duration: FlightDuration,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FlightDetail {
	pub id: i64,
	pub name: String,
	pub trip: String,
	pub duration: FlightDuration,
	pub prices: Prices,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Prices {
	pub economy: f64,
	pub economy_plus: f64,
	pub business: f64,
	pub first_class: f64,
}

impl From<flight_price::Model> for Prices {
	fn from(value: flight_price::Model) -> Self {
		Prices {
			economy: value.economy,
			economy_plus: value.economy_plus,
			business: value.business,
			first_class: value.first_class,
		}
	}
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use crate::model::{city, flight, flight_price, flight_route};

	fn city(id: i64, name: &str) -> city::Model {
		city::Model { id, name: name.to_string(), latitude: 0.0, longitude: 0.0 }
	}

	fn rich(dep: (u32, u32), arr: (u32, u32)) -> super::RichFlight {
		super::RichFlight {
			flight: flight::Model { id: 7, name: "SB100".to_string(), departure: 1, arrival: 2, price: 3 },
			departure: flight_route::Model { id: 1, location: 1, time: Utc.with_ymd_and_hms(2024, 1, 1, dep.0, dep.1, 0).unwrap() },
			departure_city: city(1, "Springfield"),
			arrival: flight_route::Model { id: 2, location: 2, time: Utc.with_ymd_and_hms(2024, 1, 1, arr.0, arr.1, 0).unwrap() },
			arrival_city: city(2, "Shelbyville"),
			price: flight_price::Model { id: 3, economy: 100.0, economy_plus: 150.0, business: 400.0, first_class: 900.0 },
		}
	}

	#[test]
	fn trip_joins_city_names_with_literal_to() {
		assert_eq!(rich((10, 0), (12, 30)).trip(), "Springfield TO Shelbyville");
	}

	#[test]
	fn duration_is_arrival_minus_departure() {
		assert_eq!(rich((10, 0), (12, 30)).duration().delta(), chrono::TimeDelta::minutes(150));
		assert_eq!(rich((12, 30), (10, 0)).duration().delta(), chrono::TimeDelta::minutes(-150));
	}

	#[test]
	fn summary_has_no_prices_but_detail_does() {
		let flight = rich((10, 0), (12, 30));
		let summary = serde_json::to_value(flight.summary()).unwrap();
		assert!(summary.get("prices").is_none());
		assert_eq!(summary["duration"], "2:30:00");

		let detail = flight.detail();
		assert_eq!(detail.id, 7);
		assert_eq!(detail.prices.first_class, 900.0);
	}
}
