use sea_orm::EntityName;

use crate::{model, selector::Prices};

/// longest accepted city or flight name
pub const NAME_MAX_LEN: usize = 40;

/// record kinds exposed to administrative tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
	City,
	FlightPrice,
	FlightRoute,
	Flight,
}

pub const REGISTRY: &[RecordKind] = &[
	RecordKind::City,
	RecordKind::FlightPrice,
	RecordKind::FlightRoute,
	RecordKind::Flight,
];

impl RecordKind {
	pub fn name(&self) -> &'static str {
		match self {
			RecordKind::City => "city",
			RecordKind::FlightPrice => "flight price",
			RecordKind::FlightRoute => "flight route",
			RecordKind::Flight => "flight",
		}
	}

	pub fn table_name(&self) -> String {
		match self {
			RecordKind::City => model::city::Entity.table_name().to_string(),
			RecordKind::FlightPrice => model::flight_price::Entity.table_name().to_string(),
			RecordKind::FlightRoute => model::flight_route::Entity.table_name().to_string(),
			RecordKind::Flight => model::flight::Entity.table_name().to_string(),
		}
	}
}

pub struct NewCity {
	pub name: String,
	pub latitude: f64,
	pub longitude: f64,
}

/// a flight with the two routes and the price list it owns
pub struct NewFlight {
	pub name: String,
	/// city id and departure time
	pub departure: (i64, chrono::DateTime<chrono::Utc>),
	/// city id and arrival time
	pub arrival: (i64, chrono::DateTime<chrono::Utc>),
	pub prices: Prices,
}

pub fn check_name(name: &str) -> crate::Result<()> {
	if name.chars().count() > NAME_MAX_LEN {
		return Err(crate::Error::NameTooLong(name.to_string()));
	}
	Ok(())
}

impl std::fmt::Display for RecordKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
