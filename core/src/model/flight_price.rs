use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "flight_prices")]
pub struct Model {
	#[sea_orm(primary_key)]
	#[serde(skip)]
	pub id: i64,
	pub economy: f64,
	pub economy_plus: f64,
	pub business: f64,
	pub first_class: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_one = "super::flight::Entity")]
	Flights,
}

impl Related<super::flight::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Flights.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
	pub fn label(&self, flight: Option<&super::flight::Model>) -> String {
		match flight {
			Some(flight) => format!("Prices for {}", flight.name),
			None => "Prices for <unassigned>".to_string(),
		}
	}
}
