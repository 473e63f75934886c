use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flights")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub name: String,
	#[sea_orm(unique)]
	pub departure: i64,
	#[sea_orm(unique)]
	pub arrival: i64,
	#[sea_orm(unique)]
	pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::flight_route::Entity",
		from = "Column::Departure",
		to = "super::flight_route::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Departures,
	#[sea_orm(
		belongs_to = "super::flight_route::Entity",
		from = "Column::Arrival",
		to = "super::flight_route::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Arrivals,
	#[sea_orm(
		belongs_to = "super::flight_price::Entity",
		from = "Column::Price",
		to = "super::flight_price::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Prices,
}

// departure and arrival both point to flight_routes, so only prices get a Related impl
impl Related<super::flight_price::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Prices.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
	pub fn label(&self) -> String {
		self.name.clone()
	}
}
