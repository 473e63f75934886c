use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub name: String,
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::flight_route::Entity")]
	FlightRoutes,
}

impl Related<super::flight_route::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::FlightRoutes.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
	pub fn label(&self) -> String {
		self.name.clone()
	}
}
