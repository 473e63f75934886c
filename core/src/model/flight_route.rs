use sea_orm::entity::prelude::*;

/// a city and a point in time: either end of a flight
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flight_routes")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub location: i64,
	pub time: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::city::Entity",
		from = "Column::Location",
		to = "super::city::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Cities,
}

impl Related<super::city::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Cities.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
	pub fn label(&self, city: &super::city::Model) -> String {
		format!("{} - {}", city.name, self.time.format("%Y-%m-%d %H:%M:%S%:z"))
	}
}
