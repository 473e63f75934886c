use sea_orm::{sea_query::{Alias, Expr, SimpleExpr}, EntityTrait, Iden, Iterable, JoinType, QuerySelect, RelationDef, RelationTrait, Select, SelectColumns};

use crate::model;

mod rich;
pub use rich::{RichFlight, FlightSummary, FlightDetail, Prices};

mod duration;
pub use duration::FlightDuration;

pub const FLIGHT: &str = "flight";
pub const DEPARTURE: &str = "departure";
pub const DEPARTURE_CITY: &str = "departure_city";
pub const ARRIVAL: &str = "arrival";
pub const ARRIVAL_CITY: &str = "arrival_city";
pub const PRICE: &str = "price";

pub struct Query;

impl Query {
	/// every flight joined with both its routes, their cities and its prices, in one statement
	pub fn flights() -> Select<model::flight::Entity> {
		let mut select = model::flight::Entity::find()
			.join_as(JoinType::InnerJoin, model::flight::Relation::Departures.def(), Alias::new(DEPARTURE))
			.join_as(JoinType::InnerJoin, hop(model::flight_route::Relation::Cities.def(), DEPARTURE), Alias::new(DEPARTURE_CITY))
			.join_as(JoinType::InnerJoin, model::flight::Relation::Arrivals.def(), Alias::new(ARRIVAL))
			.join_as(JoinType::InnerJoin, hop(model::flight_route::Relation::Cities.def(), ARRIVAL), Alias::new(ARRIVAL_CITY))
			.join_as(JoinType::InnerJoin, model::flight::Relation::Prices.def(), Alias::new(PRICE))
			.select_only();

		for col in model::flight::Column::iter() {
			select = select.select_column_as(col, prefixed(FLIGHT, &col.to_string()));
		}

		for col in model::flight_route::Column::iter() {
			select = select
				.column_as(aliased(DEPARTURE, col), prefixed(DEPARTURE, &col.to_string()))
				.column_as(aliased(ARRIVAL, col), prefixed(ARRIVAL, &col.to_string()));
		}

		for col in model::city::Column::iter() {
			select = select
				.column_as(aliased(DEPARTURE_CITY, col), prefixed(DEPARTURE_CITY, &col.to_string()))
				.column_as(aliased(ARRIVAL_CITY, col), prefixed(ARRIVAL_CITY, &col.to_string()));
		}

		for col in model::flight_price::Column::iter() {
			select = select.column_as(aliased(PRICE, col), prefixed(PRICE, &col.to_string()));
		}

		select
	}
}

/// column name under which a joined table's field is selected
pub fn prefixed(table: &str, column: &str) -> String {
	format!("{table}_{column}")
}

fn aliased<C: Iden + 'static>(table: &str, col: C) -> SimpleExpr {
	Expr::col((Alias::new(table), col)).into()
}

// second join level: the relation starts from an already aliased table
fn hop(mut rel: RelationDef, from: &str) -> RelationDef {
	rel.from_tbl = rel.from_tbl.alias(Alias::new(from));
	rel
}
