use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use sea_orm::{ActiveValue::{NotSet, Set}, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};

use crate::{admin::{check_name, NewCity, NewFlight, RecordKind}, model};

#[async_trait::async_trait]
pub trait Administrable {
	async fn add_city(&self, city: NewCity) -> crate::Result<i64>;

	/// inserts both routes, the prices and the flight itself in one transaction
	async fn add_flight(&self, flight: NewFlight) -> crate::Result<i64>;

	async fn count(&self, kind: RecordKind) -> crate::Result<u64>;

	/// `(id, label)` for every row of given kind
	async fn labels<'a>(&'a self, kind: RecordKind) -> crate::Result<BoxStream<'a, crate::Result<(i64, String)>>>;

	/// deletes one row, removing a flight also removes the routes and prices it owns
	async fn remove(&self, kind: RecordKind, id: i64) -> crate::Result<()>;
}

#[async_trait::async_trait]
impl Administrable for crate::Context {
	async fn add_city(&self, city: NewCity) -> crate::Result<i64> {
		check_name(&city.name)?;

		let id = model::city::Entity::insert(model::city::ActiveModel {
			id: NotSet,
			name: Set(city.name),
			latitude: Set(city.latitude),
			longitude: Set(city.longitude),
		})
			.exec(self.db())
			.await?
			.last_insert_id;

		Ok(id)
	}

	async fn add_flight(&self, flight: NewFlight) -> crate::Result<i64> {
		check_name(&flight.name)?;

		let tx = self.db().begin().await?;

		let mut routes = Vec::with_capacity(2);
		for (location, time) in [flight.departure, flight.arrival] {
			if model::city::Entity::find_by_id(location).one(&tx).await?.is_none() {
				return Err(crate::Error::not_found(RecordKind::City.name()));
			}

			let route = model::flight_route::Entity::insert(model::flight_route::ActiveModel {
				id: NotSet,
				location: Set(location),
				time: Set(time),
			})
				.exec(&tx)
				.await?
				.last_insert_id;

			routes.push(route);
		}

		let price = model::flight_price::Entity::insert(model::flight_price::ActiveModel {
			id: NotSet,
			economy: Set(flight.prices.economy),
			economy_plus: Set(flight.prices.economy_plus),
			business: Set(flight.prices.business),
			first_class: Set(flight.prices.first_class),
		})
			.exec(&tx)
			.await?
			.last_insert_id;

		let id = model::flight::Entity::insert(model::flight::ActiveModel {
			id: NotSet,
			name: Set(flight.name),
			departure: Set(routes[0]),
			arrival: Set(routes[1]),
			price: Set(price),
		})
			.exec(&tx)
			.await?
			.last_insert_id;

		tx.commit().await?;
		Ok(id)
	}

	async fn count(&self, kind: RecordKind) -> crate::Result<u64> {
		let count = match kind {
			RecordKind::City => model::city::Entity::find().count(self.db()).await?,
			RecordKind::FlightPrice => model::flight_price::Entity::find().count(self.db()).await?,
			RecordKind::FlightRoute => model::flight_route::Entity::find().count(self.db()).await?,
			RecordKind::Flight => model::flight::Entity::find().count(self.db()).await?,
		};
		Ok(count)
	}

	async fn labels<'a>(&'a self, kind: RecordKind) -> crate::Result<BoxStream<'a, crate::Result<(i64, String)>>> {
		let stream = match kind {
			RecordKind::City => model::city::Entity::find()
				.stream(self.db())
				.await?
				.map_ok(|city| (city.id, city.label()))
				.boxed(),
			RecordKind::FlightRoute => model::flight_route::Entity::find()
				.find_also_related(model::city::Entity)
				.stream(self.db())
				.await?
				.and_then(|(route, city)| futures::future::ready(match city {
					Some(city) => Ok((route.id, route.label(&city))),
					None => Err(sea_orm::DbErr::RecordNotFound(format!("city #{}", route.location))),
				}))
				.boxed(),
			RecordKind::FlightPrice => model::flight_price::Entity::find()
				.find_also_related(model::flight::Entity)
				.stream(self.db())
				.await?
				.map_ok(|(price, flight)| (price.id, price.label(flight.as_ref())))
				.boxed(),
			RecordKind::Flight => model::flight::Entity::find()
				.stream(self.db())
				.await?
				.map_ok(|flight| (flight.id, flight.label()))
				.boxed(),
		};

		Ok(stream.map_err(crate::Error::from).boxed())
	}

	async fn remove(&self, kind: RecordKind, id: i64) -> crate::Result<()> {
		let tx = self.db().begin().await?;

		let deleted = match kind {
			RecordKind::City => model::city::Entity::delete_by_id(id).exec(&tx).await?.rows_affected,
			RecordKind::FlightPrice => model::flight_price::Entity::delete_by_id(id).exec(&tx).await?.rows_affected,
			RecordKind::FlightRoute => model::flight_route::Entity::delete_by_id(id).exec(&tx).await?.rows_affected,
			RecordKind::Flight => {
				let flight = model::flight::Entity::find_by_id(id)
					.one(&tx)
					.await?
					.ok_or(crate::Error::not_found(kind.name()))?;

				model::flight::Entity::delete_by_id(id).exec(&tx).await?;
				model::flight_price::Entity::delete_by_id(flight.price).exec(&tx).await?;
				model::flight_route::Entity::delete_many()
					.filter(model::flight_route::Column::Id.is_in([flight.departure, flight.arrival]))
					.exec(&tx)
					.await?;
				1
			},
		};

		if deleted == 0 {
			return Err(crate::Error::not_found(kind.name()));
		}

		tx.commit().await?;
		tracing::info!("removed {kind} #{id}");
		Ok(())
	}
}
