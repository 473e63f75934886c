use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use sea_orm::{ColumnTrait, QueryFilter};

use crate::{model, selector::RichFlight, Query};

/// read access to flights, with all their related rows joined in
#[async_trait::async_trait]
pub trait Flights {
	/// fails with NotFound when no flight has this id
	async fn flight(&self, id: i64) -> crate::Result<RichFlight>;

	/// streams every flight in storage order, rows are decoded as they arrive
	async fn flights<'a>(&'a self) -> crate::Result<BoxStream<'a, crate::Result<RichFlight>>>;
}

#[async_trait::async_trait]
impl Flights for crate::Context {
	async fn flight(&self, id: i64) -> crate::Result<RichFlight> {
		Query::flights()
			.filter(model::flight::Column::Id.eq(id))
			.into_model::<RichFlight>()
			.one(self.db())
			.await?
			.ok_or(crate::Error::not_found("flight"))
	}

	async fn flights<'a>(&'a self) -> crate::Result<BoxStream<'a, crate::Result<RichFlight>>> {
		let stream = Query::flights()
			.into_model::<RichFlight>()
			.stream(self.db())
			.await?;

		Ok(stream.map_err(crate::Error::from).boxed())
	}
}
