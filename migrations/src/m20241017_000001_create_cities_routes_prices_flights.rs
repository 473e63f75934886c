use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Cities {
	Table,
	Id,
	Name,
	Latitude,
	Longitude,
}

#[derive(DeriveIden)]
pub enum FlightRoutes {
	Table,
	Id,
	Location,
	Time,
}

#[derive(DeriveIden)]
pub enum FlightPrices {
	Table,
	Id,
	Economy,
	EconomyPlus,
	Business,
	FirstClass,
}

#[derive(DeriveIden)]
pub enum Flights {
	Table,
	Id,
	Name,
	Departure,
	Arrival,
	Price,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Cities::Table)
					.comment("places flights depart from and arrive to")
					.col(
						ColumnDef::new(Cities::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(Cities::Name).string_len(40).not_null())
					.col(ColumnDef::new(Cities::Latitude).double().not_null())
					.col(ColumnDef::new(Cities::Longitude).double().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(FlightRoutes::Table)
					.comment("one end of a flight: a city at a given time")
					.col(
						ColumnDef::new(FlightRoutes::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(FlightRoutes::Location).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-flight-routes-location")
							.from(FlightRoutes::Table, FlightRoutes::Location)
							.to(Cities::Table, Cities::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(FlightRoutes::Time).timestamp_with_time_zone().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().name("index-flight-routes-location").table(FlightRoutes::Table).col(FlightRoutes::Location).to_owned())
			.await?;

		manager
			.create_table(
				Table::create()
					.table(FlightPrices::Table)
					.comment("ticket prices for every class of a flight")
					.col(
						ColumnDef::new(FlightPrices::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(FlightPrices::Economy).double().not_null())
					.col(ColumnDef::new(FlightPrices::EconomyPlus).double().not_null())
					.col(ColumnDef::new(FlightPrices::Business).double().not_null())
					.col(ColumnDef::new(FlightPrices::FirstClass).double().not_null())
					.to_owned()
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Flights::Table)
					.comment("named flights joining two routes and a price list")
					.col(
						ColumnDef::new(Flights::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(Flights::Name).string_len(40).not_null())
					.col(ColumnDef::new(Flights::Departure).big_integer().not_null().unique_key())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-flights-departure")
							.from(Flights::Table, Flights::Departure)
							.to(FlightRoutes::Table, FlightRoutes::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Flights::Arrival).big_integer().not_null().unique_key())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-flights-arrival")
							.from(Flights::Table, Flights::Arrival)
							.to(FlightRoutes::Table, FlightRoutes::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Flights::Price).big_integer().not_null().unique_key())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-flights-price")
							.from(Flights::Table, Flights::Price)
							.to(FlightPrices::Table, FlightPrices::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.to_owned()
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Flights::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(FlightPrices::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(FlightRoutes::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Cities::Table).to_owned())
			.await?;

		Ok(())
	}
}
