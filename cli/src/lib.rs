mod registry;
pub use registry::*;

mod add;
pub use add::*;

mod faker;
pub use faker::*;

use flightdeck::admin::RecordKind;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Kind {
	City,
	FlightPrice,
	FlightRoute,
	Flight,
}

impl From<Kind> for RecordKind {
	fn from(value: Kind) -> Self {
		match value {
			Kind::City => RecordKind::City,
			Kind::FlightPrice => RecordKind::FlightPrice,
			Kind::FlightRoute => RecordKind::FlightRoute,
			Kind::Flight => RecordKind::Flight,
		}
	}
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// list registered record kinds and how many rows each has
	Registry,

	/// print id and label of every record of given kind
	Records {
		/// record kind to list
		kind: Kind,
	},

	/// delete a record, removing a flight also removes its routes and prices
	Remove {
		/// record kind to delete from
		kind: Kind,

		/// id of record to delete
		id: i64,
	},

	/// insert a new city
	AddCity {
		/// city name, at most 40 characters
		name: String,

		#[arg(allow_negative_numbers = true)]
		latitude: f64,

		#[arg(allow_negative_numbers = true)]
		longitude: f64,
	},

	/// insert a new flight, together with its routes and prices
	AddFlight {
		/// flight name, at most 40 characters
		name: String,

		/// departure city id
		#[arg(long)]
		from: i64,

		/// departure time, as rfc3339
		#[arg(long)]
		departs: chrono::DateTime<chrono::Utc>,

		/// arrival city id
		#[arg(long)]
		to: i64,

		/// arrival time, as rfc3339
		#[arg(long)]
		arrives: chrono::DateTime<chrono::Utc>,

		#[arg(long)]
		economy: f64,

		#[arg(long)]
		economy_plus: f64,

		#[arg(long)]
		business: f64,

		#[arg(long)]
		first_class: f64,
	},

	/// seed demo cities and flights
	Faker {
		/// how many generated flights to add on top of SB100
		#[arg(default_value_t = 10)]
		count: u64,
	},
}

pub async fn run(ctx: flightdeck::Context, command: CliCommand) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!("running cli task: {command:?}");
	match command {
		CliCommand::Registry =>
			Ok(registry(ctx).await?),
		CliCommand::Records { kind } =>
			Ok(records(ctx, kind.into()).await?),
		CliCommand::Remove { kind, id } =>
			Ok(remove(ctx, kind.into(), id).await?),
		CliCommand::AddCity { name, latitude, longitude } =>
			Ok(add_city(ctx, name, latitude, longitude).await?),
		CliCommand::AddFlight { name, from, departs, to, arrives, economy, economy_plus, business, first_class } =>
			Ok(add_flight(ctx, name, (from, departs), (to, arrives), flightdeck::selector::Prices { economy, economy_plus, business, first_class }).await?),
		CliCommand::Faker { count } =>
			Ok(faker(ctx, count).await?),
	}
}
