use chrono::{TimeDelta, TimeZone, Utc};

use flightdeck::{admin::{NewCity, NewFlight}, selector::Prices, traits::Administrable};

const CITIES: &[(&str, f64, f64)] = &[
	("Springfield", 39.80, -89.64),
	("Shelbyville", 39.41, -88.79),
	("Capital City", 38.57, -90.21),
	("Ogdenville", 40.12, -88.24),
	("North Haverbrook", 41.50, -87.70),
	("Brockway", 37.72, -89.22),
];

pub async fn faker(ctx: flightdeck::Context, count: u64) -> flightdeck::Result<()> {
	let mut cities = Vec::with_capacity(CITIES.len());
	for (name, latitude, longitude) in CITIES {
		cities.push(ctx.add_city(NewCity { name: name.to_string(), latitude: *latitude, longitude: *longitude }).await?);
	}

	let morning = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
		.single()
		.unwrap_or_else(Utc::now);

	ctx.add_flight(NewFlight {
		name: "SB100".to_string(),
		departure: (cities[0], morning),
		arrival: (cities[1], morning + TimeDelta::minutes(150)),
		prices: Prices { economy: 100.0, economy_plus: 150.0, business: 400.0, first_class: 900.0 },
	}).await?;

	let n = cities.len() as u64;
	for i in 0..count {
		let from = cities[(i % n) as usize];
		// never 0, so a flight never lands where it took off
		let hop = 1 + (i / n) % (n - 1);
		let to = cities[((i + hop) % n) as usize];
		let departs = morning + TimeDelta::hours(i as i64 + 1);
		let arrives = departs + TimeDelta::minutes(45 + 25 * (i % 5) as i64);
		let base = 80.0 + 10.0 * (i % 7) as f64;

		ctx.add_flight(NewFlight {
			name: format!("FD{}", 200 + i),
			departure: (from, departs),
			arrival: (to, arrives),
			prices: Prices { economy: base, economy_plus: base * 1.5, business: base * 4.0, first_class: base * 9.0 },
		}).await?;
	}

	tracing::info!("seeded {} cities and {} flights", cities.len(), count + 1);
	Ok(())
}
