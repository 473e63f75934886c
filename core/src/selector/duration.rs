use chrono::TimeDelta;

const MICROS_PER_DAY: i64 = 86_400 * 1_000_000;

/// signed flight time, printed like `2:30:00` or `-1 day, 23:00:00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlightDuration(pub TimeDelta);

impl FlightDuration {
	pub fn delta(&self) -> TimeDelta {
		self.0
	}
}

impl std::fmt::Display for FlightDuration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let micros = self.0.num_microseconds()
			.unwrap_or_else(|| self.0.num_milliseconds().saturating_mul(1000));
		// days take the sign, the clock part is always positive
		let days = micros.div_euclid(MICROS_PER_DAY);
		let rest = micros.rem_euclid(MICROS_PER_DAY);
		let (secs, frac) = (rest / 1_000_000, rest % 1_000_000);

		if days != 0 {
			let plural = if days.abs() == 1 { "" } else { "s" };
			write!(f, "{days} day{plural}, ")?;
		}
		write!(f, "{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)?;
		if frac != 0 {
			write!(f, ".{frac:06}")?;
		}
		Ok(())
	}
}

impl serde::Serialize for FlightDuration {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
