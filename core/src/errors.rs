#[derive(Debug, thiserror::Error)]
pub enum FlightdeckError {
	#[error("database error: {0}")]
	Database(#[from] sea_orm::DbErr),

	#[error("could not find {0}")]
	NotFound(&'static str),

	#[error("name '{0}' is longer than {max} characters", max = crate::admin::NAME_MAX_LEN)]
	NameTooLong(String),
}

impl FlightdeckError {
	pub fn not_found(what: &'static str) -> Self {
		Self::NotFound(what)
	}
}

pub type FlightdeckResult<T> = Result<T, FlightdeckError>;
