use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("database error: {0:?}")]
	Database(#[from] sea_orm::DbErr),

	#[error("template error: {0}")]
	Template(#[from] tera::Error),

	#[error("{0}")]
	NotFound(String),

	// bare status code, no body
	#[error("{0}")]
	Status(StatusCode),
}

impl ApiError {
	pub fn bad_request() -> Self {
		Self::Status(StatusCode::BAD_REQUEST)
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<StatusCode> for ApiError {
	fn from(value: StatusCode) -> Self {
		ApiError::Status(value)
	}
}

impl From<flightdeck::Error> for ApiError {
	fn from(value: flightdeck::Error) -> Self {
		match value {
			flightdeck::Error::Database(e) => ApiError::Database(e),
			flightdeck::Error::NotFound(_) => ApiError::NotFound(value.to_string()),
			flightdeck::Error::NameTooLong(_) => ApiError::bad_request(),
		}
	}
}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		tracing::debug!("emitting error response: {self:?}");
		let descr = self.to_string();
		match self {
			ApiError::NotFound(_) => (StatusCode::NOT_FOUND, descr).into_response(),
			ApiError::Status(status) => status.into_response(),
			ApiError::Database(_) => (StatusCode::SERVICE_UNAVAILABLE, descr).into_response(),
			ApiError::Template(e) => {
				tracing::error!("failed rendering page: {e:?}");
				(StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
			},
		}
	}
}
