use tower_http::classify::{SharedClassifier, StatusInRangeAsFailures};

pub mod error;
pub use error::{ApiError, ApiResult};

pub mod templates;
pub use templates::Templates;

pub mod flights;

use axum::{routing::get, Extension, Router};

pub fn router(ctx: flightdeck::Context, templates: Templates) -> Router {
	use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

	let timeout = std::time::Duration::from_secs(ctx.cfg().security.request_timeout);

	Router::new()
		.route("/flights", get(flights::list))
		.route("/flights/", get(flights::list))
		.route("/flights/{flight_id}", get(flights::view))
		.layer(Extension(templates))
		.layer(TimeoutLayer::with_status_code(axum::http::StatusCode::REQUEST_TIMEOUT, timeout))
		.layer(
			// 404s are expected for unknown flights, only log server side failures
			TraceLayer::new(SharedClassifier::new(StatusInRangeAsFailures::new(500..=999)))
				.make_span_with(|req: &axum::http::Request<_>| {
					tracing::span!(
						tracing::Level::INFO,
						"request",
						method = %req.method(),
						uri = %req.uri(),
					)
				})
		)
		.with_state(ctx)
}

pub async fn serve(ctx: flightdeck::Context, bind: String, shutdown: impl ShutdownToken) -> Result<(), std::io::Error> {
	let templates = Templates::load()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

	let router = router(ctx, templates);

	tracing::info!("serving flight pages on {bind}");

	let listener = tokio::net::TcpListener::bind(bind).await?;
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown.event())
		.await?;

	Ok(())
}


pub trait ShutdownToken: Sync + Send + 'static {
	fn event(self) -> impl std::future::Future<Output = ()> + std::marker::Send;
}
