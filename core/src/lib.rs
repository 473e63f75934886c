pub mod config;
pub mod context;
pub mod errors;
pub mod ext;
pub mod model;
pub mod selector;
pub mod traits;
pub mod admin;

pub use context::Context;
pub use config::Config;
pub use errors::FlightdeckResult as Result;
pub use errors::FlightdeckError as Error;
pub use selector::{Query, RichFlight};
pub use traits::Flights;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
