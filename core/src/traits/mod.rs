pub mod flights;
pub mod admin;

pub use flights::Flights;
pub use admin::Administrable;
