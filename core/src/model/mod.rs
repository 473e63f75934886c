pub mod city;
pub mod flight_route;
pub mod flight_price;
pub mod flight;
