pub mod controller;
pub mod error;
pub mod routes;
pub mod schema;
