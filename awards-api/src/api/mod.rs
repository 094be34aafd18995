//! HTTP API handlers for awards-api

pub mod health;
pub mod producers;

pub use health::health_routes;
pub use producers::get_awarded_producer;
