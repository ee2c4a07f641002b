pub mod auth;
pub mod configuration;
pub mod constant;
pub mod controller;
pub mod domain;
pub mod error;
pub mod request;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
