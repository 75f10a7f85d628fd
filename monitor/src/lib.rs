pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod notify;
pub mod routes;
pub mod service;
pub mod state;
