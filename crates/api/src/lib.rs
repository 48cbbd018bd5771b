//! HTTP API: server, routing, and request/response mapping for warehouses.

pub mod app;
pub mod config;
pub mod middleware;
