//! Runtime models used by the HTTP server.

pub mod config;
