//! NDIS API — service bootstrap library.
//!
//! Re-exports all modules so the binary (`main.rs`) and the e2e test crate
//! can access internal types like `ServiceConfig`, `CorsPolicy`, `App`, and
//! `build_router` without binding a socket.

pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
