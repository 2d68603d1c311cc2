//! Parcel API server library.
//!
//! Exposes the response emitter, the request binder and the router builder so
//! integration tests and the binary entrypoint share them.

pub mod binder;
pub mod config;
pub mod error;
pub mod middleware;
pub mod reply;
pub mod router;
pub mod routes;
pub mod state;
