//! Framework-free building blocks of the response envelope convention.
//!
//! - [`envelope::Envelope`] -- the JSON wrapper every response body uses.
//! - [`outcome::Outcome`] -- one variant per outcome category, each with a fixed HTTP status.
//! - [`error::CoreError`] -- the terminal error taxonomy of a request.
//! - [`validation`] -- renders `validator` failures into an envelope message.

pub mod envelope;
pub mod error;
pub mod outcome;
pub mod validation;
