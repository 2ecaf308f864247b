//! Critical restaurant violations in Manhattan.
//!
//! This library fetches NYC restaurant inspection results from the city's open data
//! API, keeps the critical violations recorded in Manhattan, and renders them as an
//! HTML table behind a single web route.
//!
//! # Pipeline
//!
//! ```text
//! GET /  ->  fetch dataset page  ->  drop incomplete rows  ->  project + relabel
//!        ->  keep Critical / Manhattan  ->  sort by date, newest first  ->  HTML
//! ```
//!
//! A transport failure talking to the dataset yields an empty table; a body that is
//! not a JSON array of objects fails the request.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`inspection`]: Record types, API client, and shaping
//! - [`render`]: HTML table and page rendering
//! - [`api`]: HTTP routes and server lifecycle
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod inspection;
pub mod metrics;
pub mod render;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
