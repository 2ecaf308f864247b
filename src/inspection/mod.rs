//! Restaurant inspection data.
//!
//! This module handles:
//! - Record and column types
//! - The NYC Open Data client
//! - Shaping raw rows into displayed records
//! - The fetch-and-shape pipeline

pub mod client;
pub mod shaping;
pub mod types;
pub mod violations;

pub use client::InspectionClient;
pub use shaping::shape;
pub use types::{Column, InspectionRecord};
pub use violations::fetch_critical_violations;
