//! Typed models and HTTP client for the JalNivikaran groundwater backend.
//!
//! The backend performs all analytics (forecast models, sustainability
//! scoring, report generation, nearest-station lookup); this crate only
//! shapes request parameters and decodes responses into typed structs.
//! Payloads that do not match the declared schemas are rejected at the
//! HTTP boundary and never reach rendering code.

pub mod client;
pub mod error;
pub mod forecast;
pub mod model;
pub mod simulation;
pub mod station;
pub mod stats;
pub mod trends;

pub use client::ApiClient;
pub use error::{ApiError, Result};
