//! Shared Dioxus components and D3.js/Leaflet bridge for the
//! JalNivikaran dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart and Leaflet map
//!   functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, plus the
//!   stale-response generation guard
//! - `session`: Typed role session and page gating
//! - `prep`: Pure chart-data preparation helpers
//! - `components`: Reusable RSX components (cards, selectors, pickers)

pub mod components;
pub mod js_bridge;
pub mod prep;
pub mod session;
pub mod state;
