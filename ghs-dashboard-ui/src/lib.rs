//! Shared Dioxus components and Plotly bridge for the health dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly calls via `js_sys::eval()`
//! - `figure`: conversion of panel chart specs into Plotly figures
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, value boxes, charts, tabs)

pub mod components;
pub mod figure;
pub mod js_bridge;
pub mod state;
