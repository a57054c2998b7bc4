//! calendar-trend-rs: labeled daily trends compiled into drawable geometry.
//!
//! The crate splits into a pure compiler (`core`), backend-agnostic draw
//! primitives and renderers (`render`), and the `CalendarTrendView` facade
//! (`api`) that owns trends, configuration and a renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CalendarTrendConfig, CalendarTrendView};
pub use error::{ChartError, ChartResult};
