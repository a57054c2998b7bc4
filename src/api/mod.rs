mod render_coordinator;
mod trend_controller;
mod view;
mod view_config;

pub use view::{CalendarTrendView, DrawListener};
pub use view_config::{CalendarTrendConfig, MAX_MIN_DAYS_SHOWN};
