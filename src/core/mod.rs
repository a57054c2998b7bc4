pub mod axis_labels;
pub mod clock;
pub mod date_axis;
pub mod date_pattern;
pub mod series;
pub mod types;

pub use axis_labels::{
    AxisLabelLocale, AxisLayout, CompiledAxis, LabelMetrics, compile_axis, month_label,
};
pub use clock::{Clock, FixedClock, SystemClock, today_at};
pub use date_axis::{axis_position, build_axis, unique_dates};
pub use date_pattern::{DEFAULT_DATE_PATTERN, DatePattern, format_date, parse_date};
pub use series::{
    CompiledSeries, INNER_DOT_RATIO, SeriesLayout, clamp_value, compile_series,
};
pub use types::{StartPolicy, Trend, ZoneOffset};
