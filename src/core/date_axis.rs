use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::core::Trend;

/// Distinct dates across every trend, plus `today` when given, ascending.
#[must_use]
pub fn unique_dates(trends: &[Trend], today: Option<NaiveDate>) -> Vec<NaiveDate> {
    collect_dates(trends, today).into_iter().collect()
}

/// Builds the x-axis domain shared by every series of one redraw.
///
/// Starts from [`unique_dates`] and, while fewer than `min_count` dates are
/// present, prepends the day before the earliest one. An empty set stays
/// empty: there is no date to pad from.
#[must_use]
pub fn build_axis(trends: &[Trend], today: Option<NaiveDate>, min_count: usize) -> Vec<NaiveDate> {
    let mut dates = collect_dates(trends, today);
    let present = dates.len();

    while dates.len() < min_count {
        let Some(earliest) = dates.first().copied() else {
            break;
        };
        let Some(previous) = earliest.pred_opt() else {
            break;
        };
        dates.insert(previous);
    }

    trace!(present, padded = dates.len() - present, min_count, "built date axis");
    dates.into_iter().collect()
}

/// 1-based position of `date` on `axis`, `None` when the date is not a tick.
#[must_use]
pub fn axis_position(axis: &[NaiveDate], date: NaiveDate) -> Option<usize> {
    axis.binary_search(&date).ok().map(|index| index + 1)
}

fn collect_dates(trends: &[Trend], today: Option<NaiveDate>) -> BTreeSet<NaiveDate> {
    let mut dates: BTreeSet<NaiveDate> = trends
        .iter()
        .flat_map(|trend| trend.values.keys().copied())
        .collect();
    dates.extend(today);
    dates
}
