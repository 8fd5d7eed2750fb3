//! Derivation of recommended order quantities from forecast demand.
//!
//! The policy is deliberately linear and deterministic so recommendations are
//! reproducible and auditable: forecasts are calibrated against a two-week
//! reference coverage window, and `coverage_weeks / 2` rescales them
//! proportionally. No smoothing, no statistics.

use tracing::debug;

use crate::errors::Error;
use crate::series::{SeriesPoint, TimeSeriesStore};

/// The reference coverage window the supplied forecasts are calibrated to.
pub const BASELINE_COVERAGE_WEEKS: f64 = 2.0;

/// Recompute `recommended_order` for every point in the store.
///
/// For each point with a forecast:
/// `recommended_order = round(forecast * coverage_weeks / 2)`, rounding to the
/// nearest integer with ties away from zero. Points without a forecast get no
/// recommendation (a previously derived value is cleared). Idempotent for a
/// fixed `coverage_weeks` and unchanged series.
///
/// `coverage_weeks` may be fractional but must be finite and positive;
/// otherwise [`Error::InvalidParameter`] is returned and the store is left
/// unchanged. Returns the updated points in chronological order.
pub fn recompute(
    store: &mut TimeSeriesStore,
    coverage_weeks: f64,
) -> Result<impl Iterator<Item = &SeriesPoint>, Error> {
    if !coverage_weeks.is_finite() || coverage_weeks <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "coverage_weeks",
            value: coverage_weeks.to_string(),
        });
    }

    let mut derived = 0usize;
    for point in store.points_mut() {
        point.recommended_order = point
            .forecast
            .map(|forecast| (forecast * coverage_weeks / BASELINE_COVERAGE_WEEKS).round() as u64);
        if point.recommended_order.is_some() {
            derived += 1;
        }
    }
    debug!(coverage_weeks, derived, "recomputed recommended orders");

    Ok(store.points())
}
