//! The ordered per-period time series and its owning store.

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::Error;
use crate::period::{Period, PeriodCalendar};

/// One record of the time series.
///
/// `actual` is absent for future periods; `forecast` is absent only if the
/// period was never forecast. `recommended_order` is derived by
/// [`crate::recommend::recompute`] and is never set by ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// The period this record belongs to (unique within a store).
    pub period: Period,
    /// Observed demand, if the period has already happened.
    pub actual: Option<f64>,
    /// Externally supplied forecast demand.
    pub forecast: Option<f64>,
    /// Derived recommended order quantity.
    pub recommended_order: Option<u64>,
}

/// An ordered sequence of [`SeriesPoint`], one per period.
///
/// Points are keyed by their calendar position, so the sequence stays
/// chronological no matter what order periods arrive in. Mutation happens only
/// through [`TimeSeriesStore::upsert`] (via the ingestion boundary) and
/// [`crate::recommend::recompute`].
#[derive(Debug, Clone)]
pub struct TimeSeriesStore {
    calendar: PeriodCalendar,
    points: IndexMap<usize, SeriesPoint>,
}

impl TimeSeriesStore {
    /// Create an empty store over the given period ordering.
    pub fn new(calendar: PeriodCalendar) -> Self {
        Self {
            calendar,
            points: IndexMap::new(),
        }
    }

    /// The period ordering this store was built with.
    pub fn calendar(&self) -> &PeriodCalendar {
        &self.calendar
    }

    /// Insert or merge one record.
    ///
    /// A new period is inserted at its chronological position. For an existing
    /// period only the `Some` fields overwrite what is stored; the previously
    /// derived `recommended_order` is preserved either way. Unresolvable
    /// periods and negative or non-finite values are rejected with
    /// [`Error::InvalidRecord`] and leave the store untouched.
    pub fn upsert(
        &mut self,
        period: Period,
        actual: Option<f64>,
        forecast: Option<f64>,
    ) -> Result<(), Error> {
        let pos = self
            .calendar
            .index_of(&period)
            .ok_or_else(|| Error::InvalidRecord {
                period: period.to_string(),
                field: "period",
                value: "label not in calendar".to_string(),
            })?;
        check_value(&period, "actual", actual)?;
        check_value(&period, "forecast", forecast)?;

        match self.points.binary_search_keys(&pos) {
            Ok(_) => {
                let point = &mut self.points[&pos];
                if actual.is_some() {
                    point.actual = actual;
                }
                if forecast.is_some() {
                    point.forecast = forecast;
                }
            }
            Err(at) => {
                self.points.shift_insert(
                    at,
                    pos,
                    SeriesPoint {
                        period,
                        actual,
                        forecast,
                        recommended_order: None,
                    },
                );
            }
        }
        Ok(())
    }

    /// The points in chronological order (read-only, restartable).
    pub fn points(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.values()
    }

    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = &mut SeriesPoint> {
        self.points.values_mut()
    }

    /// Look up the point for one period.
    pub fn get(&self, period: &Period) -> Result<&SeriesPoint, Error> {
        self.calendar
            .index_of(period)
            .and_then(|pos| self.points.get(&pos))
            .ok_or_else(|| Error::NotFound {
                period: period.to_string(),
            })
    }

    /// Number of periods with a stored point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no period has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub(crate) fn check_value(
    period: &Period,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), Error> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(Error::InvalidRecord {
            period: period.to_string(),
            field,
            value: v.to_string(),
        }),
        _ => Ok(()),
    }
}
