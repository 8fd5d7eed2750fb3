//! The ingestion boundary: validate and merge externally parsed records.
//!
//! An external parser turns uploaded spreadsheets into [`RawRecord`]s; this
//! module only defines their shape and validation, not any file format.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;
use crate::period::Period;
use crate::series::{TimeSeriesStore, check_value};

/// One externally supplied record, as produced by the upstream parser.
///
/// Unknown keys are rejected at deserialization, so input carrying a
/// `recommended_order` column cannot smuggle a value into the derived field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecord {
    /// Period label; must resolve against the store's calendar.
    pub period: String,
    /// Observed demand, if known.
    #[serde(default)]
    pub actual: Option<f64>,
    /// Forecast demand, if known.
    #[serde(default)]
    pub forecast: Option<f64>,
}

/// Merge a batch of records into the store, atomically.
///
/// The whole batch is validated before anything is applied: every period must
/// resolve against the store's calendar and every supplied value must be
/// finite and non-negative. The first invalid record rejects the batch with
/// [`Error::InvalidRecord`] and the store is left exactly as it was — a
/// partial merge would silently drift the series. Valid records are applied
/// in the order supplied via [`TimeSeriesStore::upsert`]; later records for
/// the same period merge into earlier ones.
///
/// Returns the number of records applied. Does not recompute
/// recommendations; call [`crate::recommend::recompute`] afterwards.
pub fn merge<I>(store: &mut TimeSeriesStore, records: I) -> Result<usize, Error>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut batch = Vec::new();
    for record in records {
        let period = Period::new(record.period);
        if store.calendar().index_of(&period).is_none() {
            return Err(Error::InvalidRecord {
                period: period.to_string(),
                field: "period",
                value: "label not in calendar".to_string(),
            });
        }
        check_value(&period, "actual", record.actual)?;
        check_value(&period, "forecast", record.forecast)?;
        batch.push((period, record.actual, record.forecast));
    }

    let applied = batch.len();
    for (period, actual, forecast) in batch {
        store.upsert(period, actual, forecast)?;
    }
    debug!(applied, "merged ingestion batch");

    Ok(applied)
}
