#![allow(dead_code)]

use replenish_engine::ingest::{RawRecord, merge};
use replenish_engine::period::PeriodCalendar;
use replenish_engine::series::TimeSeriesStore;

/// Seven months of history/forecast, chronological.
pub const MONTHS: [&str; 7] = ["Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл"];

pub fn monthly_calendar() -> PeriodCalendar {
    PeriodCalendar::new(MONTHS).unwrap()
}

pub fn raw(period: &str, actual: Option<f64>, forecast: Option<f64>) -> RawRecord {
    RawRecord {
        period: period.to_string(),
        actual,
        forecast,
    }
}

/// A store seeded with five closed months and two forecast-only months.
pub fn seeded_store() -> TimeSeriesStore {
    let mut store = TimeSeriesStore::new(monthly_calendar());
    let records = vec![
        raw("Янв", Some(4200.0), Some(4000.0)),
        raw("Фев", Some(3800.0), Some(3900.0)),
        raw("Мар", Some(4500.0), Some(4300.0)),
        raw("Апр", Some(4800.0), Some(4700.0)),
        raw("Май", Some(5200.0), Some(5100.0)),
        raw("Июн", None, Some(5400.0)),
        raw("Июл", None, Some(5600.0)),
    ];
    merge(&mut store, records).unwrap();
    store
}
