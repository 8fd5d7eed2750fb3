//! Period labels and the calendar that orders them.
//!
//! A [`Period`] is an opaque label identifying one slot of the time series
//! (e.g., a calendar month). Labels carry no ordering of their own — ordering
//! is *not* lexical — so a [`PeriodCalendar`] fixes the chronological sequence
//! up front and resolves labels to positions in it. These types give a typed
//! alternative to ad-hoc `(&str, usize)` tuples when merging records or
//! walking the series in order.
//!
//! Typical usage:
//! ```
//! use replenish_engine::period::{Period, PeriodCalendar};
//!
//! let cal = PeriodCalendar::new(["Jan", "Feb", "Mar"]).unwrap();
//! assert_eq!(cal.index_of(&Period::from("Feb")), Some(1));
//! assert_eq!(cal.index_of(&Period::from("Oct")), None);
//! ```

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// An opaque, calendar-ordered label for one time slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    /// Create a period from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Period {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Period {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// The engine's total order over period labels.
///
/// Fixed at store construction; a label outside the calendar cannot be
/// resolved and is rejected at the ingestion boundary.
#[derive(Debug, Clone)]
pub struct PeriodCalendar {
    order: IndexSet<Period>,
}

impl PeriodCalendar {
    /// Build a calendar from labels in chronological order.
    ///
    /// Duplicate labels would make the ordering ambiguous and are rejected
    /// with [`Error::InvalidParameter`].
    pub fn new<I, P>(labels: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = P>,
        P: Into<Period>,
    {
        let mut order = IndexSet::new();
        for label in labels {
            let period = label.into();
            if !order.insert(period.clone()) {
                return Err(Error::InvalidParameter {
                    name: "calendar",
                    value: format!("duplicate period label `{period}`"),
                });
            }
        }
        Ok(Self { order })
    }

    /// Chronological position of a period, or `None` if the label is unknown.
    pub fn index_of(&self, period: &Period) -> Option<usize> {
        self.order.get_index_of(period)
    }

    /// Number of periods in the calendar.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the calendar holds no periods.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The labels in chronological order.
    pub fn periods(&self) -> impl Iterator<Item = &Period> {
        self.order.iter()
    }
}
