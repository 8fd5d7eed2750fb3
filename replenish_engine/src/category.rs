//! Category volume summaries with period-over-period trend classification.

use serde::{Deserialize, Serialize};

/// One category's volume for the current and previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique category name.
    pub name: String,
    /// Volume for the current period (non-negative).
    pub volume: f64,
    /// Volume for the previous period; absent for newly seen categories.
    pub previous_volume: Option<f64>,
}

/// Direction of a category's period-over-period volume change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Volume grew.
    Up,
    /// Volume shrank.
    Down,
    /// No change, or no previous period to compare against.
    Flat,
}

/// Derived summary for one category. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Category name, carried through from the record.
    pub name: String,
    /// Current-period volume, carried through from the record.
    pub volume: f64,
    /// Signed percent change vs. the previous period, rounded to 1 decimal.
    pub trend_percent: f64,
    /// Classification of the (rounded) percent change.
    pub direction: TrendDirection,
}

/// Summarize category records in input order. Pure; no side effects.
///
/// An absent or zero `previous_volume` yields `Flat` with a zero trend — a
/// defined edge case, not an error. The direction is decided by the sign of
/// the *rounded* percentage, so a +0.04% change classifies as `Flat`.
pub fn summarize<I>(records: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = CategoryRecord>,
{
    records
        .into_iter()
        .map(|record| {
            let trend_percent = match record.previous_volume {
                None => 0.0,
                Some(prev) if prev == 0.0 => 0.0,
                Some(prev) => round1((record.volume - prev) / prev * 100.0),
            };
            let direction = if trend_percent > 0.0 {
                TrendDirection::Up
            } else if trend_percent < 0.0 {
                TrendDirection::Down
            } else {
                TrendDirection::Flat
            };
            CategorySummary {
                name: record.name,
                volume: record.volume,
                trend_percent,
                direction,
            }
        })
        .collect()
}

/// Round to 1 decimal place, ties away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, volume: f64, previous: Option<f64>) -> CategoryRecord {
        CategoryRecord {
            name: name.to_string(),
            volume,
            previous_volume: previous,
        }
    }

    #[test]
    fn growth_is_classified_up() {
        // (8500 - 7589) / 7589 * 100 ≈ 12.0042 → 12.0
        let out = summarize([record("Электроника", 8500.0, Some(7589.0))]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].trend_percent, 12.0);
        assert_eq!(out[0].direction, TrendDirection::Up);
    }

    #[test]
    fn decline_is_classified_down() {
        let out = summarize([record("apparel", 4100.0, Some(4227.0))]);
        assert_eq!(out[0].trend_percent, -3.0);
        assert_eq!(out[0].direction, TrendDirection::Down);
    }

    #[test]
    fn absent_previous_volume_is_flat() {
        let out = summarize([record("new-category", 500.0, None)]);
        assert_eq!(out[0].trend_percent, 0.0);
        assert_eq!(out[0].direction, TrendDirection::Flat);
    }

    #[test]
    fn zero_previous_volume_is_flat_not_an_error() {
        let out = summarize([record("dormant", 500.0, Some(0.0))]);
        assert_eq!(out[0].trend_percent, 0.0);
        assert_eq!(out[0].direction, TrendDirection::Flat);
    }

    #[test]
    fn direction_follows_the_rounded_percentage() {
        // +0.04% rounds to 0.0 → Flat, not Up.
        let out = summarize([record("steady", 10004.0, Some(10000.0))]);
        assert_eq!(out[0].trend_percent, 0.0);
        assert_eq!(out[0].direction, TrendDirection::Flat);
    }

    #[test]
    fn output_preserves_input_order() {
        let out = summarize([
            record("b", 1.0, None),
            record("a", 2.0, None),
            record("c", 3.0, None),
        ]);
        let names: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn summary_serializes_direction_snake_case() {
        let out = summarize([record("Электроника", 8500.0, Some(7589.0))]);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["direction"], "up");
        assert_eq!(json["trend_percent"], 12.0);
    }
}
