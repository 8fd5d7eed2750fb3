//! Forecast & replenishment recommendation engine.
//!
//! Holds an ordered per-period time series (actual demand, forecast demand,
//! derived order recommendation), merges externally parsed records into it,
//! and derives recommended order quantities for a configurable number of
//! weeks of coverage. Forecast values are supplied by the caller; this crate
//! performs no statistical forecasting of its own.
//!
//! All operations are synchronous, bounded, in-memory computations. A
//! concurrent host must serialize mutating calls ([`ingest::merge`],
//! [`recommend::recompute`]) against reads of the same store.

#![deny(missing_docs)]

pub mod category;
pub mod errors;
pub mod ingest;
pub mod period;
pub mod recommend;
pub mod series;
