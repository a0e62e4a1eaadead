//! Pure computations. Nothing in here touches storage or the clock; callers
//! pass `today` and already-fetched rows.

pub mod calendar;
pub mod report;
pub mod scoring;
