//! Daily calorie tracking with goals computed from recent history.

pub mod calendar;
pub mod cli;
pub mod entry;
pub mod error;
pub mod goal;
pub mod logging;
pub mod store;
