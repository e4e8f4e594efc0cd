pub mod calendar;

pub use calendar::{epoch_millis, record_date, record_instant};
