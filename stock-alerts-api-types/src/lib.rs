mod alerts;
mod monitored;

pub mod events;
pub mod lenient;
pub mod requests;

pub use alerts::{AlertRecord, MovingAverage, MovingAverages, PeriodAlertRecord};
pub use monitored::MonitoredStock;
