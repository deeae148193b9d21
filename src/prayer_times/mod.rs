pub mod calculator;
pub mod import;

pub use calculator::{TimetableCalculator, CALC_METHODS};
pub use import::import_month;
