pub mod aqi;
pub mod category;
pub mod reading;

pub use aqi::{AqiResult, AqiSource};
pub use category::AqiCategory;
pub use reading::{PollutantReading, ReadingSet};
