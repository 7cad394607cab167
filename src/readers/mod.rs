pub mod payload_reader;

pub use payload_reader::{canonical_pollutant_name, PayloadReader};
