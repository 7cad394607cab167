pub mod api_ninjas;

pub use api_ninjas::{resolve_api_key, AirQualityClient};
