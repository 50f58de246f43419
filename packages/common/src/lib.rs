pub mod availability;
pub mod config;
pub mod equipment;
pub mod error;
pub mod mtc;
mod nullable;
pub mod site;
pub mod well;

pub use availability::AvailabilityStatus;
pub use equipment::{Equipment, PRIMARY_EQUIPMENT_DESCRIPTION};
pub use error::FetchError;
pub use mtc::MtcRecord;
pub use site::{Site, UNKNOWN_SITE};
pub use well::Well;
