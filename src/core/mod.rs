pub mod finder;
pub mod lookup;
pub mod pipeline;
pub mod resolver;

pub use crate::domain::model::{
    Address, AvailabilityCount, Coordinates, StationAvailability, StationDistance, StationRecord,
    StationStatus,
};
pub use crate::domain::ports::{DeviceAddressProvider, Geocoder, StationFeed};
pub use crate::utils::error::Result;
