//! Tells an Alexa user how many Bicing bikes are docked at the station nearest to their
//! registered address.
//!
//! The work is a three stage pipeline (geocode the address, pick the nearest station from the
//! `station_information` feed, read its counts from the `station_status` feed), wrapped in a
//! small request dispatcher that speaks the result back.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{
    device_address::AlexaDeviceAddressClient, gbfs::GbfsClient, geocoding::NominatimGeocoder,
};
pub use crate::app::skill::{BikeSkill, SkillRequest};
pub use crate::config::SkillConfig;
pub use crate::core::pipeline::AvailabilityPipeline;
pub use crate::utils::error::{BicingError, Result};
