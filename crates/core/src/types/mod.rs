//! Core types for Infra as Design.

pub mod provisioning;
pub mod region;

pub use provisioning::ProvisioningResult;
pub use region::{AwsRegion, RegionError};
