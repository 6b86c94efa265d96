//! IPv4 address-block arithmetic.
//!
//! Parses CIDR notation and subnet masks, describes subnets, allocates VLSM
//! subnets and aggregates blocks into supernets. Every calculation is a pure
//! function of its inputs.
//!
//! - [`models`] - address codec, [`models::Ipv4Block`] and the result records
//! - [`processing`] - the subnet, VLSM, supernet and aggregation calculations
//! - [`output`] - CSV, JSON and terminal rendering of results

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CalcError;
pub use models::{Ipv4Block, SubnetResult, SupernetResult};
pub use processing::{aggregate_cidrs, calculate_subnet, calculate_supernet, calculate_vlsm};
