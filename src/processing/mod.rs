//! Subnet calculations.
//!
//! - [`subnet`] - Describe the subnet an address belongs to
//! - [`vlsm`] - Variable Length Subnet Masking allocation
//! - [`supernet`] - Supernetting and CIDR aggregation

mod subnet;
mod supernet;
mod vlsm;

// Re-export public functions
pub use subnet::calculate_subnet;
pub use supernet::{aggregate_cidrs, calculate_supernet};
pub use vlsm::{available_hosts, calculate_vlsm, host_bits};
