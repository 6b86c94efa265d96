//! Domain models for the subnet calculator.
//!
//! - [`Ipv4Block`] and the address codec helpers - dotted-decimal parsing,
//!   masks and prefix lengths
//! - [`SubnetResult`], [`SupernetResult`] and [`MaskBits`] - calculation output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, common_prefix_len, cut_addr, dotted_binary, format_address, mask_for,
    parse_address, parse_prefix, prefix_from_mask, resolve_prefix, Ipv4Block, MAX_LENGTH,
};
pub use subnet::{usable_hosts, MaskBits, SubnetResult, SupernetResult};
