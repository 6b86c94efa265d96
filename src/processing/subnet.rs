//! Single subnet calculation.

use crate::error::Result;
use crate::models::{broadcast_addr, cut_addr, parse_address, resolve_prefix, SubnetResult};

/// Describe the subnet containing `address`.
///
/// # Arguments
/// * `address` - Any dotted-decimal address inside the subnet
/// * `cidr_or_mask` - Either `/N` or a dotted-decimal mask such as `255.255.255.0`
///
/// # Examples
/// ```
/// use subnet_calc::calculate_subnet;
/// let result = calculate_subnet("192.168.1.10", "/24").unwrap();
/// assert_eq!(result.network.to_string(), "192.168.1.0");
/// assert_eq!(result.host_count, 254);
/// ```
pub fn calculate_subnet(address: &str, cidr_or_mask: &str) -> Result<SubnetResult> {
    let addr = parse_address(address)?;
    let prefix = resolve_prefix(cidr_or_mask)?;

    let network = cut_addr(addr, prefix)?;
    let broadcast = broadcast_addr(addr, prefix)?;
    log::debug!("calculate_subnet({addr}, /{prefix}) network={network} broadcast={broadcast}");

    SubnetResult::new(network, broadcast, prefix, None)
}
