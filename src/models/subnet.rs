//! Calculation result records.

use super::{dotted_binary, mask_for, Ipv4Block, MAX_LENGTH};
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Usable host range of a block as `(first, last, count)`.
///
/// A /32 is a single host, a /31 is a point-to-point pair where both
/// addresses are usable. Neither reports a host count. Anything larger gives
/// up its network and broadcast addresses.
pub fn usable_hosts(network: Ipv4Addr, broadcast: Ipv4Addr, prefix: u8) -> (Ipv4Addr, Ipv4Addr, u64) {
    let net = u32::from(network);
    let bcast = u32::from(broadcast);
    match prefix {
        p if p >= MAX_LENGTH => (network, network, 0),
        p if p == MAX_LENGTH - 1 => (network, broadcast, 0),
        _ => (
            Ipv4Addr::from(net.wrapping_add(1)),
            Ipv4Addr::from(bcast.wrapping_sub(1)),
            u64::from(bcast - net) - 1,
        ),
    }
}

/// Description of one subnet as produced by the subnet and VLSM calculators.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Caller supplied label (VLSM only).
    pub label: Option<String>,
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// Usable hosts, 0 for /31 and /32.
    pub host_count: u64,
    /// Mask as 32 bits in dotted groups of eight.
    pub binary_mask: String,
}

impl SubnetResult {
    /// Build the record for the block spanning `network..=broadcast`.
    pub fn new(
        network: Ipv4Addr,
        broadcast: Ipv4Addr,
        prefix: u8,
        label: Option<String>,
    ) -> Result<SubnetResult> {
        let mask = Ipv4Addr::from(mask_for(prefix)?);
        let (first_host, last_host, host_count) = usable_hosts(network, broadcast, prefix);
        Ok(SubnetResult {
            label,
            network,
            prefix,
            mask,
            wildcard: Ipv4Addr::from(!u32::from(mask)),
            broadcast,
            first_host,
            last_host,
            host_count,
            binary_mask: dotted_binary(u32::from(mask)),
        })
    }

    /// CIDR suffix as shown next to the network, e.g. `/24`.
    pub fn cidr(&self) -> String {
        format!("/{}", self.prefix)
    }

    /// Network/host split of the mask bits.
    pub fn mask_bits(&self) -> MaskBits {
        MaskBits::new(u32::from(self.mask))
    }
}

impl fmt::Display for SubnetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.network, self.cidr())
    }
}

/// The network portion (mask bits as-is) and host portion (the complement)
/// of a mask, each as dotted binary.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MaskBits {
    pub network_portion: String,
    pub host_portion: String,
}

impl MaskBits {
    pub fn new(mask: u32) -> MaskBits {
        MaskBits {
            network_portion: dotted_binary(mask),
            host_portion: dotted_binary(!mask),
        }
    }
}

/// The single block covering a set of input blocks.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SupernetResult {
    pub cidr: Ipv4Block,
    pub network: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
}

impl From<Ipv4Block> for SupernetResult {
    fn from(block: Ipv4Block) -> Self {
        let (first_host, last_host, _) =
            usable_hosts(block.network(), block.broadcast(), block.prefix());
        SupernetResult {
            cidr: block,
            network: block.network(),
            mask: block.mask(),
            first_host,
            last_host,
        }
    }
}

impl fmt::Display for SupernetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cidr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_usable_hosts() {
        let net = Ipv4Addr::new(192, 168, 1, 0);
        let bcast = Ipv4Addr::new(192, 168, 1, 255);
        assert_eq!(
            usable_hosts(net, bcast, 24),
            (Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 254), 254)
        );

        let net = Ipv4Addr::new(10, 0, 0, 0);
        let bcast = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(usable_hosts(net, bcast, 31), (net, bcast, 0));

        let host = Ipv4Addr::new(10, 0, 0, 5);
        assert_eq!(usable_hosts(host, host, 32), (host, host, 0));

        let bcast = Ipv4Addr::new(10, 0, 0, 3);
        assert_eq!(
            usable_hosts(net, bcast, 30),
            (Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2), 2)
        );
    }

    #[test]
    fn test_subnet_result_new() {
        let result = SubnetResult::new(
            Ipv4Addr::new(172, 16, 0, 0),
            Ipv4Addr::new(172, 16, 15, 255),
            20,
            Some("lab".to_string()),
        )
        .unwrap();
        assert_eq!(result.mask, Ipv4Addr::new(255, 255, 240, 0));
        assert_eq!(result.wildcard, Ipv4Addr::new(0, 0, 15, 255));
        assert_eq!(result.host_count, 4094);
        assert_eq!(result.binary_mask, "11111111.11111111.11110000.00000000");
        assert_eq!(result.cidr(), "/20");
        assert_eq!(result.to_string(), "172.16.0.0/20");
    }

    #[test]
    fn test_subnet_result_rejects_bad_prefix() {
        let net = Ipv4Addr::new(10, 0, 0, 0);
        assert_eq!(
            SubnetResult::new(net, net, 33, None),
            Err(CalcError::InvalidPrefix("33".to_string()))
        );
    }

    #[test]
    fn test_mask_bits() {
        let bits = MaskBits::new(0xFFFFFF00);
        assert_eq!(bits.network_portion, "11111111.11111111.11111111.00000000");
        assert_eq!(bits.host_portion, "00000000.00000000.00000000.11111111");
    }

    #[test]
    fn test_supernet_result_from_block() {
        let block: Ipv4Block = "10.0.0.0/22".parse().unwrap();
        let result = SupernetResult::from(block);
        assert_eq!(result.network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(result.mask, Ipv4Addr::new(255, 255, 252, 0));
        assert_eq!(result.first_host, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(result.last_host, Ipv4Addr::new(10, 0, 3, 254));
        assert_eq!(result.to_string(), "10.0.0.0/22");
    }
}
