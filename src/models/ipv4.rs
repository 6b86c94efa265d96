//! IPv4 address and CIDR notation utilities.
//!
//! Converts between dotted-decimal text and the 32-bit integer form, derives
//! masks from prefix lengths (and back), and provides [`Ipv4Block`], the
//! normalized `(network, prefix)` pair every calculation works on.

use crate::error::{CalcError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Parse exactly four dot-separated decimal octets.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_address;
/// assert_eq!(u32::from(parse_address("10.0.0.1").unwrap()), 0x0A000001);
/// assert!(parse_address("10.0.0.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let text = text.trim();
    let caps = DOTTED_QUAD
        .captures(text)
        .ok_or_else(|| CalcError::InvalidAddress(text.to_string()))?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1]
            .parse()
            .map_err(|_| CalcError::InvalidAddress(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Dotted-decimal form, four octets, no leading zeros.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::mask_for;
/// assert_eq!(mask_for(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_for(0).unwrap(), 0);
/// ```
pub fn mask_for(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(CalcError::InvalidPrefix(len.to_string()));
    }
    Ok(prefix_mask(len))
}

/// Mask bits for a prefix already known to be at most 32.
fn prefix_mask(len: u8) -> u32 {
    // Shift in u64 so that /0 does not shift a u32 by 32.
    let right_len = MAX_LENGTH - len;
    ((u32::MAX as u64 >> right_len) << right_len) as u32
}

/// Count the leading 1-bits of a mask, rejecting non-contiguous masks.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Result<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() < u32::from(MAX_LENGTH) {
        return Err(CalcError::NonContiguousMask(mask.to_string()));
    }
    Ok(ones as u8)
}

/// Parse `/N` (or bare `N`) into a prefix length in 0..=32.
pub fn parse_prefix(text: &str) -> Result<u8> {
    let text = text.trim();
    let digits = text.strip_prefix('/').unwrap_or(text);
    let prefix: u8 = digits
        .parse()
        .map_err(|_| CalcError::InvalidPrefix(text.to_string()))?;
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefix(text.to_string()));
    }
    Ok(prefix)
}

/// Resolve a prefix from either `/N` text or a dotted-decimal subnet mask.
pub fn resolve_prefix(cidr_or_mask: &str) -> Result<u8> {
    let text = cidr_or_mask.trim();
    if text.starts_with('/') {
        return parse_prefix(text);
    }
    let mask = parse_address(text).map_err(|_| CalcError::InvalidMask(text.to_string()))?;
    prefix_from_mask(mask)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(u32::from(addr) & mask_for(len)?))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = mask_for(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of leading bits on which two addresses agree.
pub fn common_prefix_len(a: Ipv4Addr, b: Ipv4Addr) -> u8 {
    (u32::from(a) ^ u32::from(b)).leading_zeros() as u8
}

/// Render 32 bits as four dot-separated groups of eight.
///
/// # Examples
/// ```
/// use subnet_calc::models::dotted_binary;
/// assert_eq!(dotted_binary(0xFFFFFF00), "11111111.11111111.11111111.00000000");
/// ```
pub fn dotted_binary(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// A normalized IPv4 block: the network address always has its host bits
/// cleared for the given prefix.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Block {
    network: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Block {
    /// Build a block from any address inside it, clearing the host bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Block> {
        Ok(Ipv4Block {
            network: cut_addr(addr, prefix)?,
            prefix,
        })
    }

    /// Parse `a.b.c.d/n`, keeping the address exactly as written.
    ///
    /// Used where the raw address matters (supernetting). Use
    /// [`Ipv4Block::from_str`] for the normalized block.
    pub fn parse_raw(cidr: &str) -> Result<(Ipv4Addr, u8)> {
        let cidr = cidr.trim();
        let (addr, prefix) = cidr
            .split_once('/')
            .ok_or_else(|| CalcError::InvalidCidr(cidr.to_string()))?;
        let addr = parse_address(addr).map_err(|_| CalcError::InvalidCidr(cidr.to_string()))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| CalcError::InvalidCidr(cidr.to_string()))?;
        if prefix > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(cidr.to_string()));
        }
        Ok((addr, prefix))
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask of this block.
    pub fn mask(&self) -> Ipv4Addr {
        // prefix is at most 32, every constructor goes through cut_addr
        Ipv4Addr::from(prefix_mask(self.prefix))
    }

    /// Highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network) | !u32::from(self.mask()))
    }

    /// The enclosing block one bit shorter, `None` for /0.
    pub fn parent(&self) -> Option<Ipv4Block> {
        let prefix = self.prefix.checked_sub(1)?;
        Ipv4Block::new(self.network, prefix).ok()
    }
}

impl FromStr for Ipv4Block {
    type Err = CalcError;

    /// Parse `a.b.c.d/n` and normalize the address to the block's network.
    fn from_str(cidr: &str) -> Result<Ipv4Block> {
        let (addr, prefix) = Ipv4Block::parse_raw(cidr)?;
        Ipv4Block::new(addr, prefix)
    }
}

impl fmt::Display for Ipv4Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl Serialize for Ipv4Block {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(
            parse_address(" 0.0.0.0 ").unwrap(),
            Ipv4Addr::new(0, 0, 0, 0)
        );
        for bad in ["", "10.0.0", "10.0.0.0.1", "10.0.0.256", "a.b.c.d", "10.0.0.-1", "1000.0.0.1"] {
            assert_eq!(
                parse_address(bad),
                Err(CalcError::InvalidAddress(bad.trim().to_string())),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_format_address_round_trip() {
        for text in ["0.0.0.0", "10.0.0.1", "172.16.254.3", "255.255.255.255"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }

    #[test]
    fn test_mask_for() {
        assert_eq!(mask_for(0).unwrap(), 0x00000000);
        assert_eq!(mask_for(8).unwrap(), 0xFF000000);
        assert_eq!(mask_for(16).unwrap(), 0xFFFF0000);
        assert_eq!(mask_for(24).unwrap(), 0xFFFFFF00);
        assert_eq!(mask_for(32).unwrap(), 0xFFFFFFFF);
        assert!(mask_for(33).is_err());
        for p in 0..=32u8 {
            let mask = mask_for(p).unwrap();
            assert_eq!(mask.leading_ones(), u32::from(p), "/{p}");
            assert_eq!(mask.count_zeros(), 32 - u32::from(p), "/{p}");
        }
    }

    #[test]
    fn test_prefix_from_mask() {
        assert_eq!(prefix_from_mask(Ipv4Addr::new(255, 255, 255, 0)).unwrap(), 24);
        assert_eq!(prefix_from_mask(Ipv4Addr::new(0, 0, 0, 0)).unwrap(), 0);
        assert_eq!(prefix_from_mask(Ipv4Addr::new(255, 255, 255, 255)).unwrap(), 32);
        assert_eq!(prefix_from_mask(Ipv4Addr::new(255, 255, 255, 252)).unwrap(), 30);
        assert_eq!(
            prefix_from_mask(Ipv4Addr::new(255, 255, 0, 255)),
            Err(CalcError::NonContiguousMask("255.255.0.255".to_string()))
        );
        assert!(prefix_from_mask(Ipv4Addr::new(0, 0, 0, 1)).is_err());
    }

    #[test]
    fn test_resolve_prefix() {
        assert_eq!(resolve_prefix("/24").unwrap(), 24);
        assert_eq!(resolve_prefix("/0").unwrap(), 0);
        assert_eq!(resolve_prefix("255.255.240.0").unwrap(), 20);
        assert!(matches!(resolve_prefix("/33"), Err(CalcError::InvalidPrefix(_))));
        assert!(matches!(resolve_prefix("/x"), Err(CalcError::InvalidPrefix(_))));
        assert!(matches!(resolve_prefix("255.255.0"), Err(CalcError::InvalidMask(_))));
        assert!(matches!(
            resolve_prefix("255.0.255.0"),
            Err(CalcError::NonContiguousMask(_))
        ));
    }

    #[test]
    fn test_cut_and_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(
            common_prefix_len(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 0, 3, 0)),
            22
        );
        let ip = Ipv4Addr::new(10, 1, 2, 3);
        assert_eq!(common_prefix_len(ip, ip), 32);
        assert_eq!(
            common_prefix_len(Ipv4Addr::new(0, 0, 0, 0), Ipv4Addr::new(128, 0, 0, 0)),
            0
        );
    }

    #[test]
    fn test_dotted_binary() {
        assert_eq!(dotted_binary(0), "00000000.00000000.00000000.00000000");
        assert_eq!(dotted_binary(0xFFFFFFC0), "11111111.11111111.11111111.11000000");
    }

    #[test]
    fn test_block_from_str_normalizes() {
        let block: Ipv4Block = "10.2.3.4/16".parse().unwrap();
        assert_eq!(block.network(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(block.prefix(), 16);
        assert_eq!(block.to_string(), "10.2.0.0/16");
        assert_eq!(block.broadcast(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(block.mask(), Ipv4Addr::new(255, 255, 0, 0));
    }

    #[test]
    fn test_block_parse_errors() {
        assert!(matches!("10.0.0.0".parse::<Ipv4Block>(), Err(CalcError::InvalidCidr(_))));
        assert!(matches!("10.0.0/8".parse::<Ipv4Block>(), Err(CalcError::InvalidCidr(_))));
        assert!(matches!("10.0.0.0/x".parse::<Ipv4Block>(), Err(CalcError::InvalidCidr(_))));
        assert!(matches!("10.0.0.0/33".parse::<Ipv4Block>(), Err(CalcError::InvalidPrefix(_))));
    }

    #[test]
    fn test_block_parent() {
        let block: Ipv4Block = "10.1.1.16/28".parse().unwrap();
        assert_eq!(block.parent().unwrap().to_string(), "10.1.1.0/27");
        let all: Ipv4Block = "0.0.0.0/0".parse().unwrap();
        assert_eq!(all.mask(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(all.broadcast(), Ipv4Addr::new(255, 255, 255, 255));
        assert!(all.parent().is_none());
    }

    #[test]
    fn test_block_ordering() {
        let ip1: Ipv4Block = "10.0.0.0/8".parse().unwrap();
        let ip2: Ipv4Block = "10.0.0.0/24".parse().unwrap();
        let ip3: Ipv4Block = "10.0.10.0/24".parse().unwrap();
        assert!(ip1 < ip2);
        assert!(ip2 < ip3);
    }

    #[test]
    fn test_block_serde() {
        let block: Ipv4Block = "192.168.0.0/23".parse().unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, "\"192.168.0.0/23\"");
    }
}
