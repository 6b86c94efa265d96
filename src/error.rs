//! Error taxonomy for the subnet calculations.
//!
//! Every calculation aborts on the first [`CalcError`] it detects and hands it
//! back to the caller unchanged. Nothing is retried or logged here.

/// Result alias used by all calculation entry points.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Reasons a calculation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Text is not four dot-separated decimal octets in 0..=255.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),
    /// Prefix length is not an integer in 0..=32.
    #[error("Invalid prefix length: {0}")]
    InvalidPrefix(String),
    /// Subnet mask text is not a dotted-decimal address.
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),
    /// Subnet mask has a 0 bit followed by a 1 bit.
    #[error("Subnet mask is not contiguous: {0}")]
    NonContiguousMask(String),
    /// Text is not in `address/prefix` form.
    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),
    /// Supernetting needs at least two blocks.
    #[error("Enter at least two subnets to calculate a supernet (got {0})")]
    TooFewBlocks(usize),
    /// Host requirement below 1, or requirements and labels do not pair up.
    #[error("Invalid host requirement: {0}")]
    InvalidHostRequirement(String),
    /// Base network cannot hold the requested hosts.
    #[error("Not enough address space: requested {requested} hosts, {available} available")]
    InsufficientAddressSpace { requested: u64, available: u64 },
}
