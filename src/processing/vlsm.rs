//! Variable Length Subnet Masking allocation.
//!
//! Requirements are packed biggest first from the base address, each one into
//! the smallest block that holds it. Results come back in the caller's order.

use crate::error::{CalcError, Result};
use crate::models::{parse_address, resolve_prefix, SubnetResult, MAX_LENGTH};
use itertools::Itertools;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// One host requirement together with where it came from.
#[derive(Debug)]
struct Requirement<'a> {
    index: usize,
    hosts: u32,
    label: &'a str,
}

/// Usable addresses in a base network of the given prefix.
pub fn available_hosts(prefix: u8) -> u64 {
    if prefix >= MAX_LENGTH - 1 {
        0
    } else {
        (1u64 << (MAX_LENGTH - prefix)) - 2
    }
}

/// Smallest number of host bits whose block has at least `hosts` usable
/// addresses, `None` if not even a /0 is large enough.
pub fn host_bits(hosts: u32) -> Option<u8> {
    let needed = u64::from(hosts) + 2;
    (0..=MAX_LENGTH).find(|bits| (1u64 << bits) >= needed)
}

/// Allocate one subnet per host requirement out of `base`.
///
/// # Arguments
/// * `base` - Dotted-decimal address the first block starts at
/// * `base_cidr_or_mask` - Prefix (`/N`) or mask of the base network; when
///   given, the total requirement is checked against its capacity
/// * `host_requirements` - Usable hosts needed per subnet, each at least 1
/// * `labels` - One label per requirement, same order
///
/// # Returns
/// One [`SubnetResult`] per requirement, in the order the requirements were
/// given.
pub fn calculate_vlsm<S: AsRef<str>>(
    base: &str,
    base_cidr_or_mask: Option<&str>,
    host_requirements: &[u32],
    labels: &[S],
) -> Result<Vec<SubnetResult>> {
    let base_addr = parse_address(base)?;
    let base_prefix = base_cidr_or_mask.map(resolve_prefix).transpose()?;

    if labels.len() != host_requirements.len() {
        return Err(CalcError::InvalidHostRequirement(format!(
            "{} host requirements but {} labels",
            host_requirements.len(),
            labels.len()
        )));
    }

    let requirements: Vec<Requirement> = host_requirements
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (&hosts, label))| Requirement {
            index,
            hosts,
            label: label.as_ref(),
        })
        .collect();

    if let Some(bad) = requirements.iter().find(|r| r.hosts < 1) {
        return Err(CalcError::InvalidHostRequirement(format!(
            "{} needs {} hosts, at least 1 is required",
            bad.label, bad.hosts
        )));
    }

    if let Some(prefix) = base_prefix {
        let available = available_hosts(prefix);
        let requested: u64 = host_requirements.iter().map(|&h| u64::from(h)).sum();
        log::debug!("calculate_vlsm() base {base_addr}/{prefix} requested={requested} available={available}");
        if requested > available {
            return Err(CalcError::InsufficientAddressSpace {
                requested,
                available,
            });
        }
    }

    // Stable sort keeps equal requirements in input order.
    let sorted = requirements
        .into_iter()
        .sorted_by_key(|r| Reverse(r.hosts));

    let mut cursor = u64::from(u32::from(base_addr));
    let mut allocated = Vec::with_capacity(host_requirements.len());
    for req in sorted {
        let remaining = (u64::from(u32::MAX) + 1).saturating_sub(cursor);
        let bits = host_bits(req.hosts).ok_or(CalcError::InsufficientAddressSpace {
            requested: u64::from(req.hosts),
            available: remaining.saturating_sub(2),
        })?;
        let block_size = 1u64 << bits;
        if block_size > remaining {
            return Err(CalcError::InsufficientAddressSpace {
                requested: u64::from(req.hosts),
                available: remaining.saturating_sub(2),
            });
        }

        // Both fit in u32: block_size <= remaining.
        let network = Ipv4Addr::from(cursor as u32);
        let broadcast = Ipv4Addr::from((cursor + block_size - 1) as u32);
        let prefix = MAX_LENGTH - bits;
        log::trace!(
            "calculate_vlsm() {} ({} hosts) -> {network}/{prefix}",
            req.label,
            req.hosts
        );

        allocated.push((
            req.index,
            SubnetResult::new(network, broadcast, prefix, Some(req.label.to_string()))?,
        ));
        cursor += block_size;
    }

    Ok(allocated
        .into_iter()
        .sorted_by_key(|(index, _)| *index)
        .map(|(_, result)| result)
        .collect())
}
