//! Supernetting and CIDR aggregation.
//!
//! - [`calculate_supernet`] finds the one smallest block covering every input
//!   address
//! - [`aggregate_cidrs`] merges sibling blocks into their parents, pairwise

use crate::error::{CalcError, Result};
use crate::models::{common_prefix_len, Ipv4Block, SupernetResult};
use itertools::Itertools;

/// Find the smallest block containing the network address of every input.
///
/// Only the addresses take part; the input prefixes are validated but do not
/// widen the result.
///
/// # Examples
/// ```
/// use subnet_calc::calculate_supernet;
/// let result = calculate_supernet(&["10.0.0.0/24", "10.0.3.0/24"]).unwrap();
/// assert_eq!(result.cidr.to_string(), "10.0.0.0/22");
/// ```
pub fn calculate_supernet<S: AsRef<str>>(cidrs: &[S]) -> Result<SupernetResult> {
    if cidrs.len() < 2 {
        return Err(CalcError::TooFewBlocks(cidrs.len()));
    }

    let addrs = cidrs
        .iter()
        .map(|cidr| {
            Ipv4Block::parse_raw(cidr.as_ref())
                .map(|(addr, _)| addr)
                .map_err(|e| match e {
                    CalcError::InvalidPrefix(text) => CalcError::InvalidCidr(text),
                    e => e,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let (first, last) = match addrs.iter().minmax().into_option() {
        Some((first, last)) => (*first, *last),
        None => return Err(CalcError::TooFewBlocks(0)),
    };
    let prefix = common_prefix_len(first, last);
    let block = Ipv4Block::new(first, prefix)?;
    log::debug!("calculate_supernet() first={first} last={last} -> {block}");

    Ok(SupernetResult::from(block))
}

/// Merge two blocks of the same size that share a parent block. Two copies
/// of one block qualify as well.
fn merge_siblings(a: Ipv4Block, b: Ipv4Block) -> Option<Ipv4Block> {
    if a.prefix() != b.prefix() {
        return None;
    }
    let parent = a.parent()?;
    if b.parent()? == parent {
        Some(parent)
    } else {
        None
    }
}

/// Aggregate CIDR blocks by repeatedly merging adjacent sibling pairs.
///
/// Each input is normalized to its network address first. Blocks are then
/// pushed in (address, prefix) order onto a stack, merging the top two
/// entries while they are siblings. Overlapping blocks of different sizes
/// are left as they are.
///
/// The result is sorted as text, so `10.0.0.0/8` sorts before `9.0.0.0/8`.
///
/// # Examples
/// ```
/// use subnet_calc::aggregate_cidrs;
/// let merged = aggregate_cidrs(&["192.168.0.0/25", "192.168.0.128/25"]).unwrap();
/// assert_eq!(merged, vec!["192.168.0.0/24"]);
/// ```
pub fn aggregate_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<String>> {
    let blocks = cidrs
        .iter()
        .map(|cidr| cidr.as_ref().parse::<Ipv4Block>())
        .collect::<Result<Vec<_>>>()?;

    let mut stack: Vec<Ipv4Block> = Vec::with_capacity(blocks.len());
    for block in blocks.into_iter().sorted() {
        stack.push(block);
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            match merge_siblings(below, top) {
                Some(parent) => {
                    log::trace!("aggregate_cidrs() {below} + {top} -> {parent}");
                    stack.truncate(stack.len() - 2);
                    stack.push(parent);
                }
                None => break,
            }
        }
    }

    Ok(stack.iter().map(|block| block.to_string()).sorted().collect())
}
