//! Terminal output utilities.
//!
//! Renders results as aligned, quoted fields with colored headings.

use crate::models::{SubnetResult, SupernetResult};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn line(name: &str, value: impl ToString) -> String {
    format!("{:<18}{}\n", format!("{name}:"), value.to_string())
}

/// Render the full description of one subnet.
///
/// With `split` set, the network and host portions of the mask are shown as
/// well.
pub fn render_subnet(result: &SubnetResult, split: bool) -> String {
    let mut out = format!("{}\n", format!("Subnet {result}").bold());
    out += &line("Network Address", result.network);
    out += &line("Subnet Mask", result.mask);
    out += &line("Wildcard Mask", result.wildcard);
    out += &line("Broadcast", result.broadcast);
    out += &line("First Host", result.first_host);
    out += &line("Last Host", result.last_host);
    out += &line("Usable Hosts", result.host_count);
    out += &line("CIDR", result.cidr());
    out += &line("Binary Mask", &result.binary_mask);
    if split {
        let bits = result.mask_bits();
        out += &line("Network Portion", bits.network_portion.green());
        out += &line("Host Portion", bits.host_portion.yellow());
    }
    out
}

/// Render VLSM allocations as a table, one row per subnet.
pub fn render_vlsm(results: &[SubnetResult]) -> String {
    let header = [
        format_field("label", 12),
        format_field("network", 17),
        format_field("cidr", 6),
        format_field("mask", 17),
        format_field("first_host", 17),
        format_field("last_host", 17),
        format_field("broadcast", 17),
        format_field("hosts", 10),
    ]
    .join(",");
    let mut out = format!("{}\n", header.bold());
    for result in results {
        let row = [
            format_field(result.label.as_deref().unwrap_or(""), 12),
            format_field(result.network, 17),
            format_field(result.cidr(), 6),
            format_field(result.mask, 17),
            format_field(result.first_host, 17),
            format_field(result.last_host, 17),
            format_field(result.broadcast, 17),
            format_field(result.host_count, 10),
        ]
        .join(",");
        out += &row;
        out.push('\n');
    }
    out
}

/// Render the covering block of a supernet calculation.
pub fn render_supernet(result: &SupernetResult) -> String {
    let mut out = format!("{}\n", format!("Supernet {result}").bold());
    out += &line("Network Address", result.network);
    out += &line("Subnet Mask", result.mask);
    out += &line("First Host", result.first_host);
    out += &line("Last Host", result.last_host);
    out
}

/// Render aggregated blocks, one per line.
pub fn render_aggregate(cidrs: &[String]) -> String {
    let mut out = format!("{}\n", format!("Aggregated {} block(s)", cidrs.len()).bold());
    for cidr in cidrs {
        out += cidr;
        out.push('\n');
    }
    out
}
