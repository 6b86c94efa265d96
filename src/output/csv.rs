//! CSV export of subnet results.

use crate::models::{SubnetResult, SupernetResult};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row, one column per exported field.
pub const CSV_HEADER: [&str; 8] = [
    "Label",
    "Network Address",
    "CIDR",
    "Subnet Mask",
    "First Host",
    "Last Host",
    "Broadcast",
    "Usable Hosts",
];

/// Quote a field only when it holds a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // excel does not like spaces after comma between fields
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// The fields of one result in [`CSV_HEADER`] order.
pub fn csv_row(result: &SubnetResult) -> Vec<String> {
    vec![
        result.label.clone().unwrap_or_default(),
        result.network.to_string(),
        result.cidr(),
        result.mask.to_string(),
        result.first_host.to_string(),
        result.last_host.to_string(),
        result.broadcast.to_string(),
        result.host_count.to_string(),
    ]
}

/// Write the header and one line per result.
pub fn write_csv<W: Write>(mut out: W, results: &[SubnetResult]) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", CSV_HEADER.join(","))?;
    for result in results {
        let line: Vec<String> = csv_row(result)
            .iter()
            .map(|field| escape_csv_field(field))
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

/// Write a supernet calculation as a header and a single row.
pub fn write_supernet_csv<W: Write>(
    mut out: W,
    result: &SupernetResult,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "CIDR,Network Address,Subnet Mask,First Host,Last Host")?;
    writeln!(
        out,
        "{},{},{},{},{}",
        result.cidr, result.network, result.mask, result.first_host, result.last_host
    )?;
    Ok(())
}

/// Write a list of blocks, one per line under a `CIDR` header.
pub fn write_cidr_list_csv<W: Write>(mut out: W, cidrs: &[String]) -> Result<(), Box<dyn Error>> {
    writeln!(out, "CIDR")?;
    for cidr in cidrs {
        writeln!(out, "{cidr}")?;
    }
    Ok(())
}

/// Write results to `vlsm_<date>.csv` inside `dir`, returning the file path.
pub fn export_csv(dir: &Path, results: &[SubnetResult]) -> Result<PathBuf, Box<dyn Error>> {
    let now = chrono::Local::now();
    let path = dir.join(format!("vlsm_{}.csv", now.format("%Y-%m-%d")));
    log::info!("Writing {} rows to {}", results.len(), path.display());

    let file = std::fs::File::create(&path)
        .map_err(|e| format!("Error creating CSV file {}: {e}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_csv(&mut writer, results)?;
    writer.flush()?;
    Ok(path)
}
