//! Command line arguments and command dispatch.

use crate::config::{Config, OutputFormat};
use crate::output::{
    export_csv, render_aggregate, render_json, render_subnet, render_supernet, render_vlsm,
    write_cidr_list_csv, write_csv, write_supernet_csv,
};
use crate::processing::{aggregate_cidrs, calculate_subnet, calculate_supernet, calculate_vlsm};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version, about = "IPv4 subnet, VLSM and supernet calculator")]
pub struct Cli {
    /// Output format, overrides SUBNET_CALC_FORMAT
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe the subnet an address belongs to
    Subnet {
        /// Any address inside the subnet
        address: String,
        /// Prefix such as /24, or a mask such as 255.255.255.0
        cidr_or_mask: String,
        /// Also show the network and host portions of the mask
        #[arg(short, long)]
        split: bool,
    },
    /// Allocate subnets for a list of host requirements, biggest first
    Vlsm {
        /// Base address, optionally with its prefix (10.0.0.0/24)
        base: String,
        /// Prefix or mask of the base network
        #[arg(short, long)]
        mask: Option<String>,
        /// Usable hosts per subnet, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        hosts: Vec<u32>,
        /// One label per subnet, comma separated (default "Subnet N")
        #[arg(long, value_delimiter = ',')]
        labels: Vec<String>,
        /// Also write the allocation to a dated CSV file
        #[arg(short, long)]
        export: bool,
    },
    /// Smallest single block covering all given blocks
    Supernet {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
    /// Merge sibling blocks into their parents
    Aggregate {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
}

/// Split `a.b.c.d/n` into the address and `/n`; plain addresses pass through.
fn split_base(base: &str) -> (&str, Option<String>) {
    match base.split_once('/') {
        Some((addr, prefix)) => (addr, Some(format!("/{prefix}"))),
        None => (base, None),
    }
}

fn default_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Subnet {i}")).collect()
}

/// Run one command and return what should be printed to stdout.
pub fn execute(cli: &Cli, config: &Config) -> Result<String, Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.format);
    let mut buf = Vec::new();

    match &cli.command {
        Command::Subnet {
            address,
            cidr_or_mask,
            split,
        } => {
            let result = calculate_subnet(address, cidr_or_mask)?;
            match format {
                OutputFormat::Table => return Ok(render_subnet(&result, *split)),
                OutputFormat::Json => return render_json(&result),
                OutputFormat::Csv => write_csv(&mut buf, std::slice::from_ref(&result))?,
            }
        }
        Command::Vlsm {
            base,
            mask,
            hosts,
            labels,
            export,
        } => {
            let (base_addr, base_prefix) = split_base(base);
            let base_mask = mask.clone().or(base_prefix);
            let labels = if labels.is_empty() {
                default_labels(hosts.len())
            } else {
                labels.clone()
            };
            let results = calculate_vlsm(base_addr, base_mask.as_deref(), hosts, labels.as_slice())?;
            if *export {
                let path = export_csv(&config.export_dir, &results)?;
                log::info!("Exported VLSM allocation to {}", path.display());
            }
            match format {
                OutputFormat::Table => return Ok(render_vlsm(&results)),
                OutputFormat::Json => return render_json(&results),
                OutputFormat::Csv => write_csv(&mut buf, &results)?,
            }
        }
        Command::Supernet { cidrs } => {
            let result = calculate_supernet(cidrs.as_slice())?;
            match format {
                OutputFormat::Table => return Ok(render_supernet(&result)),
                OutputFormat::Json => return render_json(&result),
                OutputFormat::Csv => write_supernet_csv(&mut buf, &result)?,
            }
        }
        Command::Aggregate { cidrs } => {
            let merged = aggregate_cidrs(cidrs.as_slice())?;
            match format {
                OutputFormat::Table => return Ok(render_aggregate(&merged)),
                OutputFormat::Json => return render_json(&merged),
                OutputFormat::Csv => write_cidr_list_csv(&mut buf, &merged)?,
            }
        }
    }

    Ok(String::from_utf8(buf)?)
}
