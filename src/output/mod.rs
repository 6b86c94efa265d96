//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV export of subnet results
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::{
    csv_row, escape_csv_field, export_csv, write_cidr_list_csv, write_csv, write_supernet_csv,
    CSV_HEADER,
};
pub use json::render_json;
pub use terminal::{format_field, render_aggregate, render_subnet, render_supernet, render_vlsm};
