//! JSON output of calculation results.

use serde::Serialize;
use std::error::Error;

/// Pretty-print any result as JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4Block, SupernetResult};

    #[test]
    fn test_render_supernet_json() {
        let block: Ipv4Block = "10.0.0.0/22".parse().unwrap();
        let json = render_json(&SupernetResult::from(block)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.0/22");
        assert_eq!(value["mask"], "255.255.252.0");
        assert_eq!(value["last_host"], "10.0.3.254");
    }

    #[test]
    fn test_render_list_json() {
        let cidrs = vec!["10.0.0.0/24".to_string()];
        let json = render_json(&cidrs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0], "10.0.0.0/24");
    }
}
