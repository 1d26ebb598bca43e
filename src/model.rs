//! Output contract handed to the project/device persistence API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status stamped on every imported device.
pub const INSTALLED: &str = "installed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedPort {
    pub port_number: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDevice {
    pub name: String,
    pub category: String,
    pub device_type: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub ip_address: String,
    pub mac_address: String,
    pub username: String,
    pub password: String,
    pub location: String,
    pub firmware_version: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_ports: Option<Vec<ManagedPort>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdu_port_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdu_port_count: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    pub project_name: String,
    pub wifi_networks: Vec<WifiNetwork>,
    pub devices: Vec<ExternalDevice>,
}

impl ParsedReport {
    pub fn device_count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for device in &self.devices {
            *counts.entry(device.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_omitted() {
        let device = ExternalDevice {
            name: "Camera01".into(),
            category: "security".into(),
            device_type: "camera".into(),
            status: INSTALLED.into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["deviceType"], "camera");
        assert_eq!(json["serialNumber"], "");
        assert!(json.get("managedPorts").is_none());
        assert!(json.get("panelType").is_none());
        assert!(json.get("pduPortCount").is_none());
    }

    #[test]
    fn report_uses_camel_case() {
        let report = ParsedReport {
            project_name: "Smith Residence".into(),
            wifi_networks: vec![WifiNetwork {
                ssid: "HomeNet".into(),
                password: String::new(),
            }],
            devices: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["projectName"], "Smith Residence");
        assert_eq!(json["wifiNetworks"][0]["ssid"], "HomeNet");
    }

    #[test]
    fn compact_json_is_one_line() {
        let report = ParsedReport {
            project_name: "Lake House".into(),
            ..Default::default()
        };
        let compact = report.to_json(false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(report.to_json(true).unwrap().contains('\n'));
    }

    #[test]
    fn category_counts() {
        let device = |category: &str| ExternalDevice {
            category: category.into(),
            ..Default::default()
        };
        let report = ParsedReport {
            devices: vec![device("network"), device("security"), device("network")],
            ..Default::default()
        };
        let counts = report.device_count_by_category();
        assert_eq!(counts.get("network"), Some(&2));
        assert_eq!(counts.get("security"), Some(&1));
    }
}
