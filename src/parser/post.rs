use std::collections::HashSet;

use super::device::RawDevice;
use crate::model::WifiNetwork;

/// Drop everything from the first tab onward and trim.
///
/// Legacy files often append notes or factory defaults after a tab.
pub fn clean(value: &str) -> String {
    value.split('\t').next().unwrap_or_default().trim().to_string()
}

fn clean_opt(field: &mut Option<String>) {
    if let Some(v) = field.as_mut() {
        *v = clean(v.as_str());
    }
}

pub fn clean_device(device: &mut RawDevice) {
    clean_opt(&mut device.ip_address);
    clean_opt(&mut device.mac_address);
    clean_opt(&mut device.username);
    clean_opt(&mut device.password);
    clean_opt(&mut device.location);
}

/// Keep the first network per SSID, in first-seen order. Empty SSIDs are dropped.
pub fn dedup_wifi(networks: Vec<WifiNetwork>) -> Vec<WifiNetwork> {
    let mut seen = HashSet::new();
    networks
        .into_iter()
        .filter(|n| !n.ssid.is_empty() && seen.insert(n.ssid.clone()))
        .collect()
}
