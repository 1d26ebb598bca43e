use std::sync::LazyLock;

use regex::Regex;

use super::alarm::classify_panel;
use super::Outcome;
use crate::parser::device::{Accumulator, RawDevice};
use crate::parser::sections::DeviceKind;

static KV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:|\t]+)[:|\t] *(.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Location,
    Manufacturer,
    Model,
    Serial,
    Ip,
    Mac,
    Username,
    Password,
    Firmware,
    Name,
}

/// Which device field a (lower-cased) key names. First rule wins.
fn field_for(key: &str) -> Option<Field> {
    let field = match key {
        k if k.contains("location") => Field::Location,
        k if k.contains("brand") || k.contains("manufacturer") => Field::Manufacturer,
        k if k.contains("model") => Field::Model,
        k if k.contains("serial") => Field::Serial,
        k if k.contains("ip address") || k == "ip" => Field::Ip,
        k if k.contains("mac address") || k == "mac" => Field::Mac,
        k if k.contains("login") || (k.contains("user") && !k.contains("account")) => {
            Field::Username
        }
        k if k.contains("password") || k.contains("pass") => Field::Password,
        k if k.contains("firmware") => Field::Firmware,
        k if k.contains("name") => Field::Name,
        _ => return None,
    };
    Some(field)
}

/// Once a switch/PDU has port entries, only keys naming the device itself
/// are still trusted; anything else is probably a trailing unrelated line.
fn key_allowed(device: &RawDevice, key: &str) -> bool {
    match device.kind {
        DeviceKind::Switch if !device.switch_ports.is_empty() => key.starts_with("switch"),
        DeviceKind::Pdu if !device.pdu_ports.is_empty() => key.starts_with("pdu"),
        _ => true,
    }
}

/// Generic `Key: value` / `Key<TAB>value` line.
pub fn key_value(line: &str, acc: &mut Accumulator) -> Outcome {
    let Some(device) = acc.current_mut() else {
        return Outcome::Declined;
    };
    if device.kind.is_transient() {
        return Outcome::Declined;
    }
    let Some(caps) = KV_RE.captures(line) else {
        return Outcome::Declined;
    };
    let value = caps[2].trim();
    if value.is_empty() {
        return Outcome::Declined;
    }
    let key = caps[1].trim().to_lowercase();
    if !key_allowed(device, &key) {
        return Outcome::Declined;
    }

    let value = value.to_string();
    match field_for(&key) {
        Some(Field::Location) => device.location = Some(value),
        Some(Field::Manufacturer) => {
            if device.kind == DeviceKind::AlarmPanel && key.contains("brand") {
                if let Some(panel) = classify_panel(&value) {
                    device.panel_type = Some(panel.to_string());
                }
            }
            device.manufacturer = Some(value);
        }
        Some(Field::Model) => device.model = Some(value),
        Some(Field::Serial) => device.serial_number = Some(value),
        Some(Field::Ip) => device.ip_address = Some(value),
        Some(Field::Mac) => device.mac_address = Some(value),
        Some(Field::Username) => device.username = Some(value),
        Some(Field::Password) => device.password = Some(value),
        Some(Field::Firmware) => device.firmware_version = Some(value),
        Some(Field::Name) if !device.has_name() => device.name = Some(value),
        Some(Field::Name) | None => {}
    }
    Outcome::Consumed
}
