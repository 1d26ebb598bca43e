//! Internal device kinds → the persistence API's category/deviceType vocabulary.

use crate::model::{ExternalDevice, INSTALLED};
use crate::parser::device::{PortMap, RawDevice};
use crate::parser::sections::DeviceKind;

pub const DEFAULT_MAPPING: (&str, &str) = ("other", "generic");

/// Switches report at least this many ports even when fewer are mapped.
pub const MIN_SWITCH_PORTS: u32 = 24;

pub fn map_kind(kind: DeviceKind) -> (&'static str, &'static str) {
    match kind {
        DeviceKind::AccessPoint => ("network", "access-point"),
        DeviceKind::Switch => ("network", "switch"),
        DeviceKind::Router => ("network", "router"),
        DeviceKind::Modem => ("network", "modem"),
        DeviceKind::CloudKey => ("network", "controller"),
        DeviceKind::Nas => ("network", "nas"),
        DeviceKind::Camera => ("security", "camera"),
        DeviceKind::Nvr => ("security", "nvr"),
        DeviceKind::AlarmPanel => ("security", "alarm-panel"),
        DeviceKind::DoorStation => ("security", "intercom"),
        DeviceKind::Pdu => ("power", "pdu"),
        DeviceKind::Amplifier => ("audio", "amplifier"),
        DeviceKind::AudioMatrix => ("audio", "matrix"),
        DeviceKind::Avr => ("audio", "receiver"),
        DeviceKind::Tv => ("video", "display"),
        DeviceKind::Projector => ("video", "projector"),
        DeviceKind::Streaming => ("video", "streaming"),
        DeviceKind::BluRay => ("video", "media-player"),
        DeviceKind::Processor => ("control", "processor"),
        DeviceKind::TouchPanel => ("control", "touch-panel"),
        DeviceKind::HvacController => ("automation", "hvac"),
        DeviceKind::Irrigation => ("automation", "irrigation"),
        DeviceKind::Wifi | DeviceKind::Control4 => DEFAULT_MAPPING,
    }
}

/// String-keyed variant of [`map_kind`]; unknown tags get the default.
pub fn map_tag(tag: &str) -> (&'static str, &'static str) {
    tag.parse::<DeviceKind>()
        .map(map_kind)
        .unwrap_or(DEFAULT_MAPPING)
}

pub fn to_external(device: RawDevice) -> ExternalDevice {
    let (category, device_type) = map_kind(device.kind);
    let mut out = ExternalDevice {
        name: device.name.unwrap_or_default(),
        category: category.to_string(),
        device_type: device_type.to_string(),
        manufacturer: device.manufacturer.unwrap_or_default(),
        model: device.model.unwrap_or_default(),
        serial_number: device.serial_number.unwrap_or_default(),
        ip_address: device.ip_address.unwrap_or_default(),
        mac_address: device.mac_address.unwrap_or_default(),
        username: device.username.unwrap_or_default(),
        password: device.password.unwrap_or_default(),
        location: device.location.unwrap_or_default(),
        firmware_version: device.firmware_version.unwrap_or_default(),
        status: INSTALLED.to_string(),
        panel_type: None,
        managed_ports: None,
        port_count: None,
        pdu_port_names: None,
        pdu_port_count: None,
    };

    if device.kind == DeviceKind::AlarmPanel {
        out.panel_type = device.panel_type;
    }

    match device.ports {
        Some(PortMap::Switch(ports)) => {
            let highest = ports.iter().map(|p| p.port_number).max().unwrap_or(0);
            out.port_count = Some(highest.max(MIN_SWITCH_PORTS));
            out.managed_ports = Some(ports);
        }
        Some(PortMap::Pdu { names, count }) => {
            out.pdu_port_names = Some(names);
            out.pdu_port_count = Some(count);
        }
        None => {}
    }

    out
}
