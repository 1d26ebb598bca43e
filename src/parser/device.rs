use tracing::debug;

use super::sections::{DeviceKind, Section};
use crate::model::{ManagedPort, WifiNetwork};

/// A port number and the name of whatever is plugged into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortEntry {
    pub port: u32,
    pub target: String,
}

/// Port assignments attached to a device when it is flushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortMap {
    Switch(Vec<ManagedPort>),
    Pdu { names: String, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDevice {
    pub kind: DeviceKind,
    pub name: Option<String>,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub firmware_version: Option<String>,
    pub panel_type: Option<String>,
    pub ssid: Option<String>,
    pub switch_ports: Vec<PortEntry>,
    pub pdu_ports: Vec<PortEntry>,
    pub ports: Option<PortMap>,
}

impl RawDevice {
    pub fn new(kind: DeviceKind, name: Option<String>) -> Self {
        RawDevice {
            kind,
            name,
            location: None,
            manufacturer: None,
            model: None,
            serial_number: None,
            ip_address: None,
            mac_address: None,
            username: None,
            password: None,
            firmware_version: None,
            panel_type: None,
            ssid: None,
            switch_ports: Vec::new(),
            pdu_ports: Vec::new(),
            ports: None,
        }
    }

    pub fn wifi() -> Self {
        RawDevice::new(DeviceKind::Wifi, None)
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// A Wi-Fi record with both halves of the credential pair.
    pub fn is_complete_wifi(&self) -> bool {
        self.kind == DeviceKind::Wifi && self.ssid.is_some() && self.password.is_some()
    }

    /// Move collected port entries into their structured form.
    fn finalize_ports(&mut self) {
        match self.kind {
            DeviceKind::Switch if !self.switch_ports.is_empty() => {
                let ports = std::mem::take(&mut self.switch_ports)
                    .into_iter()
                    .map(|p| ManagedPort {
                        port_number: p.port,
                        description: p.target,
                    })
                    .collect();
                self.ports = Some(PortMap::Switch(ports));
            }
            DeviceKind::Pdu if !self.pdu_ports.is_empty() => {
                let mut entries = std::mem::take(&mut self.pdu_ports);
                entries.sort_by_key(|p| p.port);
                let names = entries
                    .into_iter()
                    .map(|p| p.target)
                    .collect::<Vec<_>>()
                    .join("\n");
                let count = names.lines().count();
                self.ports = Some(PortMap::Pdu { names, count });
            }
            _ => {}
        }
    }
}

/// The in-progress device plus everything emitted so far.
///
/// `current == None` is the idle state; any `Some` is accumulating.
#[derive(Debug, Default)]
pub struct Accumulator {
    current: Option<RawDevice>,
    devices: Vec<RawDevice>,
    wifi: Vec<WifiNetwork>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&RawDevice> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut RawDevice> {
        self.current.as_mut()
    }

    /// Enter a new section. `None` (unrecognized header) returns to idle.
    pub fn begin_section(&mut self, section: Option<Section>) {
        self.flush();
        self.current = section.map(|s| RawDevice::new(s.kind, s.name));
    }

    /// Replace whatever is in progress with a fresh device.
    pub fn begin(&mut self, device: RawDevice) {
        self.flush();
        self.current = Some(device);
    }

    /// Commit the current device, if it qualifies, and go idle.
    pub fn flush(&mut self) {
        let Some(mut device) = self.current.take() else {
            return;
        };
        if device.kind.is_transient() {
            return;
        }
        if !device.has_name() {
            debug!(kind = %device.kind, "discarding unnamed device");
            return;
        }
        device.finalize_ports();
        debug!(kind = %device.kind, name = ?device.name, "flushed device");
        self.devices.push(device);
    }

    /// Record a finished Wi-Fi pair and wait for the next SSID.
    pub fn emit_wifi(&mut self, network: WifiNetwork) {
        self.wifi.push(network);
        self.current = Some(RawDevice::wifi());
    }

    /// Output devices already committed. Bypasses the state machine.
    pub fn devices_mut(&mut self) -> &mut Vec<RawDevice> {
        &mut self.devices
    }

    pub fn finish(mut self) -> (Vec<RawDevice>, Vec<WifiNetwork>) {
        self.flush();
        (self.devices, self.wifi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(kind: DeviceKind, name: Option<&str>) -> Option<Section> {
        Some(Section {
            kind,
            name: name.map(String::from),
        })
    }

    #[test]
    fn new_section_flushes_previous() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Camera, Some("Camera01")));
        acc.begin_section(section(DeviceKind::Camera, Some("Camera02")));
        let (devices, _) = acc.finish();
        let names: Vec<_> = devices.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["Camera01", "Camera02"]);
    }

    #[test]
    fn unrecognized_section_goes_idle() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Nvr, Some("NVR")));
        acc.begin_section(None);
        assert!(acc.current().is_none());
        assert_eq!(acc.finish().0.len(), 1);
    }

    #[test]
    fn transient_and_unnamed_devices_dropped() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Wifi, None));
        acc.begin_section(section(DeviceKind::Control4, None));
        acc.begin_section(section(DeviceKind::Camera, None));
        acc.begin_section(section(DeviceKind::Camera, Some("")));
        assert!(acc.finish().0.is_empty());
    }

    #[test]
    fn switch_ports_finalized_in_entry_order() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Switch, Some("Switch01")));
        let dev = acc.current_mut().unwrap();
        dev.switch_ports.push(PortEntry { port: 3, target: "NVR".into() });
        dev.switch_ports.push(PortEntry { port: 1, target: "WAP01".into() });
        let (devices, _) = acc.finish();
        let Some(PortMap::Switch(ports)) = &devices[0].ports else {
            panic!("expected switch ports, got {:?}", devices[0].ports);
        };
        assert_eq!(ports[0], ManagedPort { port_number: 3, description: "NVR".into() });
        assert_eq!(ports[1].port_number, 1);
        assert!(devices[0].switch_ports.is_empty());
    }

    #[test]
    fn pdu_names_joined_in_port_order() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Pdu, Some("PDU1")));
        let dev = acc.current_mut().unwrap();
        dev.pdu_ports.push(PortEntry { port: 2, target: "Modem".into() });
        dev.pdu_ports.push(PortEntry { port: 1, target: "Router".into() });
        let (devices, _) = acc.finish();
        assert_eq!(
            devices[0].ports,
            Some(PortMap::Pdu {
                names: "Router\nModem".into(),
                count: 2
            })
        );
    }

    #[test]
    fn switch_without_ports_has_no_port_map() {
        let mut acc = Accumulator::new();
        acc.begin_section(section(DeviceKind::Switch, Some("Switch02")));
        assert_eq!(acc.finish().0[0].ports, None);
    }

    #[test]
    fn emit_wifi_resets_to_fresh_record() {
        let mut acc = Accumulator::new();
        acc.begin(RawDevice::wifi());
        acc.emit_wifi(WifiNetwork {
            ssid: "HomeNet".into(),
            password: "pw".into(),
        });
        let current = acc.current().unwrap();
        assert_eq!(current.kind, DeviceKind::Wifi);
        assert!(current.ssid.is_none());
        let (devices, wifi) = acc.finish();
        assert!(devices.is_empty());
        assert_eq!(wifi.len(), 1);
    }
}
