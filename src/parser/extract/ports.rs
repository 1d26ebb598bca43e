use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Outcome;
use crate::parser::device::{Accumulator, PortEntry};
use crate::parser::sections::DeviceKind;

// SWITCH01 PoE Port01: WAP01 / SFP1 Port25<TAB>Uplink / Port 3: NVR
static SWITCH_PORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:switch\s*\d*\s*)?(?:poe\s*)?(?:sfp\s*\d*\s*)?port\s*(\d+)\s*[:\t]\s*(.*)$")
        .unwrap()
});

// PDU1 Power Port2: Router / Power Port 4<TAB>Amp
static PDU_PORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:pdu\s*\d*\s*)?(?:power\s*)?port\s*(\d+)\s*[:\t]\s*(.*)$").unwrap()
});

pub fn switch_port(line: &str, acc: &mut Accumulator) -> Outcome {
    port_line(line, acc, DeviceKind::Switch, &SWITCH_PORT_RE)
}

pub fn pdu_port(line: &str, acc: &mut Accumulator) -> Outcome {
    port_line(line, acc, DeviceKind::Pdu, &PDU_PORT_RE)
}

fn port_line(line: &str, acc: &mut Accumulator, kind: DeviceKind, re: &Regex) -> Outcome {
    let Some(device) = acc.current_mut().filter(|d| d.kind == kind) else {
        return Outcome::Declined;
    };
    let Some(caps) = re.captures(line) else {
        return Outcome::Declined;
    };

    let port = caps[1].parse::<u32>().unwrap_or(0);
    let target = caps[2].trim();
    if port == 0 || target.is_empty() {
        debug!(line, "dropping malformed port line");
        return Outcome::Consumed;
    }

    let entry = PortEntry {
        port,
        target: target.to_string(),
    };
    match kind {
        DeviceKind::Pdu => device.pdu_ports.push(entry),
        _ => device.switch_ports.push(entry),
    }
    Outcome::Consumed
}
