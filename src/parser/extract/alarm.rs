use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Outcome;
use crate::parser::device::{Accumulator, RawDevice};
use crate::parser::sections::DeviceKind;

pub const ALARM_PANEL_NAME: &str = "Alarm Panel";
pub const DEFAULT_PANEL_TYPE: &str = "inception";

static SERIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ALARM Serial Number:\s*(\S+)").unwrap());

/// Substring of a brand value → panel type.
const PANEL_TYPES: &[(&str, &str)] = &[
    ("paradox", "paradox"),
    ("inception", "inception"),
    ("inner range", "inception"),
    ("bosch", "bosch"),
    ("honeywell", "honeywell"),
    ("ajax", "ajax"),
    ("dahua", "dahua"),
    ("hikvision", "hikvision"),
];

pub fn classify_panel(brand: &str) -> Option<&'static str> {
    let lower = brand.to_lowercase();
    PANEL_TYPES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, panel)| *panel)
}

/// `ALARM Serial Number: <token>` anywhere in the report.
///
/// Writes straight into the committed device list, creating an alarm panel
/// if none exists yet. The device being accumulated is never touched.
pub fn serial(line: &str, acc: &mut Accumulator) -> Outcome {
    let Some(caps) = SERIAL_RE.captures(line) else {
        return Outcome::Declined;
    };
    let serial = caps[1].to_string();

    if let Some(existing) = acc
        .devices_mut()
        .iter_mut()
        .find(|d| d.kind == DeviceKind::AlarmPanel)
    {
        existing.serial_number = Some(serial);
        return Outcome::Consumed;
    }

    debug!(serial = %serial, "creating alarm panel from standalone serial");
    let mut panel = RawDevice::new(DeviceKind::AlarmPanel, Some(ALARM_PANEL_NAME.to_string()));
    panel.panel_type = Some(DEFAULT_PANEL_TYPE.to_string());
    panel.serial_number = Some(serial);
    acc.devices_mut().push(panel);
    Outcome::Consumed
}
