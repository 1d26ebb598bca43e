use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([A-Za-z][A-Za-z0-9 _\-]*)\](?:\s|$)").unwrap());

static WAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^wap\d+$").unwrap());
static SWITCH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^switch\d+$").unwrap());
static CAMERA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^camera\d+$").unwrap());
static PDU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^pdu\d+$").unwrap());
static AC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ac\d+$").unwrap());
static TV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tv\d+$").unwrap());
static PROJ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^proj\d+$").unwrap());
static AVR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^avr\d+$").unwrap());
static ATV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^atv\d+$").unwrap());
static BLU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^blu\d+$").unwrap());

/// Internal device-category tag assigned from a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Wifi,
    Control4,
    AccessPoint,
    Switch,
    Camera,
    Pdu,
    Nvr,
    CloudKey,
    HvacController,
    Router,
    Modem,
    Amplifier,
    DoorStation,
    Tv,
    Projector,
    Avr,
    Nas,
    AlarmPanel,
    AudioMatrix,
    Streaming,
    BluRay,
    Irrigation,
    TouchPanel,
    Processor,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 24] = [
        DeviceKind::Wifi,
        DeviceKind::Control4,
        DeviceKind::AccessPoint,
        DeviceKind::Switch,
        DeviceKind::Camera,
        DeviceKind::Pdu,
        DeviceKind::Nvr,
        DeviceKind::CloudKey,
        DeviceKind::HvacController,
        DeviceKind::Router,
        DeviceKind::Modem,
        DeviceKind::Amplifier,
        DeviceKind::DoorStation,
        DeviceKind::Tv,
        DeviceKind::Projector,
        DeviceKind::Avr,
        DeviceKind::Nas,
        DeviceKind::AlarmPanel,
        DeviceKind::AudioMatrix,
        DeviceKind::Streaming,
        DeviceKind::BluRay,
        DeviceKind::Irrigation,
        DeviceKind::TouchPanel,
        DeviceKind::Processor,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DeviceKind::Wifi => "wifi",
            DeviceKind::Control4 => "control4",
            DeviceKind::AccessPoint => "access-point",
            DeviceKind::Switch => "switch",
            DeviceKind::Camera => "camera",
            DeviceKind::Pdu => "pdu",
            DeviceKind::Nvr => "nvr",
            DeviceKind::CloudKey => "cloudkey",
            DeviceKind::HvacController => "hvac-controller",
            DeviceKind::Router => "router",
            DeviceKind::Modem => "modem",
            DeviceKind::Amplifier => "amplifier",
            DeviceKind::DoorStation => "door-station",
            DeviceKind::Tv => "tv",
            DeviceKind::Projector => "projector",
            DeviceKind::Avr => "avr",
            DeviceKind::Nas => "nas",
            DeviceKind::AlarmPanel => "alarm-panel",
            DeviceKind::AudioMatrix => "audio-matrix",
            DeviceKind::Streaming => "streaming",
            DeviceKind::BluRay => "blu-ray",
            DeviceKind::Irrigation => "irrigation",
            DeviceKind::TouchPanel => "touchpanel",
            DeviceKind::Processor => "processor",
        }
    }

    /// Kinds that never become devices in the output list.
    pub fn is_transient(self) -> bool {
        matches!(self, DeviceKind::Wifi | DeviceKind::Control4)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown device kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for DeviceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A recognized section: its kind and the device name it implies, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: DeviceKind,
    pub name: Option<String>,
}

/// Extract the bracketed section name from a trimmed line like `[Switch01]`.
pub fn section_name(line: &str) -> Option<&str> {
    HEADER_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Map a section name to a device kind. First matching rule wins.
pub fn classify(name: &str) -> Option<Section> {
    let lower = name.to_lowercase();
    let l = lower.as_str();
    let own = || Some(name.to_string());
    let fixed = |n: &str| Some(n.to_string());

    let (kind, name) = match l {
        _ if l.contains("wireless") => (DeviceKind::Wifi, None),
        _ if l.contains("control4") => (DeviceKind::Control4, None),
        _ if WAP_RE.is_match(l) || l.contains("wap controller") => (DeviceKind::AccessPoint, own()),
        _ if SWITCH_RE.is_match(l) => (DeviceKind::Switch, own()),
        _ if CAMERA_RE.is_match(l) => (DeviceKind::Camera, own()),
        _ if PDU_RE.is_match(l) => (DeviceKind::Pdu, own()),
        "nvr" => (DeviceKind::Nvr, fixed("NVR")),
        "cloudkey" => (DeviceKind::CloudKey, fixed("Cloud Key")),
        _ if AC_RE.is_match(l) || l.contains("coolmaster") => (DeviceKind::HvacController, own()),
        _ if l.contains("router") => (DeviceKind::Router, fixed("Router")),
        _ if l.contains("modem") => (DeviceKind::Modem, fixed("Modem")),
        _ if l.contains("amp") || l.contains("sonance") => (DeviceKind::Amplifier, own()),
        _ if l.contains("intercom") || l.contains("ds2") => (DeviceKind::DoorStation, fixed("Intercom")),
        _ if l.contains("samsung") || TV_RE.is_match(l) => (DeviceKind::Tv, own()),
        _ if PROJ_RE.is_match(l) => (DeviceKind::Projector, own()),
        _ if AVR_RE.is_match(l) => (DeviceKind::Avr, own()),
        "nas" => (DeviceKind::Nas, fixed("NAS")),
        _ if l.contains("alarm") || l.contains("ness") => (DeviceKind::AlarmPanel, fixed("Alarm Panel")),
        _ if l.contains("audio matrix") => (DeviceKind::AudioMatrix, own()),
        _ if l.contains("apple tv") || ATV_RE.is_match(l) => (DeviceKind::Streaming, own()),
        _ if BLU_RE.is_match(l) => (DeviceKind::BluRay, own()),
        _ if l.contains("rachio") => (DeviceKind::Irrigation, fixed("Rachio")),
        _ if l.contains("touch screen") || l.contains("remote") => (DeviceKind::TouchPanel, own()),
        _ if l.contains("control processor") || l.contains("ea3") || l.contains("ea5") => {
            (DeviceKind::Processor, own())
        }
        _ => return None,
    };

    Some(Section { kind, name })
}

// ── Tests ──
