use std::sync::LazyLock;

use regex::Regex;

use super::Outcome;
use crate::model::WifiNetwork;
use crate::parser::device::{Accumulator, RawDevice};
use crate::parser::post::clean;
use crate::parser::sections::DeviceKind;

static SSID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:wireless\s+)?ssid[^:|\t]*[:|\t] *(.+)$").unwrap());

// Tolerates "Wirless", "Wireles", "Pasword", "Passwd", "Pass Word" and "Pass",
// but not other words that merely start with "pas".
static PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:wi?re?le?s{1,2}\s+)?pass?(?:\s?w(?:or|o|r)?d)?\b[^:|\t]*[:|\t] *(.*)$")
        .unwrap()
});

/// `Wireless SSID: <name>` starts (or continues) a Wi-Fi record. Anything
/// after a tab in the name is a note and is dropped.
pub fn ssid(line: &str, acc: &mut Accumulator) -> Outcome {
    let Some(caps) = SSID_RE.captures(line) else {
        return Outcome::Declined;
    };
    let needs_new = match acc.current() {
        Some(d) if d.kind == DeviceKind::Wifi => d.is_complete_wifi(),
        _ => true,
    };
    if needs_new {
        acc.begin(RawDevice::wifi());
    }
    if let Some(device) = acc.current_mut() {
        device.ssid = Some(clean(&caps[1]));
    }
    Outcome::Consumed
}

/// `Wireless Password: <secret>` completes the pending SSID. An empty
/// password is an open network.
pub fn password(line: &str, acc: &mut Accumulator) -> Outcome {
    let ssid = match acc.current() {
        Some(d) if d.kind == DeviceKind::Wifi => match &d.ssid {
            Some(ssid) => ssid.clone(),
            None => return Outcome::Declined,
        },
        _ => return Outcome::Declined,
    };
    let Some(caps) = PASSWORD_RE.captures(line) else {
        return Outcome::Declined;
    };
    let password = caps
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    acc.emit_wifi(WifiNetwork { ssid, password });
    Outcome::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(acc: &mut Accumulator, lines: &[&str]) {
        for line in lines {
            if ssid(line, acc) == Outcome::Declined {
                password(line, acc);
            }
        }
    }

    #[test]
    fn ssid_and_password_pair() {
        let mut acc = Accumulator::new();
        feed(&mut acc, &["Wireless SSID: HomeNet", "Wireless Password: Secr3t!"]);
        let (devices, wifi) = acc.finish();
        assert!(devices.is_empty());
        assert_eq!(
            wifi,
            vec![WifiNetwork {
                ssid: "HomeNet".into(),
                password: "Secr3t!".into()
            }]
        );
    }

    #[test]
    fn delimiter_variants() {
        let mut acc = Accumulator::new();
        feed(
            &mut acc,
            &["SSID\tGuest", "Password\tguest123", "ssid 5GHz | Fast", "pass: x"],
        );
        let (_, wifi) = acc.finish();
        assert_eq!(wifi[0].ssid, "Guest");
        assert_eq!(wifi[0].password, "guest123");
        assert_eq!(wifi[1].ssid, "Fast");
        assert_eq!(wifi[1].password, "x");
    }

    #[test]
    fn misspelled_labels() {
        for label in [
            "Wirless Password",
            "Wireles Pasword",
            "Wireless Passwd",
            "Password",
            "Pass Word",
            "Pass",
            "Password (WPA2)",
        ] {
            let line = format!("{}: pw", label);
            let mut acc = Accumulator::new();
            feed(&mut acc, &["SSID: Net", line.as_str()]);
            let (_, wifi) = acc.finish();
            assert_eq!(wifi.len(), 1, "label {:?} not recognized", label);
            assert_eq!(wifi[0].password, "pw");
        }
    }

    #[test]
    fn words_starting_with_pas_are_not_passwords() {
        let mut acc = Accumulator::new();
        feed(&mut acc, &["SSID: A", "Passive Scan: on", "Pass Phrase: pw"]);
        let (_, wifi) = acc.finish();
        assert_eq!(
            wifi,
            vec![WifiNetwork {
                ssid: "A".into(),
                password: "pw".into()
            }]
        );
    }

    #[test]
    fn ssid_tab_notes_dropped() {
        let mut acc = Accumulator::new();
        feed(
            &mut acc,
            &["SSID\tHome\tmain floor", "Password: a", "SSID: Home", "Password: b"],
        );
        let (_, wifi) = acc.finish();
        assert_eq!(wifi[0].ssid, "Home");
        assert_eq!(crate::parser::post::dedup_wifi(wifi).len(), 1);
    }

    #[test]
    fn empty_password_is_open_network() {
        let mut acc = Accumulator::new();
        feed(&mut acc, &["Wireless SSID: Cafe", "Wireless Password:"]);
        let (_, wifi) = acc.finish();
        assert_eq!(wifi[0].password, "");
    }

    #[test]
    fn password_without_ssid_declines() {
        let mut acc = Accumulator::new();
        assert_eq!(password("Wireless Password: pw", &mut acc), Outcome::Declined);
    }

    #[test]
    fn consecutive_blocks_without_headers() {
        let mut acc = Accumulator::new();
        feed(
            &mut acc,
            &[
                "Wireless SSID: A",
                "Wireless Password: 1",
                "Wireless SSID: B",
                "Wireless Password: 2",
            ],
        );
        let (_, wifi) = acc.finish();
        let ssids: Vec<_> = wifi.iter().map(|w| w.ssid.as_str()).collect();
        assert_eq!(ssids, vec!["A", "B"]);
    }

    #[test]
    fn second_ssid_replaces_unpaired_first() {
        let mut acc = Accumulator::new();
        feed(&mut acc, &["SSID: A", "SSID: B", "Password: pw"]);
        let (_, wifi) = acc.finish();
        assert_eq!(wifi.len(), 1);
        assert_eq!(wifi[0].ssid, "B");
    }

    #[test]
    fn ssid_inside_device_section_flushes_device() {
        let mut acc = Accumulator::new();
        acc.begin(RawDevice::new(DeviceKind::Router, Some("Router".into())));
        feed(&mut acc, &["SSID: Net", "Password: pw"]);
        let (devices, wifi) = acc.finish();
        assert_eq!(devices.len(), 1);
        assert_eq!(wifi.len(), 1);
    }
}
