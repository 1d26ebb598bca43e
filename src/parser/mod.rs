pub mod device;
pub mod extract;
pub mod lines;
pub mod post;
pub mod sections;

use tracing::{debug, info, trace};

use crate::error::{ImportError, Result};
use crate::mapping::to_external;
use crate::model::{ParsedReport, WifiNetwork};
use device::{Accumulator, RawDevice};

/// Devices and Wi-Fi networks before type mapping.
#[derive(Debug, Clone, Default)]
pub struct RawReport {
    pub project_name: String,
    pub wifi_networks: Vec<WifiNetwork>,
    pub devices: Vec<RawDevice>,
}

/// Scan → classify → accumulate/extract → finalize → clean → dedup.
///
/// Never fails: unrecognized lines and sections are skipped.
pub fn extract_report(report: &str) -> RawReport {
    let project_name = lines::project_name(report);
    let mut acc = Accumulator::new();

    for line in lines::scan_lines(report) {
        if let Some(name) = sections::section_name(line.text) {
            let section = sections::classify(name);
            match &section {
                Some(s) => debug!(section = name, kind = %s.kind, "section"),
                None => debug!(section = name, "unrecognized section"),
            }
            acc.begin_section(section);
            continue;
        }
        if extract::dispatch(line.text, &mut acc).is_none() {
            trace!(line = line.raw, "no extractor matched");
        }
    }

    let (mut devices, wifi) = acc.finish();
    devices.iter_mut().for_each(post::clean_device);

    RawReport {
        project_name,
        wifi_networks: post::dedup_wifi(wifi),
        devices,
    }
}

/// Parse a pasted legacy report into the import payload.
pub fn parse_report(report: &str) -> Result<ParsedReport> {
    if report.trim().is_empty() {
        return Err(ImportError::NoContent);
    }
    let raw = extract_report(report);
    let parsed = ParsedReport {
        project_name: raw.project_name,
        wifi_networks: raw.wifi_networks,
        devices: raw.devices.into_iter().map(to_external).collect(),
    };
    info!(
        project = %parsed.project_name,
        devices = parsed.devices.len(),
        wifi = parsed.wifi_networks.len(),
        "parsed report"
    );
    Ok(parsed)
}

// ── Tests ──
