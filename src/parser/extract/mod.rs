pub mod alarm;
pub mod fields;
pub mod ports;
pub mod wifi;

use tracing::trace;

use super::device::Accumulator;

/// Result of offering a line to one extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Consumed,
    Declined,
}

pub type Extractor = fn(&str, &mut Accumulator) -> Outcome;

/// Tried in order for every non-header line; the first to consume wins.
pub const CHAIN: &[(&str, Extractor)] = &[
    ("wifi_ssid", wifi::ssid),
    ("wifi_password", wifi::password),
    ("switch_port", ports::switch_port),
    ("pdu_port", ports::pdu_port),
    ("alarm_serial", alarm::serial),
    ("key_value", fields::key_value),
];

/// Run the chain over one line. Returns the name of the consuming extractor.
pub fn dispatch(line: &str, acc: &mut Accumulator) -> Option<&'static str> {
    for (name, extractor) in CHAIN {
        if extractor(line, acc) == Outcome::Consumed {
            trace!(extractor = *name, line, "consumed");
            return Some(*name);
        }
    }
    None
}
