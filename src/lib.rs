//! Legacy project report import.
//!
//! Turns a pasted, free-form installer report (bracketed device sections,
//! colon/tab key-value lines, switch and PDU port maps, Wi-Fi credential
//! blocks) into a typed [`ParsedReport`] ready for submission to the
//! project/device API. Nothing here performs I/O beyond the file helper.

pub mod config;
pub mod error;
pub mod mapping;
pub mod model;
pub mod parser;

use std::path::Path;

pub use error::{ImportError, Result};
pub use model::{ExternalDevice, ManagedPort, ParsedReport, WifiNetwork};
pub use parser::{extract_report, parse_report, RawReport};

/// Read a report from disk and parse it.
pub fn parse_file(path: &Path) -> Result<ParsedReport> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&text)
}
