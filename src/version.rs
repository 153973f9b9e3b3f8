//! Server version parsing, gates the print_identified_with_as_hex session variable

use std::io::{self, ErrorKind};

use mysql::{Error, Result};

/// Numeric server version as reported by SELECT VERSION(), build suffix stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ServerVersion {
    /// Parse a version string of the form MAJOR.MINOR.PATCH[-suffix]
    pub fn parse(version: &str) -> Result<Self> {
        let mut parts = version.split('.');
        let major = numeric(parts.next(), version)?;
        let minor = numeric(parts.next(), version)?;
        let patch = numeric(parts.next().and_then(|p| p.split('-').next()), version)?;
        Ok(Self { major, minor, patch })
    }

    /// MySQL understands print_identified_with_as_hex starting with 8.0.17
    pub fn supports_print_identified_with_as_hex(&self) -> bool {
        *self >= ServerVersion { major: 8, minor: 0, patch: 17 }
    }
}

fn numeric(part: Option<&str>, version: &str) -> Result<u16> {
    part.and_then(|p| p.parse::<u16>().ok())
        .ok_or_else(|| Error::IoError(io::Error::new(
            ErrorKind::InvalidData,
            format!("Could not parse server version '{version}'"))))
}
