//! Textual address parsing.
//!
//! Input to every tool is a string of the form `address` or `address/prefix`.
//! [`split_cidr`] tears the text apart, [`ParsedAddress`] validates the
//! address half against both families.

use crate::error::ToolError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

/// Address family of a parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl AddressFamily {
    /// Longest prefix the family allows (32 or 128).
    pub fn max_prefix(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }

    /// Prefix assumed when the input carries none (24 or 64).
    pub fn default_prefix(self) -> u8 {
        match self {
            AddressFamily::V4 => 24,
            AddressFamily::V6 => 64,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// A syntactically valid IPv4 or IPv6 address, normalized.
///
/// Created fresh on every calculation call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress {
    pub addr: IpAddr,
}

impl ParsedAddress {
    /// Parse an address literal of either family.
    ///
    /// Accepts dotted-decimal IPv4, colon-hex IPv6 (including `::`
    /// compression and the mixed IPv4-mapped suffix). Anything else is
    /// [`ToolError::InvalidAddress`].
    pub fn parse(text: &str) -> Result<ParsedAddress, ToolError> {
        let text = text.trim();
        let addr = IpAddr::from_str(text)
            .map_err(|_| ToolError::InvalidAddress(text.to_string()))?;
        Ok(ParsedAddress { addr })
    }

    pub fn family(&self) -> AddressFamily {
        match self.addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Big-endian byte form: 4 bytes for IPv4, 16 for IPv6.
    pub fn octets(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }
}

impl std::fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr)
    }
}

lazy_static! {
    // Anchored over the trimmed input: address text up to the first '/',
    // then everything after it as the prefix segment. Nothing is dropped;
    // garbage in either piece surfaces in downstream validation.
    static ref CIDR_RE: Regex = Regex::new(r"^([^/]+)(?:/(.*))?$").expect("Invalid Regex?");
}

/// Split input text into `(address, optional prefix)` pieces.
///
/// The whole trimmed input is consumed; only the shape is checked here.
/// The address is validated by [`ParsedAddress::parse`] and the prefix by
/// the calling tool.
pub fn split_cidr(input: &str) -> Result<(&str, Option<&str>), ToolError> {
    let caps = CIDR_RE
        .captures(input.trim())
        .ok_or_else(|| ToolError::InvalidFormat(input.to_string()))?;
    let addr = caps.get(1).map_or("", |m| m.as_str());
    Ok((addr, caps.get(2).map(|m| m.as_str())))
}
