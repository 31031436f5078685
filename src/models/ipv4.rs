//! IPv4 subnet arithmetic primitives.
//!
//! All math runs on host-order `u32` values converted via [`Ipv4Addr`];
//! callers hand in prefixes already validated to the 0..=32 range.

use crate::error::ToolError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum IPv4 prefix length (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Subnet mask for a prefix length, as a `u32`.
///
/// # Examples
/// ```
/// use subnet_toolbox::models::ipv4::prefix_mask;
/// assert_eq!(prefix_mask(24), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> u32 {
    assert!(len <= MAX_LENGTH, "prefix[{len}] > 32 should never happen.");
    if len == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - len)
    }
}

/// Lowest address of the block containing `addr` (all host bits zero).
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & prefix_mask(len))
}

/// Highest address of the block containing `addr` (all host bits one).
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = prefix_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length.
///
/// `u64` because a /0 block holds 2^32 addresses.
pub fn block_size(len: u8) -> u64 {
    assert!(len <= MAX_LENGTH, "prefix[{len}] > 32 should never happen.");
    1u64 << (MAX_LENGTH - len)
}

/// Total and usable host counts for a prefix length.
///
/// /32 is a single host and /31 a point-to-point pair per RFC 3021;
/// every shorter prefix reserves the network and broadcast addresses.
pub fn host_counts(len: u8) -> (u64, u64) {
    let total = block_size(len);
    let usable = match len {
        32 => 1,
        31 => 2,
        _ => total - 2,
    };
    (total, usable)
}

/// IPv4 CIDR block: address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|_| de::Error::custom(format!("invalid CIDR: {s}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, ToolError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ToolError::InvalidFormat(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| ToolError::InvalidAddress(parts[0].to_string()))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| ToolError::InvalidFormat(addr_cidr.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(ToolError::InvalidFormat(addr_cidr.to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Check if an IP address falls within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
