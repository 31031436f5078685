//! Subnet calculation: family dispatch and edge-case policy.

use crate::error::ToolError;
use crate::models::{ipv4, ipv6, split_cidr, AddressFamily, ParsedAddress, SubnetResult};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Calculate subnet facts for `"<address>"` or `"<address>/<prefix>"` input.
///
/// The prefix is read from its leading digits; a missing, digit-free, or
/// out-of-range prefix falls back to the family default (/24 for IPv4,
/// /64 for IPv6) rather than failing. An invalid
/// address is always [`ToolError::InvalidAddress`]; a malformed address is
/// never substituted with a default.
pub fn calculate_subnet(input: &str) -> Result<SubnetResult, ToolError> {
    let (addr_text, prefix_text) =
        split_cidr(input).map_err(|_| ToolError::InvalidAddress(input.trim().to_string()))?;
    let parsed = ParsedAddress::parse(addr_text)?;
    let prefix = resolve_prefix(parsed.family(), prefix_text);
    log::debug!("calculate_subnet({input}) => {parsed}/{prefix}");

    Ok(match parsed.addr {
        IpAddr::V4(addr) => calculate_ipv4(addr, prefix),
        IpAddr::V6(addr) => calculate_ipv6(addr, prefix),
    })
}

/// Effective prefix for the family. Leading digits count and trailing
/// junk is ignored ("30abc" reads as /30); anything missing, digit-free,
/// or beyond the family maximum becomes the default.
fn resolve_prefix(family: AddressFamily, prefix_text: Option<&str>) -> u8 {
    let digits: Option<String> = prefix_text.map(|p| {
        p.trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect()
    });
    match digits.and_then(|d| d.parse::<u8>().ok()) {
        Some(p) if p <= family.max_prefix() => p,
        _ => family.default_prefix(),
    }
}

fn calculate_ipv4(addr: Ipv4Addr, prefix: u8) -> SubnetResult {
    let network = ipv4::network_addr(addr, prefix);
    let broadcast = ipv4::broadcast_addr(addr, prefix);
    let mask = Ipv4Addr::from(ipv4::prefix_mask(prefix));
    let (total, usable) = ipv4::host_counts(prefix);

    // /32 is the single address itself; /31 is a point-to-point pair where
    // both addresses are assignable (RFC 3021). Shorter prefixes exclude
    // the network and broadcast addresses.
    let (first, last) = match prefix {
        32 => (network, network),
        31 => (network, broadcast),
        _ => (
            Ipv4Addr::from(u32::from(network) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
        ),
    };

    SubnetResult {
        family: AddressFamily::V4,
        ip: addr.to_string(),
        cidr: prefix,
        network_address: network.to_string(),
        broadcast_address: Some(broadcast.to_string()),
        subnet_mask: mask.to_string(),
        first_usable: Some(first.to_string()),
        last_usable: Some(last.to_string()),
        total_hosts: total.to_string(),
        usable_hosts: usable.to_string(),
    }
}

fn calculate_ipv6(addr: Ipv6Addr, prefix: u8) -> SubnetResult {
    let network = ipv6::network_addr(addr, prefix);
    let total = ipv6::block_size(prefix);
    let usable = ipv6::usable_hosts(&total);

    // No broadcast address and no usable range: IPv6 reports the network
    // address, the /prefix mask text, and the (approximate) counts only.
    SubnetResult {
        family: AddressFamily::V6,
        ip: addr.to_string(),
        cidr: prefix,
        network_address: network.to_string(),
        broadcast_address: None,
        subnet_mask: format!("/{prefix}"),
        first_usable: None,
        last_usable: None,
        total_hosts: total.to_string(),
        usable_hosts: usable.to_string(),
    }
}
