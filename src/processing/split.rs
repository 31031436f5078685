//! Single-level CIDR bisection.

use crate::error::ToolError;
use crate::models::{ipv4, split_cidr, Ipv4, ParsedAddress, SplitResult};
use std::net::{IpAddr, Ipv4Addr};

/// Split `"<address>/<prefix>"` into the two child blocks one prefix level
/// deeper, in ascending address order.
///
/// The input must carry an explicit `/prefix` ([`ToolError::InvalidFormat`]
/// otherwise). Splitting a block already at the family maximum is
/// [`ToolError::CannotSplit`]; the IPv6 path is reported as
/// [`ToolError::Unsupported`] rather than computed. Splitting further than
/// one level means applying this repeatedly.
pub fn calculate_cidr_split(input: &str) -> Result<SplitResult, ToolError> {
    let input = input.trim();
    if input.matches('/').count() != 1 {
        return Err(ToolError::InvalidFormat(input.to_string()));
    }
    let (addr_text, prefix_text) = split_cidr(input)?;
    let parsed = ParsedAddress::parse(addr_text)?;
    let family = parsed.family();

    let prefix = prefix_text
        .unwrap_or("")
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= family.max_prefix())
        .ok_or_else(|| ToolError::InvalidFormat(input.to_string()))?;
    if prefix == family.max_prefix() {
        return Err(ToolError::CannotSplit(prefix));
    }

    match parsed.addr {
        IpAddr::V4(addr) => {
            let new_prefix = prefix + 1;
            let lower = ipv4::network_addr(addr, prefix);
            // Upper half starts one child-block size above the lower half;
            // the child block fits inside the parent, so this cannot wrap.
            let upper = Ipv4Addr::from(u32::from(lower) + (1u32 << (32 - new_prefix)));
            log::debug!("calculate_cidr_split({input}) => {lower}/{new_prefix} + {upper}/{new_prefix}");
            Ok(SplitResult {
                halves: [
                    Ipv4 { addr: lower, mask: new_prefix },
                    Ipv4 { addr: upper, mask: new_prefix },
                ],
            })
        }
        IpAddr::V6(_) => Err(ToolError::Unsupported(
            "IPv6 CIDR split is not implemented".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_16() {
        let split = calculate_cidr_split("192.168.0.0/16").unwrap();
        assert_eq!(split.halves[0].to_string(), "192.168.0.0/17");
        assert_eq!(split.halves[1].to_string(), "192.168.128.0/17");
    }

    #[test]
    fn test_split_normalizes_host_bits() {
        // input is not a network address; the parent network is derived first
        let split = calculate_cidr_split("10.0.0.77/24").unwrap();
        assert_eq!(split.halves[0].to_string(), "10.0.0.0/25");
        assert_eq!(split.halves[1].to_string(), "10.0.0.128/25");
    }

    #[test]
    fn test_split_31_yields_two_singles() {
        let split = calculate_cidr_split("10.0.0.4/31").unwrap();
        assert_eq!(split.halves[0].to_string(), "10.0.0.4/32");
        assert_eq!(split.halves[1].to_string(), "10.0.0.5/32");
    }

    #[test]
    fn test_split_0() {
        let split = calculate_cidr_split("0.0.0.0/0").unwrap();
        assert_eq!(split.halves[0].to_string(), "0.0.0.0/1");
        assert_eq!(split.halves[1].to_string(), "128.0.0.0/1");
    }

    #[test]
    fn test_halves_are_ordered_and_cover_parent() {
        let split = calculate_cidr_split("172.16.32.0/19").unwrap();
        let [a, b] = split.halves;
        assert!(a.addr < b.addr);
        assert_eq!(a.lo(), Ipv4::new("172.16.32.0/19").unwrap().lo());
        assert_eq!(b.hi(), Ipv4::new("172.16.32.0/19").unwrap().hi());
        // contiguous: upper half starts right after the lower half ends
        assert_eq!(u32::from(a.hi()) + 1, u32::from(b.lo()));
    }

    #[test]
    fn test_cannot_split_32() {
        assert_eq!(
            calculate_cidr_split("10.0.0.1/32").unwrap_err(),
            ToolError::CannotSplit(32)
        );
    }

    #[test]
    fn test_ipv6_split_unsupported() {
        assert_eq!(
            calculate_cidr_split("2001:db8::/64").unwrap_err(),
            ToolError::Unsupported("IPv6 CIDR split is not implemented".to_string())
        );
        assert_eq!(
            calculate_cidr_split("2001:db8::1/128").unwrap_err(),
            ToolError::CannotSplit(128)
        );
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            calculate_cidr_split("192.168.0.0").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
        assert!(matches!(
            calculate_cidr_split("192.168.0.0/16/2").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
        assert!(matches!(
            calculate_cidr_split("192.168.0.0/abc").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
        assert!(matches!(
            calculate_cidr_split("192.168.0.0/40").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
        assert!(matches!(
            calculate_cidr_split("300.0.0.0/16").unwrap_err(),
            ToolError::InvalidAddress(_)
        ));
    }
}
