//! Calculation result models.

use super::{AddressFamily, Ipv4};
use serde::{Deserialize, Serialize};

/// Computed subnet facts for one input address.
///
/// A pure value object: built once per calculation, never mutated, never
/// shared across requests. Host counts are decimal strings because IPv6
/// blocks routinely exceed the 64-bit range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetResult {
    /// Address family of the input.
    #[serde(rename = "type")]
    pub family: AddressFamily,
    /// The input address, normalized.
    pub ip: String,
    /// Effective prefix length after defaulting.
    pub cidr: u8,
    /// Lowest address in the block.
    pub network_address: String,
    /// Highest address in the block (IPv4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_address: Option<String>,
    /// Dotted mask for IPv4, `/prefix` text for IPv6.
    pub subnet_mask: String,
    /// First assignable host address, when the concept applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_usable: Option<String>,
    /// Last assignable host address, when the concept applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_usable: Option<String>,
    /// Addresses in the block, decimal.
    pub total_hosts: String,
    /// Assignable addresses in the block, decimal (approximate for IPv6).
    pub usable_hosts: String,
}

/// The two halves of one bisected IPv4 block, in ascending address order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitResult {
    pub halves: [Ipv4; 2],
}

impl std::fmt::Display for SplitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, {}", self.halves[0], self.halves[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_result_serde() {
        let split = SplitResult {
            halves: [
                Ipv4::new("192.168.0.0/17").unwrap(),
                Ipv4::new("192.168.128.0/17").unwrap(),
            ],
        };
        let json = serde_json::to_string(&split).unwrap();
        assert_eq!(json, r#"{"halves":["192.168.0.0/17","192.168.128.0/17"]}"#);

        let back: SplitResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, split);
        assert_eq!(split.to_string(), "192.168.0.0/17, 192.168.128.0/17");
    }

    #[test]
    fn test_subnet_result_json_field_names() {
        let result = SubnetResult {
            family: AddressFamily::V6,
            ip: "2001:db8::".to_string(),
            cidr: 64,
            network_address: "2001:db8::".to_string(),
            broadcast_address: None,
            subnet_mask: "/64".to_string(),
            first_usable: None,
            last_usable: None,
            total_hosts: "18446744073709551616".to_string(),
            usable_hosts: "18446744073709551615".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["type"], "IPv6");
        assert_eq!(value["networkAddress"], "2001:db8::");
        assert_eq!(value["subnetMask"], "/64");
        assert_eq!(value["totalHosts"], "18446744073709551616");
        // no broadcast concept for IPv6
        assert!(value.get("broadcastAddress").is_none());
    }
}
