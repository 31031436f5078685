//! IPv6 subnet arithmetic primitives.
//!
//! The 128-bit address space exceeds native integer range for host counts
//! at short prefixes, so counting uses [`BigUint`]. Address masking works
//! on the 16-byte form directly.

use num_bigint::BigUint;
use std::net::Ipv6Addr;

/// Maximum IPv6 prefix length (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// 16-byte subnet mask for a prefix length.
///
/// Full `0xFF` bytes for each complete 8-bit group inside the prefix, a
/// partial byte at the boundary, zeros beyond.
pub fn prefix_mask_bytes(len: u8) -> [u8; 16] {
    assert!(len <= MAX_LENGTH, "prefix[{len}] > 128 should never happen.");
    let len = len as u16;
    let mut mask = [0u8; 16];
    for (i, byte) in mask.iter_mut().enumerate() {
        let bit_offset = (i as u16) * 8;
        if len >= bit_offset + 8 {
            *byte = 0xFF;
        } else if len > bit_offset {
            *byte = 0xFF << (8 - (len - bit_offset));
        }
    }
    mask
}

/// Lowest address of the block containing `addr` (all host bits zero).
pub fn network_addr(addr: Ipv6Addr, len: u8) -> Ipv6Addr {
    let mask = prefix_mask_bytes(len);
    let mut octets = addr.octets();
    for (byte, m) in octets.iter_mut().zip(mask.iter()) {
        *byte &= m;
    }
    Ipv6Addr::from(octets)
}

/// Number of addresses in a block of the given prefix length: 2^(128-len).
pub fn block_size(len: u8) -> BigUint {
    assert!(len <= MAX_LENGTH, "prefix[{len}] > 128 should never happen.");
    BigUint::from(1u8) << ((MAX_LENGTH - len) as usize)
}

/// Approximate usable count: IPv6 has no broadcast address, so only the
/// network address itself is deducted. Not an exact reserved-address count.
pub fn usable_hosts(total: &BigUint) -> BigUint {
    let one = BigUint::from(1u8);
    if total > &one {
        total - &one
    } else {
        one
    }
}
