//! Grid projection: map a subnet result onto a fixed 256-cell address grid.
//!
//! The grid is a visualization aid. It always shows one 256-address window:
//! the /24 containing the IPv4 network address, or the /120 slice of the
//! IPv6 network address. Pure derivation, recomputed on every input change.

use crate::models::{ipv4, AddressFamily, SubnetResult};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Number of cells in the projection window.
pub const GRID_SIZE: usize = 256;

/// Classification of one grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CellRole {
    /// Window offset outside the subnet's address range.
    Outside,
    /// The subnet's network address.
    NetworkBoundary,
    /// First usable address, conventionally the router. A display
    /// convention only, not a protocol fact.
    GatewayHeuristic,
    /// The subnet's broadcast address (IPv4 only).
    BroadcastBoundary,
    /// Any other address inside the subnet.
    UsableHost,
}

/// One cell of the 256-address window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub address: String,
    pub role: CellRole,
}

/// A projected window plus context for the caller's rendering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridProjection {
    /// The 256-address window shown, CIDR text.
    pub window: String,
    /// True when the subnet extends beyond the window.
    pub partial: bool,
    /// Set when `partial`; explains what the window does and does not show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub cells: Vec<GridCell>,
}

/// Project a subnet result onto its natural 256-cell window.
///
/// Total over any valid [`SubnetResult`]; the network address text is
/// trusted to be the calculator's own output.
pub fn project_grid(result: &SubnetResult) -> GridProjection {
    match result.family {
        AddressFamily::V4 => project_ipv4(result),
        AddressFamily::V6 => project_ipv6(result),
    }
}

fn project_ipv4(result: &SubnetResult) -> GridProjection {
    let network: Ipv4Addr = result
        .network_address
        .parse()
        .unwrap_or_else(|e| panic!("Bad network address {}: {e}", result.network_address));
    let net = u32::from(network);
    let bcast = u32::from(ipv4::broadcast_addr(network, result.cidr));

    // Window: the /24 block containing the network address.
    let base = net & 0xFFFF_FF00;
    let partial = result.cidr < 24;

    let cells = (0..GRID_SIZE)
        .map(|i| {
            let bits = base + i as u32;
            let role = if bits == net {
                CellRole::NetworkBoundary
            } else if bits == bcast {
                CellRole::BroadcastBoundary
            } else if result.cidr < 31 && bits == net + 1 {
                CellRole::GatewayHeuristic
            } else if bits < net || bits > bcast {
                CellRole::Outside
            } else {
                CellRole::UsableHost
            };
            GridCell {
                index: i,
                address: Ipv4Addr::from(bits).to_string(),
                role,
            }
        })
        .collect();

    GridProjection {
        window: format!("{}/24", Ipv4Addr::from(base)),
        partial,
        note: partial.then(|| {
            format!(
                "/{} spans multiple /24 blocks; showing only the /24 containing the network address",
                result.cidr
            )
        }),
        cells,
    }
}

fn project_ipv6(result: &SubnetResult) -> GridProjection {
    let network: Ipv6Addr = result
        .network_address
        .parse()
        .unwrap_or_else(|e| panic!("Bad network address {}: {e}", result.network_address));

    // Window: the /120 slice with the last byte zeroed. No broadcast and no
    // outside concept for IPv6.
    let mut window = network.octets();
    window[15] = 0;

    let cells = (0..GRID_SIZE)
        .map(|i| {
            let mut octets = window;
            octets[15] = i as u8;
            let role = match i {
                0 => CellRole::NetworkBoundary,
                1 => CellRole::GatewayHeuristic,
                _ => CellRole::UsableHost,
            };
            GridCell {
                index: i,
                address: Ipv6Addr::from(octets).to_string(),
                role,
            }
        })
        .collect();

    let partial = result.cidr < 120;
    GridProjection {
        window: format!("{}/120", Ipv6Addr::from(window)),
        partial,
        note: partial.then(|| {
            format!(
                "/{} spans multiple /120 slices; showing only the slice at the network address",
                result.cidr
            )
        }),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate_subnet;

    fn roles(projection: &GridProjection) -> Vec<(usize, CellRole)> {
        projection
            .cells
            .iter()
            .filter(|c| c.role != CellRole::UsableHost && c.role != CellRole::Outside)
            .map(|c| (c.index, c.role))
            .collect()
    }

    #[test]
    fn test_full_24_window() {
        let result = calculate_subnet("192.168.1.0/24").unwrap();
        let projection = project_grid(&result);

        assert_eq!(projection.window, "192.168.1.0/24");
        assert!(!projection.partial);
        assert_eq!(projection.note, None);
        assert_eq!(projection.cells.len(), GRID_SIZE);
        assert_eq!(
            roles(&projection),
            vec![
                (0, CellRole::NetworkBoundary),
                (1, CellRole::GatewayHeuristic),
                (255, CellRole::BroadcastBoundary),
            ]
        );
        assert_eq!(projection.cells[0].address, "192.168.1.0");
        assert_eq!(projection.cells[255].address, "192.168.1.255");
        // nothing outside a subnet that fills its window
        assert!(projection.cells.iter().all(|c| c.role != CellRole::Outside));
    }

    #[test]
    fn test_narrow_subnet_has_outside_cells() {
        let result = calculate_subnet("192.168.1.64/26").unwrap();
        let projection = project_grid(&result);

        assert!(!projection.partial);
        assert_eq!(
            roles(&projection),
            vec![
                (64, CellRole::NetworkBoundary),
                (65, CellRole::GatewayHeuristic),
                (127, CellRole::BroadcastBoundary),
            ]
        );
        for cell in &projection.cells {
            if cell.index < 64 || cell.index > 127 {
                assert_eq!(cell.role, CellRole::Outside, "index {}", cell.index);
            } else {
                assert_ne!(cell.role, CellRole::Outside, "index {}", cell.index);
            }
        }
    }

    #[test]
    fn test_wide_subnet_is_partial() {
        let result = calculate_subnet("10.20.0.0/16").unwrap();
        let projection = project_grid(&result);

        assert_eq!(projection.window, "10.20.0.0/24");
        assert!(projection.partial);
        assert!(projection.note.is_some());
        // broadcast (10.20.255.255) lies beyond the window
        assert_eq!(
            roles(&projection),
            vec![
                (0, CellRole::NetworkBoundary),
                (1, CellRole::GatewayHeuristic),
            ]
        );
        // every window offset is inside the block
        assert!(projection.cells.iter().all(|c| c.role != CellRole::Outside));
    }

    #[test]
    fn test_slash_31_no_gateway() {
        let result = calculate_subnet("10.0.0.4/31").unwrap();
        let projection = project_grid(&result);

        assert_eq!(
            roles(&projection),
            vec![
                (4, CellRole::NetworkBoundary),
                (5, CellRole::BroadcastBoundary),
            ]
        );
    }

    #[test]
    fn test_slash_32_single_cell() {
        let result = calculate_subnet("10.0.0.9/32").unwrap();
        let projection = project_grid(&result);

        assert_eq!(roles(&projection), vec![(9, CellRole::NetworkBoundary)]);
        let outside = projection
            .cells
            .iter()
            .filter(|c| c.role == CellRole::Outside)
            .count();
        assert_eq!(outside, 255);
    }

    #[test]
    fn test_ipv6_window() {
        let result = calculate_subnet("2001:db8::/64").unwrap();
        let projection = project_grid(&result);

        assert_eq!(projection.window, "2001:db8::/120");
        assert!(projection.partial);
        assert_eq!(projection.cells.len(), GRID_SIZE);
        assert_eq!(projection.cells[0].role, CellRole::NetworkBoundary);
        assert_eq!(projection.cells[1].role, CellRole::GatewayHeuristic);
        assert_eq!(projection.cells[1].address, "2001:db8::1");
        assert_eq!(projection.cells[255].role, CellRole::UsableHost);
        assert_eq!(projection.cells[255].address, "2001:db8::ff");
        assert!(projection
            .cells
            .iter()
            .all(|c| c.role != CellRole::Outside && c.role != CellRole::BroadcastBoundary));
    }

    #[test]
    fn test_ipv6_full_slice_not_partial() {
        let result = calculate_subnet("2001:db8::ab00/120").unwrap();
        let projection = project_grid(&result);

        assert_eq!(projection.window, "2001:db8::ab00/120");
        assert!(!projection.partial);
        assert_eq!(projection.cells[16].address, "2001:db8::ab10");
    }
}
