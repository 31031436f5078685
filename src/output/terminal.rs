//! Terminal rendering for subnet reports and the address grid.

use crate::models::{SplitResult, SubnetResult};
use crate::processing::{CellRole, GridProjection};
use colored::Colorize;
use itertools::Itertools;

/// Left-align a report label into a fixed-width column.
fn label(text: &str) -> String {
    format!("{text:<12}")
}

/// Multi-line textual report for one subnet result.
pub fn subnet_report(result: &SubnetResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}{}", label("Address:"), result.ip.blue().bold()));
    lines.push(format!("{}{}", label("Type:"), result.family));
    lines.push(format!(
        "{}{}",
        label("Network:"),
        format!("{}/{}", result.network_address, result.cidr)
            .blue()
            .bold()
    ));
    lines.push(format!("{}{}", label("Netmask:"), result.subnet_mask));
    if let Some(broadcast) = &result.broadcast_address {
        lines.push(format!("{}{}", label("Broadcast:"), broadcast.red()));
    }
    if let (Some(first), Some(last)) = (&result.first_usable, &result.last_usable) {
        lines.push(format!("{}{} - {}", label("Hosts:"), first.green(), last.green()));
    }
    lines.push(format!("{}{}", label("Total:"), result.total_hosts));
    lines.push(format!("{}{}", label("Usable:"), result.usable_hosts));
    lines.join("\n")
}

/// Two-line report for a CIDR bisection.
pub fn split_report(split: &SplitResult) -> String {
    format!(
        "{}{}\n{}{}",
        label("Lower:"),
        split.halves[0].to_string().blue().bold(),
        label("Upper:"),
        split.halves[1].to_string().blue().bold()
    )
}

/// 16x16 colored cell grid for a projection, one window row per line.
pub fn grid_view(projection: &GridProjection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Window {}{}\n",
        projection.window.bold(),
        if projection.partial { " (partial view)" } else { "" }
    ));
    for chunk in &projection.cells.iter().chunks(16) {
        let line = chunk
            .map(|cell| {
                let tag = format!("{:>3}", cell.index);
                match cell.role {
                    CellRole::NetworkBoundary => tag.on_yellow().black().to_string(),
                    CellRole::GatewayHeuristic => tag.on_green().black().to_string(),
                    CellRole::BroadcastBoundary => tag.on_red().black().to_string(),
                    CellRole::Outside => tag.dimmed().to_string(),
                    CellRole::UsableHost => tag,
                }
            })
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    if let Some(note) = &projection.note {
        out.push_str(&format!("{}\n", note.yellow()));
    }
    out
}
