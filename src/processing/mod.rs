//! Pure calculation layer.
//!
//! Every function here is synchronous and side-effect-free: subnet facts,
//! single-level CIDR bisection, and the 256-cell grid projection.

mod calculate;
mod grid;
mod split;

pub use calculate::calculate_subnet;
pub use grid::{project_grid, CellRole, GridCell, GridProjection, GRID_SIZE};
pub use split::calculate_cidr_split;
