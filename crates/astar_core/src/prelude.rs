//! Re-exports of the most commonly used items in `astar_core`.
pub use crate::constants::Weight;
pub use crate::error::GraphError;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::Node;
pub use crate::graph::NodeIndex;
pub use crate::path::Path;

pub use crate::search;
pub use crate::search::astar::AStar;
pub use crate::search::edge_distance;
pub use crate::search::find_route;
pub use crate::search::route::route_legs;

pub use crate::util::math::straight_line;
pub use crate::util::math::DistanceUnit;
pub use crate::util::test_graphs::{romania_geo, romania_grid};
