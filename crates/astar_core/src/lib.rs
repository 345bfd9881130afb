//! Crate to find cheapest routes with A*.
//!
//! # Basic usage
//! ```
//! use astar_core::prelude::*;
//!
//! // Build a small map
//! let mut g: Graph = Graph::new();
//! g.add_geo_node("Arad", 46.1792414, 21.3150154).unwrap();
//! g.add_geo_node("Sibiu", 45.7931069, 24.1505932).unwrap();
//! g.add_geo_node("Rimnicu Vilcea", 45.110039, 24.382641).unwrap();
//! g.add_undirected_edge("Arad", "Sibiu", 229.5).unwrap();
//! g.add_undirected_edge("Sibiu", "Rimnicu Vilcea", 80.0).unwrap();
//!
//! // Search, guided by the great-circle distance to the destination
//! let path = find_route(&g, "Arad", "Rimnicu Vilcea", DistanceUnit::Kilometers)
//!     .unwrap()
//!     .expect("Failed to find path");
//!
//! assert_eq!(path.total_cost(), 309.5);
//! for leg in route_legs(&g, &path) {
//!     println!("{} km", leg);
//! }
//!```
//! [`AStar`] allows custom distance and heuristic functions.
//!
//! [`AStar`]: crate::search::astar::AStar
pub mod constants;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
