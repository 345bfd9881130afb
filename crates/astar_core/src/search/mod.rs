use crate::{
    constants::Weight,
    error::GraphError,
    graph::{Graph, Node},
    path::Path,
    util::math::{straight_line, DistanceUnit},
};

use self::astar::AStar;

pub mod astar;
pub mod route;

/// Exact cost between two direct neighbors: the cheapest edge from `from` to
/// `to`. Infinite for nodes that are not adjacent.
pub fn edge_distance<D>(from: &Node<D>, to: &Node<D>) -> Weight {
    from.cost_to(to.index()).unwrap_or(Weight::INFINITY)
}

/// Searches the cheapest route between the nodes keyed `start` and
/// `destination`, estimating the remaining cost by great-circle distance.
///
/// Only optimal if edge weights are at least the great-circle distance in
/// `unit` between their endpoints.
pub fn find_route<D>(
    g: &Graph<D>,
    start: &str,
    destination: &str,
    unit: DistanceUnit,
) -> Result<Option<Path>, GraphError> {
    let source = g.try_index_of(start)?;
    let target = g.try_index_of(destination)?;
    let dst = g.try_node(destination)?;

    let mut astar = AStar::new(g);
    Ok(astar.search(source, target, edge_distance, |node| {
        straight_line(node, dst, unit)
    }))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<crate::graph::DefaultIdx>,
    expected_weight: Weight,
    path: Option<Path>,
) {
    let path = path.expect("Expected a path");
    let expected: Vec<crate::graph::NodeIndex> =
        expected_path.into_iter().map(Into::into).collect();

    assert_eq!(expected, path.nodes());
    approx::assert_abs_diff_eq!(expected_weight, path.total_cost(), epsilon = 1e-9);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<Path>) {
    assert!(
        path.is_none(),
        "Expected no path, got {}",
        path.map(|p| p.to_string()).unwrap_or_default()
    );
}
