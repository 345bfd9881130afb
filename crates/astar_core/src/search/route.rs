//! Turning a found [`Path`] into something a person can read.
use std::fmt;

use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
    path::Path,
};

/// One hop of a route with the cost accumulated up to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub total_cost: Weight,
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From {:<15}  to  {:<15} -> Total cost = {:.3}",
            self.from, self.to, self.total_cost
        )
    }
}

fn key_of<D>(g: &Graph<D>, node_idx: NodeIndex) -> String {
    g.node(node_idx)
        .map(|node| node.key.clone())
        .unwrap_or_else(|| node_idx.to_string())
}

/// Legs of `path` from start to destination. Empty if the path never left
/// its start.
pub fn route_legs<D>(g: &Graph<D>, path: &Path) -> Vec<RouteLeg> {
    let mut legs: Vec<RouteLeg> = path
        .iter()
        .filter_map(|step| {
            let previous = step.previous_steps()?;
            Some(RouteLeg {
                from: key_of(g, previous.last_step()),
                to: key_of(g, step.last_step()),
                total_cost: step.total_cost(),
            })
        })
        .collect();
    legs.reverse();
    legs
}

/// Keys of the nodes on `path`, start first.
pub fn route_keys<'g, D>(g: &'g Graph<D>, path: &Path) -> Vec<&'g str> {
    path.nodes()
        .into_iter()
        .filter_map(|node_idx| g.node(node_idx))
        .map(|node| node.key.as_str())
        .collect()
}
