use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building a [`Graph`](crate::graph::Graph).
///
/// A failing call leaves everything committed before it in place; nothing is
/// rolled back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("there already exists a node in the graph with key `{0}`")]
    DuplicateKey(String),

    #[error("node `{0}` is not a member of the graph")]
    UnknownNode(String),

    #[error("edge `{from}` -> `{to}` has invalid weight {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
}
