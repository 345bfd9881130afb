use crate::{constants::Weight, error::GraphError};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Default integer typer for node indices
pub type DefaultIdx = u32;

/// Node identifier. A handle into the node arena owned by a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `NodeIndex`, used for nodes that are not yet part of a graph.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Location of a node, either on a grid map or on the earth.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum Coordinates {
    Grid { x: i32, y: i32 },
    /// Latitude and longitude in degrees
    Geo { lat: f64, lon: f64 },
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinates::Grid { x, y } => write!(f, "x, y = [{}, {}]", x, y),
            Coordinates::Geo { lat, lon } => write!(f, "lat, lon = [{}, {}]", lat, lon),
        }
    }
}

/// A weighted, directed edge. Undirected connections are stored as two edges.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// A vertex of the graph, uniquely identified by its `key`.
///
/// `data` is an opaque payload the search never looks at. The outgoing edges
/// are kept in insertion order and only reference their targets by index.
#[derive(Debug, Clone)]
pub struct Node<D = ()> {
    pub key: String,
    pub data: Option<D>,
    pub coords: Option<Coordinates>,
    index: NodeIndex,
    edges: Vec<Edge>,
}

impl<D> Node<D> {
    pub fn new(key: impl Into<String>, data: Option<D>, coords: Option<Coordinates>) -> Self {
        Node {
            key: key.into(),
            data,
            coords,
            index: NodeIndex::end(),
            edges: Vec::new(),
        }
    }

    /// Index of this node inside its graph, `NodeIndex::end()` if detached.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the cheapest direct edge to `target`, `None` if not adjacent.
    pub fn cost_to(&self, target: NodeIndex) -> Option<Weight> {
        self.edges
            .iter()
            .filter(|edge| edge.target == target)
            .map(|edge| edge.weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        match self.coords {
            Some(Coordinates::Geo { lat, lon }) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn grid(&self) -> Option<(i32, i32)> {
        match self.coords {
            Some(Coordinates::Grid { x, y }) => Some((x, y)),
            _ => None,
        }
    }
}

impl<D> fmt::Display for Node<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key = {}", self.key)?;
        if let Some(coords) = &self.coords {
            write!(f, " | {}", coords)?;
        }
        write!(f, " | {} neighbors", self.edges.len())
    }
}

/// Graph owning all of its nodes.
///
/// Nodes live in an arena and are looked up by key through a hash registry.
/// Enumeration order of [`Graph::nodes`] is unspecified, use
/// [`Graph::sorted_keys`] for a stable listing.
#[derive(Debug, Clone)]
pub struct Graph<D = ()> {
    nodes: Vec<Node<D>>,
    registry: FxHashMap<String, NodeIndex>,
    num_edges: usize,
}

impl<D> Graph<D> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            registry: FxHashMap::default(),
            num_edges: 0,
        }
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            registry: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
            num_edges: 0,
        }
    }

    /// Adds a new node with the given `key`, payload and coordinates.
    ///
    /// Returns [`GraphError::DuplicateKey`] if a node with the same key exists.
    pub fn add_node(
        &mut self,
        key: impl Into<String>,
        data: Option<D>,
        coords: Option<Coordinates>,
    ) -> Result<NodeIndex, GraphError> {
        self.insert_node(Node::new(key, data, coords))
    }

    pub fn add_plain_node(&mut self, key: impl Into<String>) -> Result<NodeIndex, GraphError> {
        self.add_node(key, None, None)
    }

    pub fn add_grid_node(
        &mut self,
        key: impl Into<String>,
        x: i32,
        y: i32,
    ) -> Result<NodeIndex, GraphError> {
        self.add_node(key, None, Some(Coordinates::Grid { x, y }))
    }

    pub fn add_geo_node(
        &mut self,
        key: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Result<NodeIndex, GraphError> {
        self.add_node(key, None, Some(Coordinates::Geo { lat, lon }))
    }

    /// Adds an already constructed node to the graph.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    pub fn insert_node(&mut self, mut node: Node<D>) -> Result<NodeIndex, GraphError> {
        if self.registry.contains_key(&node.key) {
            return Err(GraphError::DuplicateKey(node.key));
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // A node cloned from another graph keeps edges indexing into that graph
        node.edges.clear();
        node.index = node_idx;

        self.registry.insert(node.key.clone(), node_idx);
        self.nodes.push(node);

        Ok(node_idx)
    }

    /// Add a new `edge` to the graph. Parallel edges are kept.
    ///
    /// **Panics** if the source or target node does not exist
    /// **Panics** if the weight is negative or NaN
    pub fn add_edge(&mut self, edge: Edge) {
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.weight >= 0.0,
            "Edge weight ({}) must be non-negative",
            edge.weight
        );

        self.nodes[edge.source.index()].edges.push(edge);
        self.num_edges += 1;
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Adds a directed, weighted edge from the node `u` to the node `v`.
    pub fn add_directed_edge(&mut self, u: &str, v: &str, cost: Weight) -> Result<(), GraphError> {
        let edge = self.checked_edge(u, v, cost)?;
        self.add_edge(edge);
        Ok(())
    }

    /// Adds an edge from `u` to `v` and one from `v` to `u`, both with `cost`.
    pub fn add_undirected_edge(
        &mut self,
        u: &str,
        v: &str,
        cost: Weight,
    ) -> Result<(), GraphError> {
        let edge = self.checked_edge(u, v, cost)?;
        self.add_edge(edge);
        self.add_edge(edge.reverse());
        Ok(())
    }

    fn checked_edge(&self, u: &str, v: &str, cost: Weight) -> Result<Edge, GraphError> {
        let source = self.try_index_of(u)?;
        let target = self.try_index_of(v)?;
        if cost.is_nan() || cost < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight: cost,
            });
        }
        Ok(Edge::new(source, target, cost))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.registry.contains_key(key)
    }

    /// Returns the number of nodes in the graph
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges in the graph
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.registry.get(key).copied()
    }

    pub fn try_index_of(&self, key: &str) -> Result<NodeIndex, GraphError> {
        self.index_of(key)
            .ok_or_else(|| GraphError::UnknownNode(key.to_string()))
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node<D>> {
        self.nodes.get(node_idx.index())
    }

    pub fn node_by_key(&self, key: &str) -> Option<&Node<D>> {
        self.index_of(key).and_then(|idx| self.node(idx))
    }

    pub fn try_node(&self, key: &str) -> Result<&Node<D>, GraphError> {
        self.node_by_key(key)
            .ok_or_else(|| GraphError::UnknownNode(key.to_string()))
    }

    /// Returns an iterator over all nodes of the graph in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<D>> {
        self.registry.values().map(|idx| &self.nodes[idx.index()])
    }

    /// Keys of all nodes in ascending order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(node_idx.index())
            .map(|node| node.edges.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    /// Weight of the cheapest direct edge from `from` to `to`.
    pub fn edge_cost(&self, from: NodeIndex, to: NodeIndex) -> Option<Weight> {
        self.node(from).and_then(|node| node.cost_to(to))
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.num_edges
        );
    }
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    key: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: Weight,
    #[serde(default)]
    bidir: bool,
}

impl Graph {
    /// Reads a graph from a node file (`key,lat,lon`) and an edge file
    /// (`source,target,weight[,bidir]`). Latitude and longitude may be empty.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!("Reading nodes from {:?}", path_to_nodes);

        let mut g = Graph::new();

        let mut reader = csv::Reader::from_path(path_to_nodes)?;
        for result in reader.deserialize() {
            let record: NodeRecord = result.context("Failed to parse Node")?;
            let coords = match (record.lat, record.lon) {
                (Some(lat), Some(lon)) => Some(Coordinates::Geo { lat, lon }),
                _ => None,
            };
            g.add_node(record.key, None, coords)?;
        }

        info!("Reading edges from {:?}", path_to_edges);
        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result.context("Failed to parse Edge")?;
            if record.bidir {
                g.add_undirected_edge(&record.source, &record.target, record.weight)
            } else {
                g.add_directed_edge(&record.source, &record.target, record.weight)
            }
            .with_context(|| format!("Invalid edge {} -> {}", record.source, record.target))?;
        }

        debug!("Finished reading csv files");
        info!(
            "Graph has {} nodes and {} edges",
            g.count(),
            g.edge_count()
        );
        Ok(g)
    }
}

impl<D> Default for Graph<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns edge in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}

/// Macro to create a detached node with a given key, lat, lon
/// node!("Arad", 46.18, 21.32)
#[macro_export]
macro_rules! node {
    ($key:expr, $lat:expr, $lon:expr) => {
        $crate::graph::Node::new(
            $key,
            None,
            Some($crate::graph::Coordinates::Geo {
                lat: $lat,
                lon: $lon,
            }),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Graph {
        let mut g = Graph::new();
        for key in ["A", "B", "C", "D"] {
            g.add_plain_node(key).unwrap();
        }
        g
    }

    #[test]
    fn read_from_csv() {
        let graph: Graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/nodes.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges.csv"),
        )
        .unwrap();

        assert_eq!(graph.count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let arad = graph.node_by_key("Arad").unwrap();
        assert_eq!(arad.lat_lon(), Some((46.1792414, 21.3150154)));
        assert_eq!(arad.edges().len(), 2);

        let depot = graph.node_by_key("Depot").unwrap();
        assert_eq!(depot.coords, None);
        assert_eq!(depot.edges().len(), 0);
    }

    #[test]
    fn read_from_missing_csv() {
        let result = Graph::from_csv(Path::new("missing_nodes.csv"), Path::new("missing.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn add_duplicate_key() {
        let mut g = abcd();
        let err = g.add_plain_node("A").unwrap_err();

        assert_eq!(err, GraphError::DuplicateKey("A".to_string()));
        assert_eq!(g.count(), 4);
    }

    #[test]
    fn edge_to_unknown_node() {
        let mut g = abcd();

        assert_eq!(
            g.add_directed_edge("A", "X", 1.0),
            Err(GraphError::UnknownNode("X".to_string()))
        );
        assert_eq!(
            g.add_undirected_edge("Y", "A", 1.0),
            Err(GraphError::UnknownNode("Y".to_string()))
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.node_by_key("A").unwrap().edges().is_empty());
    }

    #[test]
    fn invalid_weight() {
        let mut g = abcd();

        assert!(matches!(
            g.add_directed_edge("A", "B", -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_undirected_edge("A", "B", f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn undirected_edge_in_both_directions() {
        let mut g = abcd();
        g.add_undirected_edge("A", "B", 3.0).unwrap();

        let a = g.index_of("A").unwrap();
        let b = g.index_of("B").unwrap();

        assert_eq!(g.edge_cost(a, b), Some(3.0));
        assert_eq!(g.edge_cost(b, a), Some(3.0));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = abcd();
        g.add_directed_edge("A", "B", 2.0).unwrap();
        g.add_directed_edge("A", "B", 1.0).unwrap();

        let a = g.index_of("A").unwrap();
        let b = g.index_of("B").unwrap();

        assert_eq!(g.neighbors_outgoing(a).count(), 2);
        assert_eq!(g.edge_cost(a, b), Some(1.0));
        assert_eq!(g.edge_cost(b, a), None);
    }

    #[test]
    fn edge_macro() {
        let mut g = abcd();
        g.add_edges(edge!(0, 1, 1.0));
        g.add_edge(edge!(2 => 3, 4.0));

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_cost(node_index(1), node_index(0)), Some(1.0));
        assert_eq!(g.edge_cost(node_index(3), node_index(2)), None);
    }

    #[test]
    #[should_panic]
    fn edge_macro_out_of_range() {
        let mut g = abcd();
        g.add_edge(edge!(0 => 7, 1.0));
    }

    #[test]
    fn insert_detached_node() {
        let mut g: Graph = Graph::new();
        let node = node!("Arad", 46.1792414, 21.3150154);
        assert_eq!(node.index(), NodeIndex::end());

        let idx = g.insert_node(node).unwrap();

        assert_eq!(g.node(idx).unwrap().index(), idx);
        assert_eq!(g.node(idx).unwrap().lat_lon(), Some((46.1792414, 21.3150154)));
    }

    #[test]
    fn enumerate_nodes() {
        let g = abcd();

        assert!(g.contains("C"));
        assert!(!g.contains("E"));

        let mut keys: Vec<&str> = g.nodes().map(|n| n.key.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
        assert_eq!(g.sorted_keys(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn payload_is_kept() {
        let mut g: Graph<u8> = Graph::new();
        let idx = g.add_node("A", Some(7), None).unwrap();

        assert_eq!(g.node(idx).unwrap().data, Some(7));
    }
}
