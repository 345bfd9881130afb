//! Implementation of the A* search algorithm.
use log::{debug, info, trace};
use rustc_hash::FxHashSet;

use crate::{
    constants::Weight,
    graph::{Graph, Node, NodeIndex},
    path::Path,
    priority_queue::PriorityQueue,
    statistics::SearchStats,
};

/// A* search over a borrowed, read-only [`Graph`].
///
/// Every call to [`AStar::search`] starts from scratch with a fresh queue and
/// closed set, so one engine can answer many queries. Concurrent searches on
/// the same graph need one engine each.
pub struct AStar<'a, D = ()> {
    pub stats: SearchStats,
    /// Nodes whose shortest path was finalized during the last search
    pub closed: FxHashSet<NodeIndex>,
    g: &'a Graph<D>,
}

impl<'a, D> AStar<'a, D> {
    pub fn new(g: &'a Graph<D>) -> Self {
        AStar {
            g,
            stats: SearchStats::default(),
            closed: FxHashSet::default(),
        }
    }

    /// Finds the cheapest path from `source` to `target`.
    ///
    /// `distance(a, b)` must return the exact cost of moving from `a` to its
    /// direct neighbor `b`; it is never called for other pairs. `heuristic(n)`
    /// estimates the remaining cost from `n` to `target` and must be 0 at
    /// `target`. The result is optimal if the heuristic never overestimates
    /// and is consistent. This is not checked.
    ///
    /// Returns `None` if `target` is unreachable.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        distance: impl Fn(&Node<D>, &Node<D>) -> Weight,
        heuristic: impl Fn(&Node<D>) -> Weight,
    ) -> Option<Path> {
        self.search_traced(source, target, distance, heuristic, |_| {})
    }

    /// Same as [`AStar::search`], calling `on_iteration` with the open set
    /// right before every dequeue.
    pub fn search_traced(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        distance: impl Fn(&Node<D>, &Node<D>) -> Weight,
        heuristic: impl Fn(&Node<D>) -> Weight,
        mut on_iteration: impl FnMut(&PriorityQueue<Path>),
    ) -> Option<Path> {
        info!("BEGIN ASTAR SEARCH from {:?} to {:?}", source, target);
        self.stats.init();
        self.closed.clear();

        let mut queue = PriorityQueue::new();
        queue.enqueue(0.0, Path::new(source));

        loop {
            on_iteration(&queue);

            let Some((_, path)) = queue.dequeue_min() else {
                break;
            };
            let node_idx = path.last_step();

            if self.closed.contains(&node_idx) {
                self.stats.stale_skipped += 1;
                continue;
            }

            if node_idx == target {
                self.stats.finish();
                debug!("Path found: {}", path);
                info!("{}, weight: {}", self.stats, path.total_cost());
                return Some(path);
            }

            self.closed.insert(node_idx);
            self.stats.nodes_settled += 1;

            let Some(node) = self.g.node(node_idx) else {
                continue;
            };
            trace!("Settled {} at cost {}", node.key, path.total_cost());

            for edge in node.edges() {
                let Some(neighbor) = self.g.node(edge.target) else {
                    continue;
                };
                let new_path = path.add_step(edge.target, distance(node, neighbor));
                let priority = new_path.total_cost() + heuristic(neighbor);
                queue.enqueue(priority, new_path);
            }

            self.stats.observe_queue_len(queue.len());
        }

        self.stats.finish();
        info!(
            "No path found: {:?}/{} nodes settled",
            self.stats.duration.unwrap_or_default(),
            self.stats.nodes_settled
        );
        None
    }
}
