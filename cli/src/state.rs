use costar_core::{average_separation, bfs, GraphResult};

use crate::load::CostarGraph;

/// What changing the center reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterSummary {
    pub center: String,
    /// Actors reachable from the center, the center excluded.
    pub connected: usize,
    pub total: usize,
    pub average_separation: f64,
}

/// The loaded graph, the current center, and the BFS tree for that center.
///
/// The tree is recomputed whenever the center changes and is otherwise
/// shared by every query against the same center.
pub struct Session {
    graph: CostarGraph,
    center: String,
    tree: CostarGraph,
}

impl Session {
    /// Fails with `NoSuchVertex` if `center` is not an actor in `graph`.
    pub fn new(graph: CostarGraph, center: &str) -> GraphResult<Self> {
        let center = center.to_string();
        let tree = bfs(&graph, &center)?;
        Ok(Self {
            graph,
            center,
            tree,
        })
    }

    pub fn graph(&self) -> &CostarGraph {
        &self.graph
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn tree(&self) -> &CostarGraph {
        &self.tree
    }

    /// Move the center. On failure the previous center stays in place.
    pub fn set_center(&mut self, name: &str) -> GraphResult<CenterSummary> {
        let center = name.to_string();
        let tree = bfs(&self.graph, &center)?;
        log::debug!("center moved from {} to {}", self.center, center);
        self.center = center;
        self.tree = tree;
        self.summary()
    }

    pub fn summary(&self) -> GraphResult<CenterSummary> {
        Ok(CenterSummary {
            center: self.center.clone(),
            connected: self.tree.num_vertices() - 1,
            total: self.graph.num_vertices(),
            average_separation: average_separation(&self.tree, &self.center)?,
        })
    }
}
