//! costar-core: generic labeled graph + co-star network analysis.
//!
//! A pure Rust library holding directed, labeled adjacency maps and the
//! analyses run over them: BFS shortest-path trees, path reconstruction,
//! reachability gaps, average separation, degree ranking and random walks.
//! No file or terminal I/O lives here; callers build the graph and render
//! the results.

mod error;
mod graph;
mod ranking;
mod traversal;
mod walk;

pub use error::{GraphError, GraphResult};
pub use graph::LabeledGraph;
pub use ranking::{
    degree_ranking, separation_ranking, top_by_average_separation, top_by_in_degree,
    vertices_by_in_degree, DegreeResult,
};
pub use traversal::{
    average_separation, bfs, connection_number, get_path, missing_vertices,
    vertices_by_connection_number,
};
pub use walk::{random_walk, random_walk_thread_rng};
