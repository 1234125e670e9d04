use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};
use crate::graph::LabeledGraph;

/// Breadth-first shortest-path tree rooted at `source`.
///
/// The tree holds every vertex reachable from `source`. Each non-source
/// vertex has exactly one outgoing arc, pointing at the vertex it was first
/// discovered from, labeled with the graph's label for (vertex, parent).
/// The source has no outgoing arc, so following out-arcs from any vertex
/// ends at the root.
///
/// Tree membership doubles as the visited set: each vertex is enqueued at
/// most once, at its minimum hop distance.
pub fn bfs<V, E>(graph: &LabeledGraph<V, E>, source: &V) -> GraphResult<LabeledGraph<V, E>>
where
    V: Eq + Hash + Clone + Debug,
    E: Clone,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::no_such_vertex(source));
    }

    let mut tree = LabeledGraph::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    tree.insert_vertex(source.clone());
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.out_neighbors(current)? {
            if tree.contains_vertex(neighbor) {
                continue;
            }
            let label = parent_label(graph, neighbor, current)?;
            tree.insert_vertex(neighbor.clone());
            tree.insert_directed(neighbor, current, label)?;
            queue.push_back(neighbor);
        }
    }

    log::debug!(
        "bfs from {:?}: {}/{} vertices reachable",
        source,
        tree.num_vertices(),
        graph.num_vertices()
    );
    Ok(tree)
}

/// Label for the tree arc child → parent. Falls back to parent → child when
/// the graph is directed and the reverse arc is absent.
fn parent_label<V, E>(graph: &LabeledGraph<V, E>, child: &V, parent: &V) -> GraphResult<E>
where
    V: Eq + Hash + Clone + Debug,
    E: Clone,
{
    if graph.has_edge(child, parent)? {
        graph.label(child, parent).cloned()
    } else {
        graph.label(parent, child).cloned()
    }
}

/// Walk out-arcs from `v` to the root of a shortest-path tree.
///
/// Returns `v` first and the root last; the root alone yields `[root]`.
/// Fails with `NoSuchVertex` if `v` is not in the tree (unreachable from the
/// BFS source).
pub fn get_path<V, E>(tree: &LabeledGraph<V, E>, v: &V) -> GraphResult<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    let mut path = vec![v.clone()];
    let mut current = v;

    // A well-formed tree never needs more hops than it has vertices
    while path.len() <= tree.num_vertices() {
        match tree.out_neighbors(current)?.next() {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }

    Ok(path)
}

/// Hop distance from `v` to the tree root.
pub fn connection_number<V, E>(tree: &LabeledGraph<V, E>, v: &V) -> GraphResult<usize>
where
    V: Eq + Hash + Clone + Debug,
{
    Ok(get_path(tree, v)?.len() - 1)
}

/// Vertices of `graph` that are absent from `tree`: those with infinite
/// separation from the tree's root.
pub fn missing_vertices<V, E>(graph: &LabeledGraph<V, E>, tree: &LabeledGraph<V, E>) -> HashSet<V>
where
    V: Eq + Hash + Clone + Debug,
{
    graph
        .vertices()
        .filter(|v| !tree.contains_vertex(v))
        .cloned()
        .collect()
}

/// Average separation of a shortest-path tree.
///
/// Only leaves (in-degree 0) start a walk. Each walk climbs toward `root`
/// with a running depth counter and adds the counter at every vertex it
/// passes, the root included, so a leaf at depth d contributes
/// 0 + 1 + ... + d. The total is divided by the tree's vertex count, so
/// the result is not the mean hop distance to the root.
pub fn average_separation<V, E>(tree: &LabeledGraph<V, E>, root: &V) -> GraphResult<f64>
where
    V: Eq + Hash + Clone + Debug,
{
    if !tree.contains_vertex(root) {
        return Err(GraphError::no_such_vertex(root));
    }
    let n = tree.num_vertices();
    if n <= 1 {
        return Ok(0.0);
    }

    let mut total: u64 = 0;
    for v in tree.vertices() {
        if tree.in_degree(v)? == 0 {
            total += leaf_separation(tree, v, root)?;
        }
    }

    Ok(total as f64 / n as f64)
}

fn leaf_separation<V, E>(tree: &LabeledGraph<V, E>, leaf: &V, root: &V) -> GraphResult<u64>
where
    V: Eq + Hash + Clone + Debug,
{
    let limit = tree.num_vertices() as u64;
    let mut depth: u64 = 0;
    let mut sum: u64 = 0;
    let mut current = leaf;

    loop {
        sum += depth;
        if current == root || depth >= limit {
            break;
        }
        match tree.out_neighbors(current)?.next() {
            Some(parent) => {
                current = parent;
                depth += 1;
            }
            None => break,
        }
    }

    Ok(sum)
}

/// Every tree vertex with its connection number, nearest first.
///
/// Vertices at equal distance keep the tree's iteration order.
pub fn vertices_by_connection_number<V, E>(tree: &LabeledGraph<V, E>) -> GraphResult<Vec<(V, usize)>>
where
    V: Eq + Hash + Clone + Debug,
{
    let mut ranked = tree
        .vertices()
        .map(|v| connection_number(tree, v).map(|distance| (v.clone(), distance)))
        .collect::<GraphResult<Vec<_>>>()?;
    ranked.sort_by_key(|(_, distance)| *distance);
    Ok(ranked)
}
