use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};

/// In-memory labeled graph: directed adjacency maps + tracked in-neighbors.
///
/// Directed arcs are the only storage primitive. `outgoing[u][v]` holds the
/// label of u → v, `incoming[v]` holds every u with an arc into v. An arc
/// between a given ordered pair exists at most once, so degrees count
/// distinct neighbors.
#[derive(Debug, Clone)]
pub struct LabeledGraph<V, E> {
    /// Vertices in insertion order, for stable iteration.
    order: Vec<V>,
    outgoing: HashMap<V, HashMap<V, E>>,
    incoming: HashMap<V, HashSet<V>>,
}

impl<V, E> LabeledGraph<V, E> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            order: Vec::with_capacity(vertex_count),
            outgoing: HashMap::with_capacity(vertex_count),
            incoming: HashMap::with_capacity(vertex_count),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    /// Number of directed arcs. An undirected edge counts twice.
    pub fn num_edges(&self) -> usize {
        self.outgoing.values().map(|m| m.len()).sum()
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }
}

impl<V, E> LabeledGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Add a vertex. Returns false (and changes nothing) if it already exists.
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.outgoing.contains_key(&v) {
            return false;
        }
        self.outgoing.insert(v.clone(), HashMap::new());
        self.incoming.insert(v.clone(), HashSet::new());
        self.order.push(v);
        true
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.outgoing.contains_key(v)
    }

    /// Create or overwrite the arc u → v. Returns the label it replaced.
    ///
    /// Does not touch v → u.
    pub fn insert_directed(&mut self, u: &V, v: &V, label: E) -> GraphResult<Option<E>> {
        self.require(v)?;
        let out = self
            .outgoing
            .get_mut(u)
            .ok_or_else(|| GraphError::no_such_vertex(u))?;
        let previous = out.insert(v.clone(), label);
        if previous.is_none() {
            if let Some(inc) = self.incoming.get_mut(v) {
                inc.insert(u.clone());
            }
        }
        Ok(previous)
    }

    /// Whether the arc u → v exists. Fails if either endpoint is absent.
    pub fn has_edge(&self, u: &V, v: &V) -> GraphResult<bool> {
        self.require(v)?;
        Ok(self.out_map(u)?.contains_key(v))
    }

    /// Label of the arc u → v.
    pub fn label(&self, u: &V, v: &V) -> GraphResult<&E> {
        self.require(v)?;
        self.out_map(u)?
            .get(v)
            .ok_or_else(|| GraphError::not_found(u, v))
    }

    pub fn out_neighbors(&self, v: &V) -> GraphResult<impl Iterator<Item = &V> + '_> {
        Ok(self.out_map(v)?.keys())
    }

    /// Outgoing arcs of `v` as (neighbor, label) pairs.
    pub fn out_edges(&self, v: &V) -> GraphResult<impl Iterator<Item = (&V, &E)> + '_> {
        Ok(self.out_map(v)?.iter())
    }

    pub fn in_neighbors(&self, v: &V) -> GraphResult<impl Iterator<Item = &V> + '_> {
        Ok(self.in_set(v)?.iter())
    }

    pub fn out_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.out_map(v)?.len())
    }

    pub fn in_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.in_set(v)?.len())
    }

    fn require(&self, v: &V) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::no_such_vertex(v))
        }
    }

    fn out_map(&self, v: &V) -> GraphResult<&HashMap<V, E>> {
        self.outgoing
            .get(v)
            .ok_or_else(|| GraphError::no_such_vertex(v))
    }

    fn in_set(&self, v: &V) -> GraphResult<&HashSet<V>> {
        self.incoming
            .get(v)
            .ok_or_else(|| GraphError::no_such_vertex(v))
    }
}

impl<V, E> LabeledGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Clone,
{
    /// Create or overwrite both u → v and v → u with the same label.
    pub fn insert_undirected(&mut self, u: &V, v: &V, label: E) -> GraphResult<()> {
        self.require(u)?;
        self.require(v)?;
        self.insert_directed(u, v, label.clone())?;
        self.insert_directed(v, u, label)?;
        Ok(())
    }
}

impl<V, E> Default for LabeledGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn movies(titles: &[&str]) -> BTreeSet<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    fn cast(names: &[&str]) -> LabeledGraph<String, BTreeSet<String>> {
        let mut g = LabeledGraph::new();
        for n in names {
            g.insert_vertex(n.to_string());
        }
        g
    }

    #[test]
    fn test_insert_vertex_idempotent() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        assert!(g.insert_vertex(1));
        assert!(!g.insert_vertex(1));
        assert_eq!(g.num_vertices(), 1);
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let g = cast(&["C", "A", "B"]);
        let order: Vec<&str> = g.vertices().map(|v| v.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_directed_is_one_way() {
        let mut g = cast(&["A", "B"]);
        let (a, b) = ("A".to_string(), "B".to_string());
        g.insert_directed(&a, &b, movies(&["M1"])).unwrap();
        assert_eq!(g.has_edge(&a, &b), Ok(true));
        assert_eq!(g.has_edge(&b, &a), Ok(false));
        assert_eq!(g.out_degree(&a).unwrap(), 1);
        assert_eq!(g.in_degree(&a).unwrap(), 0);
        assert_eq!(g.in_degree(&b).unwrap(), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_undirected_reinsert_overwrites() {
        let mut g = cast(&["A", "B"]);
        let (a, b) = ("A".to_string(), "B".to_string());
        g.insert_undirected(&a, &b, movies(&["M1"])).unwrap();
        g.insert_undirected(&a, &b, movies(&["M1", "M2"])).unwrap();

        assert_eq!(g.has_edge(&a, &b), Ok(true));
        assert_eq!(g.label(&a, &b).unwrap(), &movies(&["M1", "M2"]));
        assert_eq!(g.label(&b, &a).unwrap(), &movies(&["M1", "M2"]));
        assert_eq!(g.out_degree(&a).unwrap(), 1);
        assert_eq!(g.in_degree(&a).unwrap(), 1);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_insert_directed_returns_replaced_label() {
        let mut g: LabeledGraph<u64, &str> = LabeledGraph::new();
        g.insert_vertex(0);
        g.insert_vertex(1);
        assert_eq!(g.insert_directed(&0, &1, "first").unwrap(), None);
        assert_eq!(g.insert_directed(&0, &1, "second").unwrap(), Some("first"));
        assert_eq!(g.label(&0, &1), Ok(&"second"));
    }

    #[test]
    fn test_label_missing_edge() {
        let g = cast(&["A", "B"]);
        let err = g.label(&"A".to_string(), &"B".to_string()).unwrap_err();
        assert!(matches!(err, GraphError::NotFound { .. }));
    }

    #[test]
    fn test_absent_vertex_errors() {
        let mut g = cast(&["A"]);
        let (a, z) = ("A".to_string(), "Z".to_string());

        assert!(matches!(g.out_degree(&z), Err(GraphError::NoSuchVertex(_))));
        assert!(matches!(g.in_degree(&z), Err(GraphError::NoSuchVertex(_))));
        assert!(g.out_neighbors(&z).is_err());
        assert!(g.in_neighbors(&z).is_err());
        assert!(matches!(g.label(&a, &z), Err(GraphError::NoSuchVertex(_))));
        assert!(matches!(
            g.insert_directed(&a, &z, movies(&["M"])),
            Err(GraphError::NoSuchVertex(_))
        ));
        assert!(matches!(
            g.insert_undirected(&z, &a, movies(&["M"])),
            Err(GraphError::NoSuchVertex(_))
        ));
        // A failed undirected insert leaves no half-edge behind
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.out_degree(&a), Ok(0));
    }

    #[test]
    fn test_has_edge_absent_endpoint() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        g.insert_vertex(1);
        assert!(matches!(g.has_edge(&99, &1), Err(GraphError::NoSuchVertex(_))));
        assert!(matches!(g.has_edge(&1, &99), Err(GraphError::NoSuchVertex(_))));
        assert_eq!(g.has_edge(&1, &1), Ok(false));
    }

    #[test]
    fn test_neighbors() {
        let mut g: LabeledGraph<u64, u8> = LabeledGraph::new();
        for i in 0..4 {
            g.insert_vertex(i);
        }
        g.insert_directed(&0, &1, 1).unwrap();
        g.insert_directed(&0, &2, 2).unwrap();
        g.insert_directed(&3, &0, 3).unwrap();

        let mut out: Vec<u64> = g.out_neighbors(&0).unwrap().copied().collect();
        out.sort();
        assert_eq!(out, vec![1, 2]);

        let inc: Vec<u64> = g.in_neighbors(&0).unwrap().copied().collect();
        assert_eq!(inc, vec![3]);

        let mut edges: Vec<(u64, u8)> = g.out_edges(&0).unwrap().map(|(v, l)| (*v, *l)).collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        g.insert_vertex(7);
        g.insert_undirected(&7, &7, ()).unwrap();
        assert_eq!(g.out_degree(&7).unwrap(), 1);
        assert_eq!(g.in_degree(&7).unwrap(), 1);
    }
}
