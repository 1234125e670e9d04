use std::fmt::Debug;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GraphError, GraphResult};
use crate::graph::LabeledGraph;

/// Random walk of at most `max_steps` steps from `start`.
///
/// A 0-step walk is just `[start]`. Each step picks uniformly among the
/// current vertex's out-neighbors other than itself. The walk stops early
/// when it lands on a vertex with no out-arcs, or when the only way out is
/// a self-loop. Earlier vertices may be revisited.
pub fn random_walk<V, E, R>(
    graph: &LabeledGraph<V, E>,
    start: &V,
    max_steps: usize,
    rng: &mut R,
) -> GraphResult<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
    R: Rng + ?Sized,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::no_such_vertex(start));
    }

    let mut path = vec![start.clone()];
    let mut current = start;

    for _ in 0..max_steps {
        let candidates: Vec<&V> = graph
            .out_neighbors(current)?
            .filter(|&n| n != current)
            .collect();

        let Some(&next) = candidates.choose(&mut *rng) else {
            break;
        };
        path.push(next.clone());
        current = next;

        if graph.out_degree(current)? == 0 {
            break;
        }
    }

    Ok(path)
}

/// [`random_walk`] driven by the thread-local generator.
pub fn random_walk_thread_rng<V, E>(
    graph: &LabeledGraph<V, E>,
    start: &V,
    max_steps: usize,
) -> GraphResult<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    random_walk(graph, start, max_steps, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_cycle(n: u64) -> LabeledGraph<u64, ()> {
        let mut g = LabeledGraph::new();
        for i in 0..n {
            g.insert_vertex(i);
        }
        for i in 0..n {
            g.insert_undirected(&i, &((i + 1) % n), ()).unwrap();
        }
        g
    }

    fn assert_connected(g: &LabeledGraph<u64, ()>, path: &[u64]) {
        for pair in path.windows(2) {
            assert_eq!(g.has_edge(&pair[0], &pair[1]), Ok(true), "{:?} not adjacent", pair);
        }
    }

    #[test]
    fn test_walk_structure() {
        let g = make_cycle(8);
        let mut rng = StdRng::seed_from_u64(42);
        for steps in [0, 1, 5, 50] {
            let path = random_walk(&g, &0, steps, &mut rng).unwrap();
            assert_eq!(path[0], 0);
            // A cycle never dead-ends, so every step is taken
            assert_eq!(path.len(), steps + 1);
            assert_connected(&g, &path);
        }
    }

    #[test]
    fn test_walk_zero_steps() {
        let g = make_cycle(3);
        let path = random_walk_thread_rng(&g, &1, 0).unwrap();
        assert_eq!(path, vec![1]);
    }

    #[test]
    fn test_walk_isolated_start() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        g.insert_vertex(0);
        let path = random_walk_thread_rng(&g, &0, 10).unwrap();
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn test_walk_only_self_loop() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        g.insert_vertex(0);
        g.insert_directed(&0, &0, ()).unwrap();
        let path = random_walk_thread_rng(&g, &0, 10).unwrap();
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn test_walk_stops_at_sink() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        for i in 0..3 {
            g.insert_vertex(i);
        }
        g.insert_directed(&0, &1, ()).unwrap();
        g.insert_directed(&1, &2, ()).unwrap();
        let path = random_walk_thread_rng(&g, &0, 10).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
    }

    #[test]
    fn test_walk_skips_self_loop_candidate() {
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        g.insert_vertex(0);
        g.insert_vertex(1);
        g.insert_directed(&0, &0, ()).unwrap();
        g.insert_directed(&0, &1, ()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_walk(&g, &0, 1, &mut rng).unwrap(), vec![0, 1]);
        }
    }

    #[test]
    fn test_walk_start_not_in_graph() {
        let g = make_cycle(3);
        assert!(matches!(
            random_walk_thread_rng(&g, &99, 3),
            Err(GraphError::NoSuchVertex(_))
        ));
    }
}
