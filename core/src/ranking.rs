use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;

use crate::error::{GraphError, GraphResult};
use crate::graph::LabeledGraph;
use crate::traversal::{average_separation, bfs};

/// Degree information for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeResult<V> {
    pub vertex: V,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Every vertex with its degrees, sorted by in-degree descending.
///
/// The sort is stable, so ties keep the graph's insertion order.
pub fn degree_ranking<V, E>(graph: &LabeledGraph<V, E>) -> GraphResult<Vec<DegreeResult<V>>>
where
    V: Eq + Hash + Clone + Debug,
{
    let mut results = graph
        .vertices()
        .map(|v| -> GraphResult<DegreeResult<V>> {
            Ok(DegreeResult {
                vertex: v.clone(),
                in_degree: graph.in_degree(v)?,
                out_degree: graph.out_degree(v)?,
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;

    results.sort_by(|a, b| b.in_degree.cmp(&a.in_degree));
    Ok(results)
}

/// Vertices sorted by in-degree, largest first.
pub fn vertices_by_in_degree<V, E>(graph: &LabeledGraph<V, E>) -> GraphResult<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    Ok(degree_ranking(graph)?
        .into_iter()
        .map(|r| r.vertex)
        .collect())
}

/// The `k` vertices with the most distinct in-neighbors.
///
/// Fails with `EmptyRankingRequest` if `k` exceeds the vertex count.
pub fn top_by_in_degree<V, E>(graph: &LabeledGraph<V, E>, k: usize) -> GraphResult<Vec<DegreeResult<V>>>
where
    V: Eq + Hash + Clone + Debug,
{
    check_top_k(graph, k)?;
    let mut results = degree_ranking(graph)?;
    results.truncate(k);
    Ok(results)
}

/// Average separation of every vertex taken as the center, highest first.
///
/// Each center gets its own BFS over the shared read-only graph; the
/// per-center runs are independent and execute on the rayon pool. On
/// equal separation the graph's insertion order is kept.
pub fn separation_ranking<V, E>(graph: &LabeledGraph<V, E>) -> GraphResult<Vec<(V, f64)>>
where
    V: Eq + Hash + Clone + Debug + Send + Sync,
    E: Clone + Send + Sync,
{
    let centers: Vec<&V> = graph.vertices().collect();

    let mut ranked = centers
        .par_iter()
        .map(|&center| -> GraphResult<(V, f64)> {
            let tree = bfs(graph, center)?;
            let separation = average_separation(&tree, center)?;
            Ok((center.clone(), separation))
        })
        .collect::<GraphResult<Vec<_>>>()?;

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    log::debug!("ranked {} centers by average separation", ranked.len());
    Ok(ranked)
}

/// The `k` centers with the highest average separation.
pub fn top_by_average_separation<V, E>(graph: &LabeledGraph<V, E>, k: usize) -> GraphResult<Vec<(V, f64)>>
where
    V: Eq + Hash + Clone + Debug + Send + Sync,
    E: Clone + Send + Sync,
{
    check_top_k(graph, k)?;
    let mut ranked = separation_ranking(graph)?;
    ranked.truncate(k);
    Ok(ranked)
}

fn check_top_k<V, E>(graph: &LabeledGraph<V, E>, k: usize) -> GraphResult<()> {
    let available = graph.num_vertices();
    if k > available {
        return Err(GraphError::EmptyRankingRequest {
            requested: k,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hub 0 linked to 1..=4, plus 1–2 and an isolated vertex 9.
    fn make_hub() -> LabeledGraph<u64, ()> {
        let mut g = LabeledGraph::new();
        for v in [0, 1, 2, 3, 4, 9] {
            g.insert_vertex(v);
        }
        for leaf in 1..=4 {
            g.insert_undirected(&0, &leaf, ()).unwrap();
        }
        g.insert_undirected(&1, &2, ()).unwrap();
        g
    }

    #[test]
    fn test_vertices_by_in_degree_sorted() {
        let g = make_hub();
        let ranked = vertices_by_in_degree(&g).unwrap();
        assert_eq!(ranked.len(), 6);
        assert_eq!(ranked[0], 0);
        for pair in ranked.windows(2) {
            assert!(g.in_degree(&pair[0]).unwrap() >= g.in_degree(&pair[1]).unwrap());
        }
        assert_eq!(*ranked.last().unwrap(), 9);
    }

    #[test]
    fn test_degree_ranking_ties_keep_insertion_order() {
        let g = make_hub();
        let ranked = degree_ranking(&g).unwrap();
        let order: Vec<u64> = ranked.iter().map(|r| r.vertex).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 9]);
        assert_eq!(ranked[0].in_degree, 4);
        assert_eq!(ranked[0].out_degree, 4);
    }

    #[test]
    fn test_top_by_in_degree() {
        let g = make_hub();
        let top = top_by_in_degree(&g, 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].vertex, 0);
        assert_eq!(top[1].in_degree, 2);
    }

    #[test]
    fn test_top_k_exceeds_vertices() {
        let mut g: LabeledGraph<&str, ()> = LabeledGraph::new();
        for v in ["A", "B", "C"] {
            g.insert_vertex(v);
        }
        assert_eq!(
            top_by_in_degree(&g, 5).unwrap_err(),
            GraphError::EmptyRankingRequest {
                requested: 5,
                available: 3
            }
        );
        assert!(matches!(
            top_by_average_separation(&g, 5),
            Err(GraphError::EmptyRankingRequest { .. })
        ));
        assert_eq!(top_by_in_degree(&g, 3).unwrap().len(), 3);
    }

    #[test]
    fn test_separation_ranking_orders_high_to_low() {
        // Chain 0-1-2: endpoints see one leaf at depth 2 (3/3),
        // the middle sees two leaves at depth 1 (2/3).
        let mut g: LabeledGraph<u64, ()> = LabeledGraph::new();
        for v in 0..3 {
            g.insert_vertex(v);
        }
        g.insert_undirected(&0, &1, ()).unwrap();
        g.insert_undirected(&1, &2, ()).unwrap();

        let ranked = separation_ranking(&g).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], (0, 1.0));
        assert_eq!(ranked[1], (2, 1.0));
        assert_eq!(ranked[2], (1, 2.0 / 3.0));

        let top = top_by_average_separation(&g, 1).unwrap();
        assert_eq!(top, vec![(0, 1.0)]);
    }

    #[test]
    fn test_separation_ranking_isolated_vertex_is_zero() {
        let g = make_hub();
        let ranked = separation_ranking(&g).unwrap();
        assert_eq!(ranked.last().unwrap(), &(9, 0.0));
    }
}
