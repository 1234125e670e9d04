use std::time::Instant;

use costar_core::LabeledGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Edge label: the id of the synthetic "movie" that linked the pair.
type BenchGraph = LabeledGraph<u64, u32>;

/// Above this size the all-centers separation ranking is skipped.
const RANKING_LIMIT: u64 = 5_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: costar-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Branching tree (deep paths, many leaves)");
        println!("  scalefree   Preferential attachment (hub-and-spoke)");
        println!("  smallworld  Ring lattice + random shortcuts");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    let generators: Vec<(&str, fn(u64) -> BenchGraph)> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "scalefree" => vec![("Scale-free", gen_scale_free)],
        "smallworld" => vec![("Small-world", gen_small_world)],
        "barbell" => vec![("Barbell", gen_barbell)],
        "all" => vec![
            ("Branching tree", gen_tree as fn(u64) -> BenchGraph),
            ("Scale-free", gen_scale_free),
            ("Small-world", gen_small_world),
            ("Barbell", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    println!("costar-bench");
    println!("============");
    println!();

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(u64) -> BenchGraph, node_count: u64) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.1}ms: {} vertices, {} arcs",
        ms(t),
        graph.num_vertices(),
        graph.num_edges()
    );

    let t = Instant::now();
    let tree = match costar_core::bfs(&graph, &0) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("bfs failed: {}", e);
            return;
        }
    };
    println!(
        "{:<24} {:>10.1}ms  ({} reachable)",
        "bfs tree",
        ms(t),
        tree.num_vertices()
    );

    let t = Instant::now();
    let separation = costar_core::average_separation(&tree, &0).unwrap_or(f64::NAN);
    println!(
        "{:<24} {:>10.1}ms  ({:.3})",
        "average separation",
        ms(t),
        separation
    );

    let far = graph.num_vertices() as u64 - 1;
    let t = Instant::now();
    match costar_core::connection_number(&tree, &far) {
        Ok(n) => println!("{:<24} {:>10.1}ms  (0 <- {}: {} hops)", "path", ms(t), far, n),
        Err(_) => println!("{:<24} {:>10.1}ms  (0 <- {}: unreachable)", "path", ms(t), far),
    }

    let t = Instant::now();
    let missing = costar_core::missing_vertices(&graph, &tree);
    println!("{:<24} {:>10.1}ms  ({} missing)", "missing vertices", ms(t), missing.len());

    let t = Instant::now();
    let ranked = costar_core::vertices_by_in_degree(&graph).unwrap_or_default();
    let top = ranked
        .first()
        .and_then(|v| graph.in_degree(v).ok())
        .unwrap_or(0);
    println!("{:<24} {:>10.1}ms  (max in-degree {})", "in-degree ranking", ms(t), top);

    let mut rng = StdRng::seed_from_u64(2024);
    let t = Instant::now();
    let walk = costar_core::random_walk(&graph, &0, 1_000, &mut rng).unwrap_or_default();
    println!("{:<24} {:>10.1}ms  ({} vertices)", "random walk", ms(t), walk.len());

    if node_count <= RANKING_LIMIT {
        let t = Instant::now();
        let ranking = costar_core::separation_ranking(&graph).unwrap_or_default();
        println!(
            "{:<24} {:>10.1}ms  ({} centers)",
            "separation ranking",
            ms(t),
            ranking.len()
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: seeded, single-threaded, undirected
// ---------------------------------------------------------------------------

fn with_vertices(node_count: u64) -> BenchGraph {
    let mut graph = BenchGraph::with_capacity(node_count as usize);
    for v in 0..node_count {
        graph.insert_vertex(v);
    }
    graph
}

fn link(graph: &mut BenchGraph, a: u64, b: u64, movie: u32) {
    if a != b {
        graph
            .insert_undirected(&a, &b, movie)
            .expect("endpoints exist by construction");
    }
}

/// Each vertex links to `branching` children. Many leaves at the deepest
/// level stress the leaf walks in average separation.
fn gen_tree(node_count: u64) -> BenchGraph {
    let branching = 3u64;
    let mut graph = with_vertices(node_count);
    for child in 1..node_count {
        link(&mut graph, (child - 1) / branching, child, child as u32);
    }
    graph
}

/// Preferential attachment by sampling endpoints of existing edges.
fn gen_scale_free(node_count: u64) -> BenchGraph {
    let edges_per_node = 5u64;
    let mut graph = with_vertices(node_count);
    let mut rng = StdRng::seed_from_u64(12345);
    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    let seed = 5u64.min(node_count);
    for i in 0..seed {
        for j in (i + 1)..seed {
            link(&mut graph, i, j, 0);
            endpoints.extend([i, j]);
        }
    }

    for v in seed..node_count {
        for _ in 0..edges_per_node.min(v) {
            let target = if endpoints.is_empty() {
                rng.gen_range(0..v)
            } else {
                endpoints[rng.gen_range(0..endpoints.len())]
            };
            link(&mut graph, v, target, v as u32);
            endpoints.extend([v, target]);
        }
    }
    graph
}

/// Watts-Strogatz style: k nearest ring neighbors, rewired with probability p.
fn gen_small_world(node_count: u64) -> BenchGraph {
    let k = 5u64;
    let p = 0.05f64;
    let mut graph = with_vertices(node_count);
    let mut rng = StdRng::seed_from_u64(67890);

    for v in 0..node_count {
        for j in 1..=k {
            let target = if rng.gen_bool(p) {
                rng.gen_range(0..node_count)
            } else {
                (v + j) % node_count
            };
            link(&mut graph, v, target, (v * k + j) as u32);
        }
    }
    graph
}

/// Two random clusters joined by a chain of bridge vertices.
fn gen_barbell(node_count: u64) -> BenchGraph {
    let bridge_len = 10u64.min(node_count / 2);
    let cluster = (node_count - bridge_len) / 2;
    let mut graph = with_vertices(node_count);
    let mut rng = StdRng::seed_from_u64(99999);

    let b_start = cluster + bridge_len;
    for (base, size) in [(0, cluster), (b_start, node_count - b_start)] {
        if size < 2 {
            continue;
        }
        for i in 0..size {
            for _ in 0..10 {
                link(&mut graph, base + i, base + rng.gen_range(0..size), base as u32);
            }
        }
    }

    for id in cluster.saturating_sub(1)..b_start.min(node_count.saturating_sub(1)) {
        link(&mut graph, id, id + 1, u32::MAX);
    }
    graph
}
