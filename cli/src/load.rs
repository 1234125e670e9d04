use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use costar_core::LabeledGraph;

use crate::config::Sources;

/// Actors keyed by name, edges labeled with the titles they share.
pub type CostarGraph = LabeledGraph<String, BTreeSet<String>>;

/// An `id|name` table, kept in file order with an id index.
#[derive(Debug, Default)]
pub struct NameTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl NameTable {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.entries[i].1.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A repeated id keeps its first position but takes the latest name.
    fn insert(&mut self, id: String, name: String) {
        match self.index.get(&id) {
            Some(&i) => self.entries[i].1 = name,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }
}

/// Split every non-blank line into its first two `|`-separated fields.
///
/// `source` names the input in error messages.
pub fn parse_pairs<R: BufRead>(reader: R, source: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("{}: read failed at line {}", source, lineno + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('|');
        match (fields.next(), fields.next()) {
            (Some(key), Some(value)) => {
                pairs.push((key.trim().to_string(), value.trim().to_string()));
            }
            _ => anyhow::bail!("{}:{}: expected `key|value`, got {:?}", source, lineno + 1, line),
        }
    }
    Ok(pairs)
}

pub fn read_names<R: BufRead>(reader: R, source: &str) -> Result<NameTable> {
    let mut table = NameTable::default();
    for (id, name) in parse_pairs(reader, source)? {
        table.insert(id, name);
    }
    Ok(table)
}

/// Movie id → ids of the actors appearing in it.
pub fn read_casts<R: BufRead>(reader: R, source: &str) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let mut casts: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (movie, actor) in parse_pairs(reader, source)? {
        casts.entry(movie).or_default().insert(actor);
    }
    Ok(casts)
}

/// Build the co-star graph: one vertex per actor name, one undirected edge
/// per pair of actors sharing at least one movie.
///
/// Edge labels accumulate by reading the current title set, adding the
/// movie, and writing the union back over both directions.
pub fn build_graph(
    actors: &NameTable,
    movies: &NameTable,
    casts: &BTreeMap<String, BTreeSet<String>>,
) -> Result<CostarGraph> {
    let mut graph = CostarGraph::with_capacity(actors.len());
    for name in actors.names() {
        graph.insert_vertex(name.to_string());
    }

    for (movie_id, cast) in casts {
        let Some(title) = movies.get(movie_id) else {
            log::warn!("skipping cast of unknown movie id {}", movie_id);
            continue;
        };

        let mut names: Vec<String> = Vec::with_capacity(cast.len());
        for actor_id in cast {
            match actors.get(actor_id) {
                Some(name) => names.push(name.to_string()),
                None => log::warn!("movie {}: skipping unknown actor id {}", movie_id, actor_id),
            }
        }

        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if a == b {
                    continue;
                }
                let mut titles = if graph.has_edge(a, b)? {
                    graph.label(a, b)?.clone()
                } else {
                    BTreeSet::new()
                };
                titles.insert(title.to_string());
                graph.insert_undirected(a, b, titles)?;
            }
        }
    }

    Ok(graph)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Read all three tables and build the graph.
pub fn load(sources: &Sources) -> Result<CostarGraph> {
    let start = Instant::now();

    let actors = read_names(open(&sources.actors)?, &sources.actors.display().to_string())?;
    let movies = read_names(open(&sources.movies)?, &sources.movies.display().to_string())?;
    let casts = read_casts(
        open(&sources.movie_actors)?,
        &sources.movie_actors.display().to_string(),
    )?;
    log::debug!(
        "read {} actors, {} movies, {} casts",
        actors.len(),
        movies.len(),
        casts.len()
    );

    let graph = build_graph(&actors, &movies, &casts)?;
    log::info!(
        "loaded {} actors and {} co-star arcs in {:.1}ms",
        graph.num_vertices(),
        graph.num_edges(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(graph)
}
