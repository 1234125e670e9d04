use std::fmt;

use serde_json::{json, Value};

use crate::state::CenterSummary;

/// One hop of a path back to the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub from: String,
    pub movies: Vec<String>,
    pub to: String,
}

/// The result of a command, ready to render as text or JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    TopBySeparation { requested: usize, centers: Vec<(String, f64)> },
    ByConnectionNumber { center: String, actors: Vec<(String, usize)> },
    Infinite { center: String, actors: Vec<String> },
    Path { actor: String, number: usize, hops: Vec<Hop> },
    TopByDegree { requested: usize, actors: Vec<(String, usize)> },
    Center(CenterSummary),
    Walk { steps: usize, path: Vec<String> },
    Help(&'static str),
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::TopBySeparation { requested, centers } => {
                writeln!(
                    f,
                    "Top {} centers of the universe sorted by average separation:",
                    requested
                )?;
                for (i, (name, sep)) in centers.iter().enumerate() {
                    writeln!(f, "\t{}: {} ({:.4})", i + 1, name, sep)?;
                }
            }
            Reply::ByConnectionNumber { center, actors } => {
                writeln!(
                    f,
                    "Actors sorted by connection number to {}, low to high:",
                    center
                )?;
                for (name, number) in actors {
                    writeln!(f, "\t{}: {}", number, name)?;
                }
            }
            Reply::Infinite { center, actors } => {
                writeln!(
                    f,
                    "Actors with infinite separation from the current center {} are: {}",
                    center,
                    bracketed(actors)
                )?;
            }
            Reply::Path { actor, number, hops } => {
                writeln!(f, "{}'s number is {}", actor, number)?;
                for hop in hops {
                    writeln!(
                        f,
                        "{} appeared in {} with {}",
                        hop.from,
                        bracketed(&hop.movies),
                        hop.to
                    )?;
                }
            }
            Reply::TopByDegree { requested, actors } => {
                writeln!(
                    f,
                    "Top {} centers of the universe sorted by degree (number of costars):",
                    requested
                )?;
                for (i, (name, degree)) in actors.iter().enumerate() {
                    writeln!(f, "\t{}: {} ({})", i + 1, name, degree)?;
                }
            }
            Reply::Center(s) => {
                writeln!(
                    f,
                    "{} is now the center of the acting universe, connected to {}/{} with average separation {}",
                    s.center, s.connected, s.total, s.average_separation
                )?;
            }
            Reply::Walk { steps, path } => {
                writeln!(f, "Random walk of up to {} steps: {}", steps, path.join(" -> "))?;
            }
            Reply::Help(text) => writeln!(f, "{}", text)?,
        }
        Ok(())
    }
}

impl Reply {
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Value {
        match self {
            Reply::TopBySeparation { requested, centers } => json!({
                "command": "top_by_separation",
                "requested": requested,
                "centers": centers
                    .iter()
                    .map(|(name, sep)| json!({ "actor": name, "average_separation": sep }))
                    .collect::<Vec<_>>(),
            }),
            Reply::ByConnectionNumber { center, actors } => json!({
                "command": "by_connection_number",
                "center": center,
                "actors": actors
                    .iter()
                    .map(|(name, number)| json!({ "actor": name, "number": number }))
                    .collect::<Vec<_>>(),
            }),
            Reply::Infinite { center, actors } => json!({
                "command": "infinite",
                "center": center,
                "actors": actors,
            }),
            Reply::Path { actor, number, hops } => json!({
                "command": "path",
                "actor": actor,
                "number": number,
                "hops": hops
                    .iter()
                    .map(|h| json!({ "from": h.from, "movies": h.movies, "to": h.to }))
                    .collect::<Vec<_>>(),
            }),
            Reply::TopByDegree { requested, actors } => json!({
                "command": "top_by_degree",
                "requested": requested,
                "actors": actors
                    .iter()
                    .map(|(name, degree)| json!({ "actor": name, "degree": degree }))
                    .collect::<Vec<_>>(),
            }),
            Reply::Center(s) => json!({
                "command": "center",
                "center": s.center,
                "connected": s.connected,
                "total": s.total,
                "average_separation": s.average_separation,
            }),
            Reply::Walk { steps, path } => json!({
                "command": "walk",
                "steps": steps,
                "path": path,
            }),
            Reply::Help(text) => json!({ "command": "help", "text": text }),
        }
    }
}
