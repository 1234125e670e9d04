use anyhow::{Context, Result};
use costar_core::{
    get_path, missing_vertices, random_walk_thread_rng, top_by_average_separation,
    top_by_in_degree, vertices_by_connection_number,
};

use crate::command::{Command, HELP};
use crate::reply::{Hop, Reply};
use crate::state::Session;

/// Run one command against the session. `Quit` yields `None`.
pub fn execute(session: &mut Session, command: Command, walk_steps: usize) -> Result<Option<Reply>> {
    let reply = match command {
        Command::Quit => return Ok(None),
        Command::Help => Reply::Help(HELP),

        Command::TopBySeparation(k) => Reply::TopBySeparation {
            requested: k,
            centers: top_by_average_separation(session.graph(), k)?,
        },

        Command::TopByDegree(k) => Reply::TopByDegree {
            requested: k,
            actors: top_by_in_degree(session.graph(), k)?
                .into_iter()
                .map(|r| (r.vertex, r.in_degree))
                .collect(),
        },

        Command::ByConnectionNumber { low, high } => Reply::ByConnectionNumber {
            center: session.center().to_string(),
            actors: vertices_by_connection_number(session.tree())?
                .into_iter()
                .filter(|(_, number)| (low..=high).contains(number))
                .collect(),
        },

        Command::Infinite => {
            let mut actors: Vec<String> = missing_vertices(session.graph(), session.tree())
                .into_iter()
                .collect();
            actors.sort();
            Reply::Infinite {
                center: session.center().to_string(),
                actors,
            }
        }

        Command::Path(name) => {
            if !session.graph().contains_vertex(&name) {
                anyhow::bail!("'{}' is not an actor in this network", name);
            }
            let path = get_path(session.tree(), &name).with_context(|| {
                format!(
                    "'{}' has infinite separation from {}",
                    name,
                    session.center()
                )
            })?;
            let hops = path
                .windows(2)
                .map(|pair| -> Result<Hop> {
                    let movies = session.graph().label(&pair[0], &pair[1])?;
                    Ok(Hop {
                        from: pair[0].clone(),
                        movies: movies.iter().cloned().collect(),
                        to: pair[1].clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Reply::Path {
                actor: name,
                number: path.len() - 1,
                hops,
            }
        }

        Command::SetCenter(name) => Reply::Center(
            session
                .set_center(&name)
                .with_context(|| format!("cannot make '{}' the center", name))?,
        ),

        Command::Walk { name, steps } => {
            let steps = steps.unwrap_or(walk_steps);
            let path = random_walk_thread_rng(session.graph(), &name, steps)
                .with_context(|| format!("cannot walk from '{}'", name))?;
            Reply::Walk { steps, path }
        }
    };
    Ok(Some(reply))
}
