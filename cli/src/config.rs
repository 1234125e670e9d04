use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

pub const DEFAULT_CENTER: &str = "Kevin Bacon";
pub const DEFAULT_WALK_STEPS: usize = 10;

/// Command-line arguments. Every option can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "costar", version, about = "Explore a co-star network interactively")]
pub struct Args {
    /// `actorId|actorName` file
    #[arg(long, env = "COSTAR_ACTORS")]
    pub actors: PathBuf,

    /// `movieId|movieTitle` file
    #[arg(long, env = "COSTAR_MOVIES")]
    pub movies: PathBuf,

    /// `movieId|actorId` file, one appearance per line
    #[arg(long = "movie-actors", env = "COSTAR_MOVIE_ACTORS")]
    pub movie_actors: PathBuf,

    /// Initial center of the universe
    #[arg(long, env = "COSTAR_CENTER", default_value = DEFAULT_CENTER)]
    pub center: String,

    /// Step limit for `w` when none is given
    #[arg(long, env = "COSTAR_WALK_STEPS", default_value_t = DEFAULT_WALK_STEPS)]
    pub walk_steps: usize,

    /// Emit one JSON value per command instead of text
    #[arg(long)]
    pub json: bool,
}

/// Locations of the three input tables.
#[derive(Debug, Clone)]
pub struct Sources {
    pub actors: PathBuf,
    pub movies: PathBuf,
    pub movie_actors: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Validated runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sources: Sources,
    pub center: String,
    pub walk_steps: usize,
    pub output: OutputFormat,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let center = args.center.trim().to_string();
        if center.is_empty() {
            bail!("--center must not be empty");
        }

        for (flag, path) in [
            ("--actors", &args.actors),
            ("--movies", &args.movies),
            ("--movie-actors", &args.movie_actors),
        ] {
            if !path.is_file() {
                bail!("{} {} is not a readable file", flag, path.display());
            }
        }

        Ok(Settings {
            sources: Sources {
                actors: args.actors,
                movies: args.movies,
                movie_actors: args.movie_actors,
            },
            center,
            walk_steps: args.walk_steps,
            output: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }
}

impl Settings {
    /// Settings for in-memory use where the sources are never opened.
    pub fn in_memory(center: &str) -> Self {
        Settings {
            sources: Sources {
                actors: PathBuf::new(),
                movies: PathBuf::new(),
                movie_actors: PathBuf::new(),
            },
            center: center.to_string(),
            walk_steps: DEFAULT_WALK_STEPS,
            output: OutputFormat::Text,
        }
    }
}
