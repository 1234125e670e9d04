use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `c <#>`
    TopBySeparation(usize),
    /// `b [<low> <high>]`
    ByConnectionNumber { low: usize, high: usize },
    /// `i`
    Infinite,
    /// `p <name>`
    Path(String),
    /// `d <#>`
    TopByDegree(usize),
    /// `u <name>`
    SetCenter(String),
    /// `w <name> [steps]`
    Walk { name: String, steps: Option<usize> },
    /// `h` or `?`
    Help,
    /// `q`
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument { command: char, what: &'static str },

    #[error("'{0}' is not a non-negative number")]
    BadNumber(String),

    #[error("low bound {low} is above high bound {high}")]
    BadRange { low: usize, high: usize },
}

pub const HELP: &str = "Commands:
c <#>: list top (positive number) centers of the universe, sorted by average separation
b <low> <high>: list actors sorted by connection number, limited to low..=high
i: list actors with infinite separation from the current center
p <name>: find path from <name> to current center of the universe
d <#>: list top (positive number) <#> centers of the universe, sorted by degree (number of costars)
u <name>: make <name> the center of the universe
w <name> [steps]: random walk through the co-star network from <name>
q: quit game";

fn number(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::BadNumber(s.to_string()))
}

fn required<'a>(command: char, rest: &'a str, what: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let mut chars = head.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => return Err(ParseError::Empty),
            (Some(c), None) => c,
            (Some(_), Some(_)) => return Err(ParseError::Unknown(head.to_string())),
        };

        match letter {
            'c' => Ok(Command::TopBySeparation(number(required('c', rest, "a count")?)?)),
            'd' => Ok(Command::TopByDegree(number(required('d', rest, "a count")?)?)),
            'b' => {
                let bounds: Vec<&str> = rest.split_whitespace().collect();
                match bounds.as_slice() {
                    [] => Ok(Command::ByConnectionNumber {
                        low: 0,
                        high: usize::MAX,
                    }),
                    [low, high] => {
                        let (low, high) = (number(low)?, number(high)?);
                        if low > high {
                            return Err(ParseError::BadRange { low, high });
                        }
                        Ok(Command::ByConnectionNumber { low, high })
                    }
                    _ => Err(ParseError::MissingArgument {
                        command: 'b',
                        what: "both <low> and <high>",
                    }),
                }
            }
            'i' => Ok(Command::Infinite),
            'p' => Ok(Command::Path(required('p', rest, "an actor name")?.to_string())),
            'u' => Ok(Command::SetCenter(required('u', rest, "an actor name")?.to_string())),
            'w' => {
                let rest = required('w', rest, "an actor name")?;
                // A trailing number is the step count, unless it is the whole name
                match rest.rsplit_once(char::is_whitespace) {
                    Some((name, last)) if last.parse::<usize>().is_ok() => Ok(Command::Walk {
                        name: name.trim().to_string(),
                        steps: Some(number(last)?),
                    }),
                    _ => Ok(Command::Walk {
                        name: rest.to_string(),
                        steps: None,
                    }),
                }
            }
            'h' | '?' => Ok(Command::Help),
            'q' => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(head.to_string())),
        }
    }
}
