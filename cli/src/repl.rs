use std::io::{BufRead, Write};

use anyhow::Result;

use crate::command::{Command, HELP};
use crate::config::{OutputFormat, Settings};
use crate::dispatch::execute;
use crate::reply::Reply;
use crate::state::Session;

const PROMPT: &str = "Choose a command: ";

fn emit<W: Write>(out: &mut W, format: OutputFormat, reply: &Reply) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", reply.to_text())?,
        OutputFormat::Json => writeln!(out, "{}", reply.to_json())?,
    }
    Ok(())
}

fn emit_error<W: Write>(out: &mut W, format: OutputFormat, err: &anyhow::Error) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Error: {:#}", err)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "error": format!("{:#}", err) }))?,
    }
    Ok(())
}

/// Read commands from `input` until `q` or end of input.
///
/// A failed command is reported and the loop continues. Bytes that are not
/// valid UTF-8 are replaced rather than ending the session.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    settings: &Settings,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let format = settings.output;
    if format == OutputFormat::Text {
        writeln!(out, "{}\n", HELP)?;
        writeln!(out, "{} is now the center of the acting universe", session.center())?;
    }

    let mut buf = Vec::new();
    loop {
        if format == OutputFormat::Text {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .map_err(anyhow::Error::from)
            .and_then(|command| {
                log::debug!("command {:?}", command);
                execute(session, command, settings.walk_steps)
            });

        match outcome {
            Ok(Some(reply)) => emit(&mut out, format, &reply)?,
            Ok(None) => break,
            Err(err) => {
                log::debug!("command {:?} failed: {:#}", line, err);
                emit_error(&mut out, format, &err)?;
            }
        }
    }

    if format == OutputFormat::Text {
        writeln!(out, "Game is over")?;
    }
    Ok(())
}
