use cookbook_catalog::{ClickTarget, DifficultyFilter, Event, FilterError, TimeFilter};
use thiserror::Error;

pub const HELP_HINT: &str = "Type `help` for a list of commands.";

pub const HELP: &str = "\
Commands:
  search [text]       filter by title or ingredient (no text clears it)
  time <code>         all, 15, 30 or 60
  difficulty <code>   all, easy, medium or hard
  reset               clear all filters
  open <id>           show a recipe
  close               close the recipe view
  backdrop            click outside the recipe view
  overlay             click inside the recipe view
  help                show this help
  quit                leave";

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Event),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    Unknown(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Invalid recipe id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Parses a line into a command. Blank lines yield `None`.
///
/// Everything after the first space of a `search` line is the search text,
/// kept as typed.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let line = line.trim_start();
    let (name, rest) = match line.split_once(' ') {
        Some((name, rest)) => (name, Some(rest)),
        None => (line, None),
    };
    let argument = |name: &'static str| {
        rest.map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(CommandError::MissingArgument(name))
    };

    let command = match name {
        "search" => Command::Apply(Event::SetSearch(rest.unwrap_or("").to_string())),
        "time" => Command::Apply(Event::SetTime(argument("time")?.parse::<TimeFilter>()?)),
        "difficulty" => Command::Apply(Event::SetDifficulty(
            argument("difficulty")?.parse::<DifficultyFilter>()?,
        )),
        "reset" => Command::Apply(Event::ResetFilters),
        "open" => {
            let raw = argument("open")?;
            let id = raw
                .parse::<u32>()
                .map_err(|_| CommandError::InvalidId(raw.to_string()))?;
            Command::Apply(Event::SelectRecipe(id))
        }
        "close" => Command::Apply(Event::Dismiss),
        "backdrop" => Command::Apply(Event::Click(ClickTarget::Backdrop)),
        "overlay" => Command::Apply(Event::Click(ClickTarget::Overlay)),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
