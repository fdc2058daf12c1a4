use std::fmt;
use std::str::FromStr;

use crate::board::{Color, Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Select(Square),
    Move(Square),
    Play(Square, Square),
    Resign,
    Timeout(Color),
    Reset,
    Board,
    Moves(Option<Square>),
    Status,
    History,
    SetOption { name: String, value: String },
    Help,
    Quit,
    Unknown(String),
}

/// Error type for malformed console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    MissingArgument { command: &'static str },
    InvalidSquare(SquareError),
    InvalidColor { input: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs more arguments")
            }
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidColor { input } => write!(f, "Unknown color '{input}'"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

/// Parse one console line. Blank lines yield `Ok(None)`.
///
/// Squares are given in algebraic form (`e2`) or as `rank,file` grid
/// coordinates (`6,4`).
pub fn parse_console_command(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(None);
    };

    let square_arg = |idx: usize, command: &'static str| -> Result<Square, CommandError> {
        let raw = args
            .get(idx)
            .ok_or(CommandError::MissingArgument { command })?;
        parse_square(raw)
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "select" | "s" => ConsoleCommand::Select(square_arg(0, "select")?),
        "move" | "m" => ConsoleCommand::Move(square_arg(0, "move")?),
        "play" | "p" => ConsoleCommand::Play(square_arg(0, "play")?, square_arg(1, "play")?),
        "resign" => ConsoleCommand::Resign,
        "timeout" => {
            let raw = args
                .first()
                .ok_or(CommandError::MissingArgument { command: "timeout" })?;
            ConsoleCommand::Timeout(parse_color(raw)?)
        }
        "reset" | "new" => ConsoleCommand::Reset,
        "board" | "d" => ConsoleCommand::Board,
        "moves" => ConsoleCommand::Moves(match args.first() {
            Some(raw) => Some(parse_square(raw)?),
            None => None,
        }),
        "status" => ConsoleCommand::Status,
        "history" => ConsoleCommand::History,
        "option" | "setoption" => {
            let (value, name) = args
                .split_last()
                .filter(|(_, name)| !name.is_empty())
                .ok_or(CommandError::MissingArgument { command: "option" })?;
            ConsoleCommand::SetOption {
                name: name.join(" "),
                value: (*value).to_string(),
            }
        }
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(line.trim().to_string()),
    };

    Ok(Some(cmd))
}

fn parse_square(raw: &str) -> Result<Square, CommandError> {
    if let Some((rank, file)) = raw.split_once(',') {
        let parse = |s: &str| {
            s.trim().parse::<usize>().map_err(|_| SquareError::InvalidNotation {
                notation: raw.to_string(),
            })
        };
        return Ok(Square::try_from((parse(rank)?, parse(file)?))?);
    }
    Ok(Square::from_str(raw)?)
}

fn parse_color(raw: &str) -> Result<Color, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(CommandError::InvalidColor {
            input: raw.to_string(),
        }),
    }
}
