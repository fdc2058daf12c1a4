//! Line-oriented console for playing a game from a terminal.
//!
//! Reads one command per line, applies it to a `Game` and prints the result.
//! This is a manual-play and debugging surface, not an interchange protocol.

use std::io::{self, BufRead, Write};

use crate::board::Square;
use crate::engine::Game;

pub mod command;

pub use command::{parse_console_command, CommandError, ConsoleCommand};

const HELP: &str = "\
commands:
  select <sq>            select a square and mark its moves
  move <sq>              move the selected piece
  play <from> <to>       select and move in one step
  moves [sq]             list legal moves (all, or for one square)
  board                  print the board with move markers
  status | history       game state / moves played
  resign                 side to move resigns
  timeout <white|black>  flag a side on time
  option <name> <value>  e.g. option strict-castling on
  reset | quit
squares: algebraic (e2) or rank,file (6,4)";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to `game`, writing any output to `out`.
pub fn execute(game: &mut Game, cmd: ConsoleCommand, out: &mut impl Write) -> io::Result<Flow> {
    match cmd {
        ConsoleCommand::Select(sq) => match game.select(sq) {
            Ok(Some(piece)) => {
                let count = game.legal_moves(sq).len();
                writeln!(out, "selected {piece} on {sq}, {count} move(s)")?;
            }
            Ok(None) => writeln!(out, "{sq} is empty")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ConsoleCommand::Move(to) => report_move(game, None, to, out)?,
        ConsoleCommand::Play(from, to) => report_move(game, Some(from), to, out)?,
        ConsoleCommand::Resign => match game.resign() {
            Ok(color) => writeln!(out, "{color} resigns")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ConsoleCommand::Timeout(color) => match game.flag_timeout(color) {
            Ok(()) => writeln!(out, "{color} lost on time")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ConsoleCommand::Reset => {
            game.reset();
            writeln!(out, "new game")?;
        }
        ConsoleCommand::Board => write!(out, "{}", game.board().legal_overlay())?,
        ConsoleCommand::Moves(Some(sq)) => {
            let moves: Vec<String> = game
                .legal_moves(sq)
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "{sq}: {}", moves.join(" "))?;
        }
        ConsoleCommand::Moves(None) => {
            let all = game.legal_destinations();
            writeln!(out, "{} legal move(s) for {}", all.len(), game.turn())?;
            for (from, m) in all {
                writeln!(out, "  {from}{m}")?;
            }
        }
        ConsoleCommand::Status => print_status(game, out)?,
        ConsoleCommand::History => {
            for (ply, played) in game.history().iter().enumerate() {
                writeln!(out, "{:>3}. {played}", ply + 1)?;
            }
        }
        ConsoleCommand::SetOption { name, value } => {
            let mut config = *game.config();
            match config.apply_option(&name, &value) {
                Ok(()) => {
                    game.set_config(config);
                    writeln!(out, "{name} = {value}")?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        ConsoleCommand::Help => writeln!(out, "{HELP}")?,
        ConsoleCommand::Quit => return Ok(Flow::Quit),
        ConsoleCommand::Unknown(line) => writeln!(out, "unknown command '{line}' (try help)")?,
    }
    Ok(Flow::Continue)
}

fn report_move(
    game: &mut Game,
    from: Option<Square>,
    to: Square,
    out: &mut impl Write,
) -> io::Result<()> {
    let result = match from {
        Some(from) => game.play(from, to),
        None => game.move_to(to),
    };
    match result {
        Ok(played) => {
            writeln!(out, "{played}")?;
            if game.status().is_terminal() {
                print_status(game, out)?;
            } else if game.in_check(game.turn()) {
                writeln!(out, "{} is in check", game.turn())?;
            }
            Ok(())
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn print_status(game: &Game, out: &mut impl Write) -> io::Result<()> {
    match game.subject() {
        Some(subject) => writeln!(out, "status: {} ({subject})", game.status())?,
        None => writeln!(out, "status: {}, {} to move", game.status(), game.turn())?,
    }
    for player in game.players() {
        writeln!(
            out,
            "{}: material {}, wins {}, losses {}",
            player.color(),
            player.material(game.board()),
            player.wins(),
            player.losses()
        )?;
    }
    Ok(())
}

/// Drive `game` from `input` until `quit` or end of input.
pub fn run_console<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let flow = match parse_console_command(&line) {
            Ok(Some(cmd)) => execute(game, cmd, out)?,
            Ok(None) => Flow::Continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Flow::Continue
            }
        };
        out.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the console on stdin/stdout with a fresh game.
pub fn run_console_loop() -> io::Result<()> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", game.board())?;
    run_console(&mut game, stdin.lock(), &mut stdout)
}
