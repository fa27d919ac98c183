//! Text front end over the game engine.
//!
//! Reads one command per line and renders the resulting state. All game
//! rules live in the engine; this module only translates text.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameState, Position};
use tracing::{debug, instrument};

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a board index. May be off the board.
    Move(usize),
    /// Start a new game.
    Reset,
    /// Show the current state again.
    State,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses a line of input.
    pub fn parse(line: &str) -> Self {
        let word = line.trim();
        match word.to_ascii_lowercase().as_str() {
            "reset" | "r" | "new" => Command::Reset,
            "state" | "s" | "board" => Command::State,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                if let Some(pos) = Position::parse(word) {
                    Command::Move(pos.to_index())
                } else if let Ok(index) = word.parse::<usize>() {
                    Command::Move(index)
                } else {
                    Command::Unknown(word.to_string())
                }
            }
        }
    }
}

const HELP: &str = "\
Commands:
  0-8 or a cell name (e.g. center, top-left)  place your mark
  reset                                       start a new game
  state                                       show the board
  help                                        show this message
  quit                                        leave";

/// Drives one engine from text commands, writing to `out`.
pub struct Console<W: Write> {
    engine: GameEngine,
    json: bool,
    out: W,
}

impl<W: Write> Console<W> {
    /// Creates a console over a fresh game.
    pub fn new(out: W, json: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            json,
            out,
        }
    }

    /// Returns the engine's current state.
    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// Writes the current state.
    pub fn show(&mut self) -> Result<()> {
        let state = self.engine.state();
        self.render(&state)
    }

    /// Executes one command. Returns `false` when the user asked to quit.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Move(index) => match self.engine.try_move(index) {
                Ok(state) => self.render(&state)?,
                Err(reason) => {
                    debug!(%reason, "Ignoring move");
                    writeln!(self.out, "{}", reason)?;
                }
            },
            Command::Reset => {
                let state = self.engine.reset();
                self.render(&state)?;
            }
            Command::State => self.show()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(word) => {
                writeln!(self.out, "Unknown command '{}'. Type 'help' for options.", word)?
            }
        }
        Ok(true)
    }

    /// Reads commands until end of input or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.show()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if !self.handle(Command::parse(&line))? {
                break;
            }
        }
        Ok(())
    }

    /// Plays a scripted list of commands, stopping early at `quit`.
    #[instrument(skip(self, script), fields(count = script.len()))]
    pub fn play_script(&mut self, script: &[String]) -> Result<()> {
        for word in script {
            if !self.handle(Command::parse(word))? {
                debug!("Script asked to quit");
                break;
            }
        }
        Ok(())
    }

    fn render(&mut self, state: &GameState) -> Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(state)?)?;
        } else {
            writeln!(self.out, "{}\n{}", state.board().display(), state.status_message())?;
        }
        Ok(())
    }

    /// Consumes the console, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
