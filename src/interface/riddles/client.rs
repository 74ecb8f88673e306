use std::io::{BufRead, BufReader, BufWriter, Read};
use std::io::{ErrorKind, Write};

use crate::board::{Board, PlayerId, Settings};
use crate::interface::riddles::command::{Command, Setting, Update};
use crate::strategy::Strategy;

pub fn run(
    strategy: impl Strategy,
    input: impl Read,
    output: impl Write,
    log: impl Write,
) -> std::io::Result<()> {
    let result = run_inner(strategy, input, output, log);

    if let Err(err) = &result {
        if err.kind() == ErrorKind::BrokenPipe {
            return Ok(());
        }
    }

    result
}

pub fn run_inner(
    mut strategy: impl Strategy,
    input: impl Read,
    output: impl Write,
    log: impl Write,
) -> std::io::Result<()> {
    // wrap everything
    let mut input = BufReader::new(input);
    let mut output = Output {
        output: BufWriter::new(output),
        log: BufWriter::new(log),
    };

    output.info(&format!("running strategy {:?}", strategy))?;

    let mut line = String::new();
    let mut settings = SettingsBuilder::default();
    let mut board: Option<Board> = None;
    let mut round: u32 = 0;

    loop {
        output.flush()?;

        line.clear();
        let line_result = input.read_line(&mut line)?;

        // check for eof
        if line_result == 0 {
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        output.log(&format!("> {}", line))?;

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(_) => {
                output.error(&format!("failed to parse command '{}'", line))?;
                continue;
            }
        };

        match command {
            Command::Settings(setting) => match setting {
                Setting::YourBotId(id) => settings.your_bot_id = Some(id),
                Setting::FieldWidth(width) => settings.field_width = Some(width),
                Setting::FieldHeight(height) => settings.field_height = Some(height),
                // timing and naming settings don't influence move selection
                Setting::TimeBank(_)
                | Setting::TimePerMove(_)
                | Setting::PlayerNames(_)
                | Setting::YourBot(_)
                | Setting::MaxRounds(_) => {}
                Setting::Other { key, value } => {
                    output.warning(&format!("ignoring unknown setting, key={}, value={}", key, value))?;
                }
            },
            Command::Update(update) => match update {
                Update::GameRound(value) => round = value,
                Update::GameField(field) => {
                    let settings = match settings.complete() {
                        Some(settings) => settings,
                        None => {
                            output.error("ignoring field update, settings are incomplete")?;
                            continue;
                        }
                    };
                    match Board::from_field_str(settings, field) {
                        Ok(parsed) => board = Some(parsed),
                        Err(err) => output.error(&format!("{}", err))?,
                    }
                }
                // the cell counts are recomputed from the field instead
                Update::LivingCells { .. } => {}
                Update::Other { target, key, value } => {
                    output.warning(&format!(
                        "ignoring unknown update, target={}, key={}, value={}",
                        target, key, value
                    ))?;
                }
            },
            Command::ActionMove { timebank_ms } => {
                let board = match &board {
                    Some(board) => board,
                    None => {
                        output.error("received action move without having a board")?;
                        continue;
                    }
                };

                let mv = strategy.select_move(board);
                if let Err(err) = board.check_move(mv) {
                    output.warning(&format!("submitting move that fails validation: {}", err))?;
                }

                output.info(&format!(
                    "round {}: playing {} with {}ms in the bank",
                    round, mv, timebank_ms
                ))?;
                output.respond(&mv.to_command())?;
            }
        }
    }
}

#[derive(Default)]
struct SettingsBuilder {
    field_width: Option<u32>,
    field_height: Option<u32>,
    your_bot_id: Option<PlayerId>,
}

impl SettingsBuilder {
    fn complete(&self) -> Option<Settings> {
        let width = self.field_width?;
        let height = self.field_height?;
        // a zero-area field never comes from a real engine, treat it as missing
        if width == 0 || height == 0 {
            return None;
        }
        Some(Settings::new(width, height, self.your_bot_id?))
    }
}

struct Output<O, L> {
    output: O,
    log: L,
}

impl<O: Write, L: Write> Output<O, L> {
    /// Write a move line to the engine. Everything else only goes to the log,
    /// the engine interprets each output line as a move.
    fn respond(&mut self, s: &str) -> std::io::Result<()> {
        assert!(!s.contains('\n'), "move response cannot contain newline");
        writeln!(&mut self.log, "< {}", s)?;
        writeln!(&mut self.output, "{}", s)?;
        Ok(())
    }

    fn info(&mut self, msg: &str) -> std::io::Result<()> {
        self.log(&format!("(info): {}", msg))
    }

    fn warning(&mut self, msg: &str) -> std::io::Result<()> {
        self.log(&format!("(warning): {}", msg))
    }

    fn error(&mut self, msg: &str) -> std::io::Result<()> {
        self.log(&format!("(error): {}", msg))
    }

    fn log(&mut self, s: &str) -> std::io::Result<()> {
        writeln!(&mut self.log, "{}", s)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush()?;
        self.log.flush()?;
        Ok(())
    }
}
