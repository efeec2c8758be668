use std::collections::HashMap;

use anyhow::{Context, Result};
use rand::Rng;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    config::OutputMode,
    game::BoggleGame,
    models::{Highlight, Position},
    surface::messages::{DisplayCommand, InputEvent},
};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("unrecognized input {0:?}, expected ROW COL, reset or exit")]
    Unrecognized(String),
    #[error("invalid event: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse one line of player input
pub fn parse_event(line: &str, mode: OutputMode) -> Result<InputEvent, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match mode {
        OutputMode::Json => Ok(serde_json::from_str(line)?),
        OutputMode::Text => parse_text_event(line),
    }
}

fn parse_text_event(line: &str) -> Result<InputEvent, InputError> {
    match line.to_lowercase().as_str() {
        "r" | "reset" => return Ok(InputEvent::ResetControl),
        "q" | "quit" | "exit" => return Ok(InputEvent::ExitControl),
        _ => {}
    }

    let coords: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    match coords.as_slice() {
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok(InputEvent::GridCell { row, col }),
            _ => Err(InputError::Unrecognized(line.to_string())),
        },
        _ => Err(InputError::Unrecognized(line.to_string())),
    }
}

/// Plain-text rendering of the board: a labeled grid with highlightable cells
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    letters: Vec<Vec<String>>,
    highlights: HashMap<Position, Highlight>,
    in_progress: String,
    found_words: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::SetCellHighlight {
                row,
                col,
                text_color,
                fill_color,
            } => {
                let highlight =
                    Highlight::from_colors(text_color, fill_color).unwrap_or(Highlight::Selected);
                self.highlights.insert(Position::new(*row, *col), highlight);
            }
            DisplayCommand::SetInProgressText { text } => self.in_progress = text.clone(),
            DisplayCommand::SetFoundWordsText { text } => self.found_words = text.clone(),
            DisplayCommand::ClearAllHighlights => self.highlights.clear(),
            DisplayCommand::SetBoardLetters { letters } => self.letters = letters.clone(),
            DisplayCommand::Error { .. } => {}
        }
    }

    pub fn highlight(&self, pos: Position) -> Option<Highlight> {
        self.highlights.get(&pos).copied()
    }

    /// `[A]` plain, `(A)` selected, `<A>` earlier in the word
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (row, letters) in self.letters.iter().enumerate() {
            out.push_str(&format!("{}: ", row));
            for (col, letter) in letters.iter().enumerate() {
                let cell = match self.highlight(Position::new(row, col)) {
                    None => format!("[{}]", letter),
                    Some(Highlight::Selected) => format!("({})", letter),
                    Some(Highlight::Confirmed) => format!("<{}>", letter),
                };
                out.push_str(&format!("{:<5}", cell));
            }
            out.push('\n');
        }
        out.push_str(&format!("Word: {}\n", self.in_progress));
        if self.found_words.is_empty() {
            out.push_str("Found: (none)\n");
        } else {
            out.push_str(&format!("Found: {}\n", self.found_words.replace('\n', ", ")));
        }
        out
    }
}

/// Drive a game from line-oriented input until the exit control or end of input
pub async fn run<G, R, W>(
    game: &mut BoggleGame<G>,
    mode: OutputMode,
    input: R,
    output: &mut W,
) -> Result<()>
where
    G: Rng,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut surface = TextSurface::new();
    emit(&mut surface, mode, &game.snapshot(), output).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let event = match parse_event(&line, mode) {
            Ok(event) => event,
            Err(InputError::Empty) => continue,
            Err(e) => {
                tracing::warn!("Failed to parse input: {}", e);
                let error = DisplayCommand::Error {
                    message: e.to_string(),
                };
                emit(&mut surface, mode, &[error], output).await?;
                continue;
            }
        };

        let transition = game.handle(event);
        emit(&mut surface, mode, &transition.commands, output).await?;

        if !transition.keep_going() {
            tracing::info!("Exit requested");
            return Ok(());
        }
    }

    tracing::info!("Input closed, exiting");
    Ok(())
}

async fn emit<W>(
    surface: &mut TextSurface,
    mode: OutputMode,
    commands: &[DisplayCommand],
    output: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut text = String::new();
    match mode {
        OutputMode::Json => {
            for command in commands {
                text.push_str(&serde_json::to_string(command)?);
                text.push('\n');
            }
        }
        OutputMode::Text => {
            for command in commands {
                if let DisplayCommand::Error { message } = command {
                    text.push_str(&format!("? {}\n", message));
                }
                surface.apply(command);
            }
            if commands.iter().any(|c| !matches!(c, DisplayCommand::Error { .. })) {
                text.push_str(&surface.render());
            }
        }
    }

    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
