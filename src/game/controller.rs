use rand::{rngs::StdRng, Rng};

use crate::{
    dictionary::Lexicon,
    game::{
        dice::DiceSet,
        path::{PathError, SelectionPath},
        validator::{Acceptance, FoundWords, LexiconValidator},
    },
    models::{DieId, Highlight, Position},
    surface::messages::{DisplayCommand, InputEvent},
};

/// Where the click state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No word in progress
    Idle,
    /// At least one die selected
    Selecting,
}

/// What a single input event did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First die of a new word
    Started(DieId),
    /// Die appended to the word in progress
    Extended(DieId),
    /// Last die clicked again: the word was submitted
    Completed { word: String, acceptance: Acceptance },
    /// Click broke the adjacency or no-repeat rule; the turn was abandoned
    Rejected(PathError),
    /// Reset control: new game
    Reset,
    /// Exit control
    Exit,
    /// Click outside the board
    Ignored,
}

/// Outcome of an event plus the display instructions it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub outcome: ClickOutcome,
    pub commands: Vec<DisplayCommand>,
}

impl Transition {
    fn new(outcome: ClickOutcome, commands: Vec<DisplayCommand>) -> Self {
        Self { outcome, commands }
    }

    /// False once the exit control has been clicked
    pub fn keep_going(&self) -> bool {
        !matches!(self.outcome, ClickOutcome::Exit)
    }
}

/// Single-player game: board, current word and found words.
///
/// Events are handled one at a time, each to completion.
pub struct BoggleGame<R = StdRng> {
    board: DiceSet,
    path: SelectionPath,
    found: FoundWords,
    validator: LexiconValidator,
    rng: R,
    shuffle_on_reset: bool,
}

impl<R: Rng> BoggleGame<R> {
    pub fn new(board: DiceSet, lexicon: Lexicon, rng: R) -> Self {
        Self {
            board,
            path: SelectionPath::new(),
            found: FoundWords::new(),
            validator: LexiconValidator::new(lexicon),
            rng,
            shuffle_on_reset: true,
        }
    }

    /// Whether the reset control also reshuffles the board
    pub fn with_shuffle_on_reset(mut self, shuffle_on_reset: bool) -> Self {
        self.shuffle_on_reset = shuffle_on_reset;
        self
    }

    pub fn state(&self) -> GameState {
        if self.path.is_empty() {
            GameState::Idle
        } else {
            GameState::Selecting
        }
    }

    pub fn board(&self) -> &DiceSet {
        &self.board
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.validator.lexicon()
    }

    pub fn die_at(&self, pos: Position) -> Option<DieId> {
        self.board.die_at(pos)
    }

    pub fn position_of(&self, die: DieId) -> Option<Position> {
        self.board.position_of(die)
    }

    /// The word spelled so far this turn
    pub fn current_word(&self) -> String {
        self.path.spelled_word(&self.board)
    }

    /// Instructions that draw the whole board as it stands
    pub fn snapshot(&self) -> Vec<DisplayCommand> {
        let mut commands = vec![
            DisplayCommand::SetBoardLetters {
                letters: self.board.letters(),
            },
            DisplayCommand::ClearAllHighlights,
        ];
        let dice = self.path.dice();
        for (index, &die) in dice.iter().enumerate() {
            let highlight = if index + 1 == dice.len() {
                Highlight::Selected
            } else {
                Highlight::Confirmed
            };
            if let Some(cmd) = self.highlight(die, highlight) {
                commands.push(cmd);
            }
        }
        commands.push(DisplayCommand::SetInProgressText {
            text: self.current_word(),
        });
        commands.push(DisplayCommand::SetFoundWordsText {
            text: self.found.display_text(),
        });
        commands
    }

    /// Roll and rearrange the dice. Only allowed between turns; returns
    /// `None` while a word is in progress.
    pub fn shuffle(&mut self) -> Option<DisplayCommand> {
        if self.state() != GameState::Idle {
            tracing::warn!("Ignoring reshuffle while a word is in progress");
            return None;
        }
        self.board.reshuffle(&mut self.rng);
        Some(DisplayCommand::SetBoardLetters {
            letters: self.board.letters(),
        })
    }

    /// Process one input event
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        let transition = match event {
            InputEvent::ExitControl => Transition::new(ClickOutcome::Exit, Vec::new()),
            InputEvent::ResetControl => self.reset_game(),
            InputEvent::GridCell { row, col } => self.click(Position::new(row, col)),
        };

        tracing::debug!(
            "{:?} -> {:?} (state {:?}, word '{}')",
            event,
            transition.outcome,
            self.state(),
            self.current_word()
        );

        transition
    }

    fn click(&mut self, pos: Position) -> Transition {
        let Some(die) = self.board.die_at(pos) else {
            return Transition::new(ClickOutcome::Ignored, Vec::new());
        };

        match self.path.last() {
            None => self.start_word(die),
            Some(last) if last == die => self.submit_word(),
            Some(last) => self.extend_word(last, die),
        }
    }

    fn start_word(&mut self, die: DieId) -> Transition {
        if let Err(e) = self.path.start(die, &self.board) {
            return self.abandon_turn(e);
        }

        let mut commands = Vec::new();
        commands.extend(self.highlight(die, Highlight::Selected));
        commands.push(self.in_progress_text());
        Transition::new(ClickOutcome::Started(die), commands)
    }

    fn extend_word(&mut self, last: DieId, die: DieId) -> Transition {
        if let Err(e) = self.path.extend(die, &self.board) {
            return self.abandon_turn(e);
        }

        let mut commands = Vec::new();
        commands.extend(self.highlight(last, Highlight::Confirmed));
        commands.extend(self.highlight(die, Highlight::Selected));
        commands.push(self.in_progress_text());
        Transition::new(ClickOutcome::Extended(die), commands)
    }

    fn submit_word(&mut self) -> Transition {
        let word = self.current_word();
        let acceptance = self.validator.accept(&word, &mut self.found);

        let mut commands = Vec::new();
        if acceptance.is_accepted() {
            tracing::info!("Found word {} ({} so far)", word, self.found.len());
            commands.push(DisplayCommand::SetFoundWordsText {
                text: self.found.display_text(),
            });
        } else {
            tracing::debug!("Word {} not accepted: {:?}", word, acceptance);
        }

        commands.extend(self.reset_turn());
        Transition::new(ClickOutcome::Completed { word, acceptance }, commands)
    }

    fn abandon_turn(&mut self, reason: PathError) -> Transition {
        tracing::debug!("Abandoning word '{}': {}", self.current_word(), reason);
        let commands = self.reset_turn();
        Transition::new(ClickOutcome::Rejected(reason), commands)
    }

    fn reset_turn(&mut self) -> Vec<DisplayCommand> {
        self.path.clear();
        vec![
            DisplayCommand::ClearAllHighlights,
            DisplayCommand::SetInProgressText {
                text: String::new(),
            },
        ]
    }

    fn reset_game(&mut self) -> Transition {
        self.found.clear();
        let mut commands = self.reset_turn();
        commands.push(DisplayCommand::SetFoundWordsText {
            text: String::new(),
        });
        if self.shuffle_on_reset {
            commands.extend(self.shuffle());
        }

        tracing::info!("Game reset");
        Transition::new(ClickOutcome::Reset, commands)
    }

    fn highlight(&self, die: DieId, highlight: Highlight) -> Option<DisplayCommand> {
        self.board
            .position_of(die)
            .map(|pos| DisplayCommand::highlight(pos.row, pos.col, highlight))
    }

    fn in_progress_text(&self) -> DisplayCommand {
        DisplayCommand::SetInProgressText {
            text: self.current_word(),
        }
    }
}
