pub mod controller;
pub mod dice;
pub mod grid;
pub mod path;
pub mod validator;

pub use controller::{BoggleGame, ClickOutcome, GameState, Transition};
pub use dice::{DiceSet, Die};
pub use grid::{GridModel, GridShape, SpatialGrid};
pub use path::{PathError, SelectionPath};
pub use validator::{Acceptance, FoundWords, LexiconValidator};
