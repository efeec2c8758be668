pub mod messages;
pub mod terminal;

pub use messages::{DisplayCommand, InputEvent};
pub use terminal::{parse_event, run, InputError, TextSurface};
