pub mod config;
pub mod game;
pub mod journal;
pub mod placement;
pub mod replay;
pub mod scan;
pub mod state;
pub mod types;

mod random;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use journal::{InputJournal, InputRecord, JournalError};
pub use placement::{Layout, PlacementError};
pub use replay::*;
pub use state::{GameState, Grid};
pub use types::*;
