mod board;
mod common;
mod config;
mod game;
mod input;
mod logging;
mod opponent;
mod placement;
mod player;
mod ship;
mod summary;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use logging::init_logging;
pub use opponent::*;
pub use placement::*;
pub use player::*;
pub use ship::*;
pub use summary::*;
pub use ui::*;
