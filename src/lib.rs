mod ai;
mod attack;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod placement;
pub mod prelude;
mod result;
mod ship;
#[cfg(feature = "persist")]
pub mod store;
#[cfg(feature = "cli")]
pub mod ui;

pub use ai::*;
pub use attack::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::*;
pub use result::*;
pub use ship::*;
#[cfg(feature = "persist")]
pub use store::{AsyncResultLog, JsonlResultLog};
