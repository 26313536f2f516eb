//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coord, GameError, GameResult, GameSession, HuntTarget, MemoryResultLog, Orientation, Outcome,
    Phase, ResultLog, SystemClock, Targeting,
};

#[cfg(feature = "persist")]
pub use crate::store::{AsyncResultLog, JsonlResultLog};
