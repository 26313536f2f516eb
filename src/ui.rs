#![cfg(feature = "cli")]

//! Text rendering and input parsing for terminal front ends.
//!
//! Columns are lettered `A`–`J` and rows numbered `1`–`10`, so `B7` is
//! row 6, column 1.

use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::game::{Attacker, Shot, Snapshot};
use crate::ship::Orientation;

/// Human label for a cell, e.g. `B7`.
pub fn coord_label(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// Parse a label like `b7` or `J10`. Returns `None` for anything off the board.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    // `usize::from_str` would also take a leading `+`
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    let coord = Coord::new(row - 1, col);
    coord.in_bounds().then_some(coord)
}

/// `h`/`horizontal` or `v`/`vertical`, case-insensitive.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Render `board` as a lettered grid. Ships are only drawn when `reveal`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in row {
            let ch = match cell {
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                CellState::ShipPresent if reveal => 'S',
                CellState::ShipPresent | CellState::Empty => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards and the current message, enemy on top.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Enemy board:");
    out.push_str(&render_board(&snapshot.enemy_view, false));
    let _ = writeln!(out, "\nYour board:");
    out.push_str(&render_board(&snapshot.player_board, true));
    if let Some(progress) = &snapshot.placement {
        let _ = writeln!(
            out,
            "\nPlace ship {} of {}: {} (size {})",
            progress.ship_index + 1,
            crate::config::NUM_SHIPS,
            progress.ship_name,
            progress.ship_size
        );
    }
    let _ = writeln!(out, "\n{}", snapshot.message);
    out
}

/// One line describing a shot, e.g. `You fired at C4: Hit! Go again.`
pub fn describe_shot(shot: &Shot) -> String {
    let who = match shot.attacker {
        Attacker::Player => "You fired",
        Attacker::Ai => "AI fired",
    };
    format!("{} at {}: {}", who, coord_label(shot.outcome.coord), shot.message)
}
