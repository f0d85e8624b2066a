#![cfg(feature = "std")]

//! Console rendering of boards and events.

use std::fmt::Write as _;

use crate::{
    board::{Board, Cell},
    common::Outcome,
    coord::Coordinate,
    game::{GameResult, GameState, Side},
    interface::{EventSink, GameEvent},
};

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::ShipPresent => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::SunkMarker => '#',
    }
}

/// Render `board` as text. Unless `reveal` is set, afloat ships are hidden.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let width = size * 3 + 2;
    let mut out = String::new();
    let _ = writeln!(out, "    ╔{}╗", "═".repeat(width));
    out.push_str("    ║  ");
    for c in 1..=size {
        let _ = write!(out, "{:>3}", c);
    }
    out.push_str(" ║\n");
    let _ = writeln!(out, "    ╠{}╣", "═".repeat(width));
    for r in 0..size {
        let _ = write!(out, "    ║ {}", (b'A' + r as u8) as char);
        for c in 0..size {
            let cell = board
                .visible_cell(Coordinate::new(r, c), reveal)
                .unwrap_or(Cell::Empty);
            let _ = write!(out, "{:>3}", symbol(cell));
        }
        out.push_str(" ║\n");
    }
    let _ = writeln!(out, "    ╚{}╝", "═".repeat(width));
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    } else {
        out.push_str("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
    out
}

/// Opponent's board (top, ships hidden) and `viewer`'s own board (bottom).
pub fn render_player_view(state: &GameState, viewer: Side) -> String {
    let mut out = String::new();
    out.push_str("Opponent board:\n");
    out.push_str(&render_board(state.side(viewer.other()).board(), false));
    out.push_str("\n\nYour board:\n");
    out.push_str(&render_board(state.side(viewer).board(), true));
    let _ = write!(out, "\n\n    Ships:");
    for ship in state.side(viewer).fleet().ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        let _ = write!(
            out,
            "\n      {} ({}): {}",
            ship.name(),
            ship.ship_type().length(),
            status
        );
    }
    out
}

/// One-line description of a resolved shot from `viewer`'s point of view.
pub fn describe_shot(viewer: Side, attacker: Side, target: Coordinate, outcome: Outcome) -> String {
    let ours = attacker == viewer;
    match (ours, outcome) {
        (true, Outcome::Hit) => format!("🎯 HIT! Your shot at {} struck an enemy ship!", target),
        (true, Outcome::Miss) => format!("💧 Miss. Your shot at {} hit only water.", target),
        (true, Outcome::Sunk(name)) => format!("💥 SUNK! You destroyed the enemy's {}!", name),
        (false, Outcome::Hit) => format!("⚠️  ENEMY HIT! They struck your ship at {}", target),
        (false, Outcome::Miss) => format!("✓ Enemy missed at {}", target),
        (false, Outcome::Sunk(name)) => {
            format!("💀 SHIP LOST! Enemy destroyed your {} at {}", name, target)
        }
        (_, Outcome::AlreadyResolved) => format!("{} was already resolved", target),
    }
}

/// Banner for the end of the game from `viewer`'s point of view.
pub fn describe_result(viewer: Side, result: GameResult) -> String {
    match result {
        GameResult::PlayerWon | GameResult::OpponentWon => {
            let winner = if result == GameResult::PlayerWon {
                Side::Player
            } else {
                Side::Opponent
            };
            if winner == viewer {
                "🎉🎉🎉 VICTORY! 🎉🎉🎉\nYou have sunk all enemy ships!".to_string()
            } else {
                "💀 DEFEAT 💀\nAll your ships have been destroyed.".to_string()
            }
        }
        GameResult::Draw => "⚓ DRAW ⚓\nThe turn limit ran out with both fleets afloat.".to_string(),
        GameResult::Abandoned(side) if side == viewer => "You left the game.".to_string(),
        GameResult::Abandoned(_) => "The opponent left the game.".to_string(),
    }
}

/// Prints boards and shot reports to stdout for one viewing side.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    viewer: Side,
}

impl ConsoleSink {
    pub fn new(viewer: Side) -> Self {
        Self { viewer }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &GameEvent, state: &GameState) {
        match event {
            GameEvent::ShipPlaced { side, name, cells } if *side == self.viewer => {
                if let Some(first) = cells.first() {
                    println!("✓ {} placed at {}", name, first);
                }
                println!("{}", render_board(state.side(self.viewer).board(), true));
            }
            GameEvent::ShipPlaced { .. } => {}
            GameEvent::BattleStarted => {
                println!("\n✓ All ships placed! Ready to begin battle.\n");
                println!("{}", render_player_view(state, self.viewer));
            }
            GameEvent::ShotResolved {
                attacker,
                target,
                outcome,
            } => {
                println!("\n{}", describe_shot(self.viewer, *attacker, *target, *outcome));
                if *attacker != self.viewer {
                    println!("\n{}", render_player_view(state, self.viewer));
                }
            }
            // the player reports its own rejections next to the prompt
            GameEvent::InputRejected { .. } => {}
            GameEvent::GameOver { result } => {
                println!("\n    GAME OVER\n");
                println!("{}", render_player_view(state, self.viewer));
                println!("\n{}", describe_result(self.viewer, *result));
            }
        }
    }
}
