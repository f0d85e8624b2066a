use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    board::Board,
    coord::{self, Coordinate},
    game::GameError,
    interface::InputSource,
    placement,
    random::RandomSource,
    ship::ShipType,
};

use super::{Answer, Player, TargetView};

/// Interactive player. Reads raw tokens from `I` and leaves decoding to the
/// session, so bad input is reported and asked for again.
pub struct CliPlayer<I> {
    input: I,
    auto_place: bool,
}

impl<I: InputSource> CliPlayer<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            auto_place: false,
        }
    }

    /// Skip the placement prompts and place the whole fleet randomly.
    pub fn auto_place(mut self, enabled: bool) -> Self {
        self.auto_place = enabled;
        self
    }
}

impl<I: InputSource> Player for CliPlayer<I> {
    fn propose_placement(
        &mut self,
        rng: &mut dyn RandomSource,
        board: &Board,
        ship: ShipType,
    ) -> Answer<Vec<Coordinate>> {
        if self.auto_place {
            return random_cells(rng, board, ship);
        }
        let prompt = format!(
            "Place your {} (length {}), e.g. A1 {} [ENTER for random]: ",
            ship.name(),
            ship.length(),
            coord::encode(0, ship.length() - 1)
        );
        loop {
            let Some(line) = self.input.read_token(&prompt) else {
                return Answer::Resign;
            };
            let line = line.trim();
            if line.is_empty() {
                return random_cells(rng, board, ship);
            }
            if line.eq_ignore_ascii_case("help") {
                self.input.notice(&placement_help(board.size()));
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return Answer::Resign;
            }
            return Answer::Token(line.to_string());
        }
    }

    fn propose_target(
        &mut self,
        _rng: &mut dyn RandomSource,
        view: &TargetView<'_>,
    ) -> Answer<Coordinate> {
        loop {
            let Some(line) = self.input.read_token("Enter target coordinates (e.g. A1): ") else {
                return Answer::Resign;
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("help") {
                self.input.notice(&targeting_help(view.size()));
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return Answer::Resign;
            }
            return Answer::Token(line.to_string());
        }
    }

    fn handle_rejection(&mut self, error: &GameError) {
        self.input.notice(&format!("✗ {}. Try again.", error));
    }
}

fn random_cells(
    rng: &mut dyn RandomSource,
    board: &Board,
    ship: ShipType,
) -> Answer<Vec<Coordinate>> {
    match placement::random_placement(rng, board, ship.length()) {
        Ok(cells) => Answer::Value(cells),
        Err(e) => {
            log::warn!("random placement of {} failed: {}", ship.name(), e);
            Answer::Resign
        }
    }
}

fn placement_help(size: usize) -> String {
    let last_row = coord::encode(size - 1, size - 1);
    format!(
        "List every cell (A1 A2 A3) or give both ends (A1 A3).\n\
         Rows are letters, columns numbers: A1 is top-left, {} bottom-right.\n\
         Ships run in one row or one column without gaps or overlaps.\n\
         ENTER places the ship randomly, 'quit' leaves the game.",
        last_row
    )
}

fn targeting_help(size: usize) -> String {
    format!(
        "Enter a single cell such as B7 (A1 to {}).\n\
         Cells you already fired at are refused and do not cost a turn.\n\
         'quit' leaves the game.",
        coord::encode(size - 1, size - 1)
    )
}

/// Line-oriented terminal input.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdinInput;

#[cfg(feature = "std")]
impl InputSource for StdinInput {
    fn read_token(&mut self, prompt: &str) -> Option<String> {
        use std::io::{self, BufRead, Write};

        print!("{}", prompt);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{}", message);
    }
}
