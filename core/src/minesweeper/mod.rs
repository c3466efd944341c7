use chrono::prelude::*;
use core::fmt::Write;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use crate::*;

pub use cell::*;
pub use generator::*;
pub use layout::*;
pub use three_bv::*;

mod cell;
mod generator;
mod layout;
mod three_bv;

const HELP: &str = "Reveal a square by typing its row and column separated by a comma (Ex: 3,4). \
Numbers show how many mines touch a square. Reveal every square without a mine to win, \
but reveal a mine and it is game over. Type reset for a new board, clear to forget your \
moves, state to see the game state, quit to leave.";

/// Valid transitions:
/// - NewGame -> Ongoing
/// - NewGame -> Won / Lost (first move ends the game)
/// - Ongoing -> Won / Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinesweeperState {
    #[default]
    NewGame,
    Ongoing,
    Won,
    Lost,
}

impl MinesweeperState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New game.",
            Self::Ongoing => "Ongoing",
            Self::Won | Self::Lost => "Game over.",
        }
    }
}

/// Result of a single move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Revealed,
    AlreadyRevealed,
    HitMine,
    Won,
    /// The game already ended, nothing changed.
    Finished,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Minesweeper {
    config: MinesweeperConfig,
    layout: MineLayout,
    board: Array2<Cell>,
    hidden_safe: CellCount,
    state: MinesweeperState,
    history: Vec<Coord2>,
    three_bv: u32,
    score: u32,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    rng: GameRng,
}

impl Minesweeper {
    pub fn new(config: MinesweeperConfig, mut rng: GameRng) -> Result<Self> {
        let layout = RandomMinefieldGenerator::new(&mut *rng).generate(config)?;
        Ok(Self::build(config, layout, rng))
    }

    /// Game over a fixed mine layout.
    pub fn with_layout(layout: MineLayout) -> Self {
        let (rows, cols) = layout.size();
        let config = MinesweeperConfig {
            rows,
            cols,
            mines: layout.mine_count(),
        };
        Self::build(config, layout, GameRng::from_entropy())
    }

    fn build(config: MinesweeperConfig, layout: MineLayout, rng: GameRng) -> Self {
        let size = layout.size();
        Self {
            config,
            board: Array2::default(size.to_nd_index()),
            hidden_safe: layout.safe_cell_count(),
            layout,
            state: Default::default(),
            history: Vec::new(),
            three_bv: 0,
            score: 0,
            started_at: None,
            ended_at: None,
            rng,
        }
    }

    /// Replaces the mines and restarts the game on the new layout.
    pub fn set_hidden_grid(&mut self, layout: MineLayout) {
        let (rows, cols) = layout.size();
        self.config = MinesweeperConfig {
            rows,
            cols,
            mines: layout.mine_count(),
        };
        self.restart(layout);
    }

    fn restart(&mut self, layout: MineLayout) {
        self.board = Array2::default(layout.size().to_nd_index());
        self.hidden_safe = layout.safe_cell_count();
        self.layout = layout;
        self.state = Default::default();
        self.history.clear();
        self.three_bv = 0;
        self.score = 0;
        self.started_at = None;
        self.ended_at = None;
    }

    pub fn state(&self) -> MinesweeperState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn config(&self) -> MinesweeperConfig {
        self.config
    }

    /// Mine placement; callers must not show it to the player mid-game.
    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    pub fn hidden_safe_cells(&self) -> CellCount {
        self.hidden_safe
    }

    pub fn history(&self) -> &[Coord2] {
        &self.history
    }

    pub fn three_bv(&self) -> u32 {
        self.three_bv
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Milliseconds since the first move, up to the end of the game.
    pub fn elapsed_millis(&self) -> i64 {
        match self.started_at {
            Some(started_at) => (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_milliseconds()
                .max(0),
            None => 0,
        }
    }

    pub fn make_move(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.layout.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(MoveOutcome::Finished);
        }

        self.history.push(coords);
        self.mark_started();

        if self.layout.contains_mine(coords) {
            self.end_game(false);
            return Ok(MoveOutcome::HitMine);
        }

        if !self.board[coords.to_nd_index()].is_hidden() {
            return Ok(MoveOutcome::AlreadyRevealed);
        }

        self.flood_reveal(coords);

        if self.hidden_safe == 0 {
            self.end_game(true);
            Ok(MoveOutcome::Won)
        } else {
            Ok(MoveOutcome::Revealed)
        }
    }

    /// Reveals `coords` and spreads through 8-connected zero cells.
    fn flood_reveal(&mut self, coords: Coord2) {
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !self.board[visit_coords.to_nd_index()].is_hidden()
                || self.layout.contains_mine(visit_coords)
            {
                continue;
            }

            let count = self.layout.adjacent_mine_count(visit_coords);
            self.board[visit_coords.to_nd_index()] = Cell::Revealed(count);
            self.hidden_safe -= 1;
            log::trace!("Revealed {:?}, adjacent mines: {}", visit_coords, count);

            if count == 0 {
                for pos in self.layout.iter_neighbors(visit_coords) {
                    if self.board[pos.to_nd_index()].is_hidden() && visited.insert(pos) {
                        to_visit.push_back(pos);
                    }
                }
            }
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, MinesweeperState::NewGame) {
            let now = Utc::now();
            log::debug!("started at {}", now);
            self.started_at.get_or_insert(now);
            self.state = MinesweeperState::Ongoing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        let now = Utc::now();
        self.ended_at = Some(now);
        self.state = if won {
            MinesweeperState::Won
        } else {
            MinesweeperState::Lost
        };

        if won {
            self.three_bv = three_bv(&self.layout);
            self.score = speed_score(self.three_bv, self.elapsed_millis());
            log::debug!(
                "won at {}, 3BV: {}, score: {}",
                now,
                self.three_bv,
                self.score
            );
        } else {
            log::debug!("lost at {}", now);
        }
    }

    pub fn reset_game(&mut self) -> Result<&'static str> {
        let layout = RandomMinefieldGenerator::new(&mut *self.rng).generate(self.config)?;
        self.restart(layout);
        log::debug!("minesweeper reset");
        Ok("Game reset")
    }

    pub fn clear_history(&mut self) -> &'static str {
        self.history.clear();
        "History cleared"
    }

    /// Text board with column indices on top and row indices down the side.
    ///
    /// Mines are only drawn once the game is over.
    pub fn draw_board(&self) -> String {
        let (rows, cols) = self.size();
        let mut out = String::new();

        for col in 0..cols {
            let _ = write!(out, "  {col} ");
        }
        let rule = "====".repeat(cols.into());
        let _ = write!(out, "\n  {rule}");

        for row in 0..rows {
            let _ = write!(out, "\n{row}|");
            for col in 0..cols {
                let coords = (row, col);
                let symbol = if self.layout.contains_mine(coords) {
                    if self.state.is_finished() { '*' } else { '-' }
                } else {
                    self.cell_at(coords).symbol()
                };
                let _ = write!(out, " {symbol} |");
            }
            if row + 1 != rows {
                let _ = write!(out, "\n |{}", "---|".repeat(cols.into()));
            }
        }
        let _ = write!(out, "\n  {rule}");

        out
    }

    pub fn execute(&mut self, command: Command<(usize, usize)>) -> Result<Reply> {
        use Lifecycle::*;

        Ok(match command {
            Command::Lifecycle(NewGame) => {
                self.reset_game()?;
                format!("\nMinesweeper\n\n{}\n", self.draw_board()).into()
            }
            Command::Lifecycle(Reset) => {
                let message = self.reset_game()?;
                format!("{message}\n{}", self.draw_board()).into()
            }
            Command::Lifecycle(Clear) => self.clear_history().into(),
            Command::Lifecycle(Help) => HELP.into(),
            Command::Lifecycle(State) => self.state.label().into(),
            Command::Lifecycle(Quit) => Reply::Quit,
            Command::Move((row, col)) => {
                let row = Coord::try_from(row).map_err(|_| GameError::OutOfBounds)?;
                let col = Coord::try_from(col).map_err(|_| GameError::OutOfBounds)?;
                let outcome = self.make_move((row, col))?;
                let board = self.draw_board();
                match outcome {
                    MoveOutcome::Revealed => board.into(),
                    MoveOutcome::AlreadyRevealed => {
                        format!("{board}\nLocation already uncovered").into()
                    }
                    MoveOutcome::HitMine => format!("{board}\nBOOM! Game over.").into(),
                    MoveOutcome::Won => format!(
                        "{board}\nCongratulations! You win!\nScore: {} (3BV: {})",
                        self.score, self.three_bv
                    )
                    .into(),
                    MoveOutcome::Finished => {
                        format!("{board}\nGame over. Type reset to play again.").into()
                    }
                }
            }
        })
    }
}

impl GameEngine for Minesweeper {
    type Move = (usize, usize);

    const NAME: &'static str = "Minesweeper";
    const INVALID_INPUT: &'static str =
        "Invalid input. User should specify a row and column: \"#,#\"";

    fn parse_move(input: &str) -> Option<Self::Move> {
        let (row, col) = input.split_once(',')?;
        Some((parse_index(row)?, parse_index(col)?))
    }

    fn help() -> &'static str {
        HELP
    }

    fn state_label(&self) -> String {
        self.state.label().to_owned()
    }
}

/// Digits only; values too large for `usize` saturate so they surface as out of bounds.
fn parse_index(input: &str) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(input.parse().unwrap_or(usize::MAX))
}
