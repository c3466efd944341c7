use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::*;

const HELP: &str = "Guess the hidden sequence of digits. Type one digit per position (Ex: 1234). \
Each position is scored 1 if the digit is in the right place, 0 if it is somewhere else in \
the sequence and -1 if it is not in the sequence at all. Type reset for a new sequence, \
clear to also forget every finished game, state to see the game state, quit to leave.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MastermindConfig {
    /// Number of digits in the hidden sequence.
    pub width: usize,
    /// Largest digit that can appear, inclusive.
    pub max_range: u8,
}

impl MastermindConfig {
    pub fn new(width: usize, max_range: u8) -> Result<Self> {
        let config = Self { width, max_range };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(GameError::InvalidConfig("sequence width must be at least 1"));
        }
        // guesses are typed one character per digit
        if self.max_range > 9 {
            return Err(GameError::InvalidConfig("max range must be a single digit"));
        }
        Ok(())
    }
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self {
            width: 4,
            max_range: 9,
        }
    }
}

/// Per-position feedback, written as 1 / 0 / -1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Bull,
    Cow,
    Miss,
}

impl Feedback {
    pub const fn tag(self) -> i8 {
        match self {
            Self::Bull => 1,
            Self::Cow => 0,
            Self::Miss => -1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub feedback: Vec<Feedback>,
    pub bulls: usize,
    pub cows: usize,
}

impl Evaluation {
    pub fn is_exact(&self) -> bool {
        self.cows == 0 && self.bulls == self.feedback.len()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self.feedback.iter().map(|fb| fb.tag().to_string()).collect();
        write!(
            f,
            "[{}] bulls: {}, cows: {}",
            tags.join(", "),
            self.bulls,
            self.cows
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Vec<u8>,
    pub evaluation: Evaluation,
}

/// Finished-game history shared by every Mastermind game in a session.
///
/// Owned by the caller and handed to the game on each call that touches it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MastermindArchive {
    total_games: u32,
    history: BTreeMap<u32, Vec<GuessRecord>>,
}

impl MastermindArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a new game and returns its number, starting at 1.
    pub fn register_game(&mut self) -> u32 {
        self.total_games += 1;
        self.total_games
    }

    pub fn archive(&mut self, game_number: u32, guesses: Vec<GuessRecord>) {
        self.history.insert(game_number, guesses);
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn history(&self) -> &BTreeMap<u32, Vec<GuessRecord>> {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.total_games = 0;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MastermindState {
    #[default]
    NewGame,
    Ongoing,
    GameOver,
}

impl MastermindState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New game.",
            Self::Ongoing => "Ongoing",
            Self::GameOver => "Game over.",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mastermind {
    config: MastermindConfig,
    hidden_sequence: Vec<u8>,
    history: Vec<GuessRecord>,
    state: MastermindState,
    game_number: u32,
    #[serde(skip)]
    rng: GameRng,
}

impl Mastermind {
    pub fn new(
        config: MastermindConfig,
        archive: &mut MastermindArchive,
        mut rng: GameRng,
    ) -> Result<Self> {
        config.validate()?;
        let hidden_sequence = generate_hidden_sequence(config, &mut *rng);
        Ok(Self {
            config,
            hidden_sequence,
            history: Vec::new(),
            state: Default::default(),
            game_number: archive.register_game(),
            rng,
        })
    }

    /// Replaces the hidden sequence, which must fit the configured width and range.
    pub fn set_hidden_sequence(&mut self, sequence: Vec<u8>) -> Result<()> {
        if !self.accepts(&sequence) {
            return Err(GameError::InvalidConfig(
                "hidden sequence does not match the configured width and range",
            ));
        }
        self.hidden_sequence = sequence;
        Ok(())
    }

    pub fn hidden_sequence(&self) -> &[u8] {
        &self.hidden_sequence
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn state(&self) -> MastermindState {
        self.state
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn config(&self) -> MastermindConfig {
        self.config
    }

    /// Scores `guess` position by position and records it.
    ///
    /// An exact match ends the game and archives its guesses under this game's number.
    pub fn evaluate(&mut self, guess: &[u8], archive: &mut MastermindArchive) -> Evaluation {
        let feedback: Vec<Feedback> = guess
            .iter()
            .zip(&self.hidden_sequence)
            .map(|(digit, hidden)| {
                if digit == hidden {
                    Feedback::Bull
                } else if self.hidden_sequence.contains(digit) {
                    Feedback::Cow
                } else {
                    Feedback::Miss
                }
            })
            .collect();
        let bulls = feedback.iter().filter(|&&fb| fb == Feedback::Bull).count();
        let cows = feedback.iter().filter(|&&fb| fb == Feedback::Cow).count();
        let evaluation = Evaluation {
            feedback,
            bulls,
            cows,
        };

        self.history.push(GuessRecord {
            guess: guess.to_vec(),
            evaluation: evaluation.clone(),
        });

        if evaluation.is_exact() && guess.len() == self.hidden_sequence.len() {
            self.state = MastermindState::GameOver;
            archive.archive(self.game_number, self.history.clone());
            log::debug!(
                "mastermind game {} solved in {} guesses",
                self.game_number,
                self.history.len()
            );
        } else {
            self.state = MastermindState::Ongoing;
        }

        evaluation
    }

    /// Forgets this game's guesses and starts over with a new sequence.
    pub fn reset(&mut self, archive: &mut MastermindArchive) -> &'static str {
        self.history.clear();
        self.hidden_sequence = generate_hidden_sequence(self.config, &mut *self.rng);
        self.state = MastermindState::NewGame;
        self.game_number = archive.register_game();
        "Game reset"
    }

    /// Clears this game's guesses and the whole session archive.
    ///
    /// The current game is numbered again so later games never reuse its number.
    pub fn clear(&mut self, archive: &mut MastermindArchive) -> &'static str {
        self.history.clear();
        archive.clear();
        self.game_number = archive.register_game();
        "History cleared"
    }

    /// Checks width and digit range of a decoded guess.
    fn accepts(&self, guess: &[u8]) -> bool {
        guess.len() == self.config.width && guess.iter().all(|&d| d <= self.config.max_range)
    }

    pub fn execute(&mut self, command: Command<Vec<u8>>, archive: &mut MastermindArchive) -> Reply {
        use Lifecycle::*;

        match command {
            Command::Lifecycle(NewGame) => {
                self.reset(archive);
                "\nMastermind\n".into()
            }
            Command::Lifecycle(Reset) => self.reset(archive).into(),
            Command::Lifecycle(Clear) => self.clear(archive).into(),
            Command::Lifecycle(Help) => HELP.into(),
            Command::Lifecycle(State) => self.state.label().into(),
            Command::Lifecycle(Quit) => Reply::Quit,
            Command::Move(guess) if !self.accepts(&guess) => Self::INVALID_INPUT.into(),
            Command::Move(_) if self.state == MastermindState::GameOver => {
                "Game over. Type reset to play again.".into()
            }
            Command::Move(guess) => {
                let evaluation = self.evaluate(&guess, archive);
                let digits: String = guess.iter().map(|d| char::from(b'0' + d)).collect();
                if self.state == MastermindState::GameOver {
                    format!(
                        "{digits}: {evaluation}\nCongratulations! You cracked the code in {} guesses.",
                        self.history.len()
                    )
                    .into()
                } else {
                    format!("{digits}: {evaluation}").into()
                }
            }
        }
    }
}

impl GameEngine for Mastermind {
    type Move = Vec<u8>;

    const NAME: &'static str = "Mastermind";
    const INVALID_INPUT: &'static str = "Invalid input. Input should be of the form \"####\"";

    /// Any non-empty run of decimal digits; width and range are checked by the game.
    fn parse_move(input: &str) -> Option<Self::Move> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(input.bytes().map(|b| b - b'0').collect())
    }

    fn help() -> &'static str {
        HELP
    }

    fn state_label(&self) -> String {
        self.state.label().to_owned()
    }
}

fn generate_hidden_sequence<R: Rng + ?Sized>(config: MastermindConfig, rng: &mut R) -> Vec<u8> {
    (0..config.width)
        .map(|_| rng.random_range(0..=config.max_range))
        .collect()
}
