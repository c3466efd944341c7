use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

pub const INVALID_GAME: &str = "Invalid game provided.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Mastermind,
    Minesweeper,
    CrazyEights,
    Blackjack,
}

impl GameKind {
    pub const ALL: [Self; 4] = [
        Self::Mastermind,
        Self::Minesweeper,
        Self::CrazyEights,
        Self::Blackjack,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mastermind => "mastermind",
            Self::Minesweeper => "minesweeper",
            Self::CrazyEights => "crazy eights",
            Self::Blackjack => "blackjack",
        }
    }

    /// Mixed into the session seed so each game draws its own stream.
    const fn salt(self) -> u64 {
        match self {
            Self::Mastermind => 0x6d61_7374,
            Self::Minesweeper => 0x6d69_6e65,
            Self::CrazyEights => 0x6372_617a,
            Self::Blackjack => 0x626c_6163,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// One player's set of games plus the Mastermind archive they share.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Arcade {
    config: ArcadeConfig,
    mastermind: Mastermind,
    mastermind_archive: MastermindArchive,
    minesweeper: Minesweeper,
    crazy_eights: CrazyEights,
    blackjack: Blackjack,
}

impl Arcade {
    pub fn new(config: ArcadeConfig) -> Result<Self> {
        config.validate()?;
        let rng = |kind: GameKind| GameRng::for_game(config.seed, kind.salt());

        let mut mastermind_archive = MastermindArchive::new();
        let mastermind = Mastermind::new(
            config.mastermind,
            &mut mastermind_archive,
            rng(GameKind::Mastermind),
        )?;
        let minesweeper = Minesweeper::new(config.minesweeper, rng(GameKind::Minesweeper))?;
        let crazy_eights = CrazyEights::new(config.crazy_eights, rng(GameKind::CrazyEights))?;
        let blackjack = Blackjack::new(rng(GameKind::Blackjack))?;
        log::debug!("arcade session created, seed: {:?}", config.seed);

        Ok(Self {
            config,
            mastermind,
            mastermind_archive,
            minesweeper,
            crazy_eights,
            blackjack,
        })
    }

    /// Routes one line of user input to the named game.
    ///
    /// Unknown game names and undecodable input produce a reply rather than an error.
    pub fn handle_input(&mut self, game: &str, input: &str) -> Result<Reply> {
        match game.parse() {
            Ok(kind) => self.play(kind, input),
            Err(()) => Ok(INVALID_GAME.into()),
        }
    }

    pub fn play(&mut self, kind: GameKind, input: &str) -> Result<Reply> {
        log::trace!("{kind} <- {input:?}");
        match kind {
            GameKind::Mastermind => route::<Mastermind>(input, |command| {
                Ok(self.mastermind.execute(command, &mut self.mastermind_archive))
            }),
            GameKind::Minesweeper => {
                route::<Minesweeper>(input, |command| self.minesweeper.execute(command))
            }
            GameKind::CrazyEights => {
                route::<CrazyEights>(input, |command| self.crazy_eights.execute(command))
            }
            GameKind::Blackjack => {
                route::<Blackjack>(input, |command| self.blackjack.execute(command))
            }
        }
    }

    pub fn state_label(&self, kind: GameKind) -> String {
        match kind {
            GameKind::Mastermind => self.mastermind.state_label(),
            GameKind::Minesweeper => self.minesweeper.state_label(),
            GameKind::CrazyEights => self.crazy_eights.state_label(),
            GameKind::Blackjack => self.blackjack.state_label(),
        }
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    pub fn mastermind(&self) -> &Mastermind {
        &self.mastermind
    }

    pub fn mastermind_archive(&self) -> &MastermindArchive {
        &self.mastermind_archive
    }

    pub fn minesweeper(&self) -> &Minesweeper {
        &self.minesweeper
    }

    pub fn crazy_eights(&self) -> &CrazyEights {
        &self.crazy_eights
    }

    pub fn blackjack(&self) -> &Blackjack {
        &self.blackjack
    }
}

fn route<E: GameEngine>(
    input: &str,
    run: impl FnOnce(Command<E::Move>) -> Result<Reply>,
) -> Result<Reply> {
    match E::decode(input) {
        Some(command) => run(command),
        None => Ok(E::INVALID_INPUT.into()),
    }
}
