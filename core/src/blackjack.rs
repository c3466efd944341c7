use serde::{Deserialize, Serialize};

use crate::*;

const HELP: &str = "You are originally dealt two cards and one card from the house's hand will be flipped up. \
You have the choice to either have another card dealt to you (hit) or to stick with your cards (stand). \
If your hand's sum is closest to twenty-one then you win, if the sum is over twenty-one, you lose (bust), \
or if the sum is exactly twenty-one you win (blackjack). \
(User input should be in the form of either: Hit or Stand)";

const BLACKJACK: u32 = 21;

/// The house keeps drawing below this total.
const HOUSE_STANDS_AT: u32 = 17;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackjackOutcome {
    Win,
    Bust,
    Tie,
}

impl BlackjackOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Bust => "BUST",
            Self::Tie => "TIE",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackjackState {
    #[default]
    NewGame,
    Ongoing,
    GameOver(BlackjackOutcome),
}

impl BlackjackState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver(_))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::Ongoing => "Ongoing",
            Self::GameOver(_) => "Game over.",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

/// Ace always counts 11, faces count 10.
pub const fn card_value(card: Card) -> u32 {
    match card.rank() {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        rank => rank.value() as u32,
    }
}

pub fn hand_value(cards: &[Card]) -> u32 {
    cards.iter().map(|&card| card_value(card)).sum()
}

/// One player against the house, single deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blackjack {
    deck: Deck,
    player: Player,
    house: Player,
    state: BlackjackState,
    #[serde(skip)]
    rng: GameRng,
}

impl Blackjack {
    pub fn new(rng: GameRng) -> Result<Self> {
        let mut game = Self {
            deck: Deck::default(),
            player: Player::new(),
            house: Player::new(),
            state: Default::default(),
            rng,
        };
        game.setup()?;
        Ok(game)
    }

    /// Deals from `deck` as is, without shuffling.
    pub fn from_deck(deck: Deck) -> Result<Self> {
        let mut game = Self {
            deck,
            player: Player::new(),
            house: Player::new(),
            state: Default::default(),
            rng: GameRng::from_entropy(),
        };
        game.deal()?;
        Ok(game)
    }

    fn setup(&mut self) -> Result<()> {
        self.deck = Deck::shuffled(1, &mut *self.rng);
        self.deal()
    }

    fn deal(&mut self) -> Result<()> {
        self.player.clear_hand();
        self.house.clear_hand();
        self.state = BlackjackState::NewGame;
        for _ in 0..2 {
            self.player.add_to_hand(self.deck.draw()?);
            self.house.add_to_hand(self.deck.draw()?);
        }
        Ok(())
    }

    pub fn state(&self) -> BlackjackState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn house(&self) -> &Player {
        &self.house
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player_sum(&self) -> u32 {
        hand_value(self.player.cards())
    }

    pub fn house_sum(&self) -> u32 {
        hand_value(self.house.cards())
    }

    /// Plays one decision and reports both totals plus the result, if any.
    pub fn next_state(&mut self, decision: Decision) -> Result<String> {
        if self.state.is_finished() {
            return Ok(format!(
                "{}Game over. Type reset to play again.",
                self.display_state("")
            ));
        }
        self.state = BlackjackState::Ongoing;

        let status = match decision {
            Decision::Hit => {
                self.player.add_to_hand(self.deck.draw()?);
                self.check_after_hit()
            }
            Decision::Stand => {
                while self.house_sum() < HOUSE_STANDS_AT {
                    self.house.add_to_hand(self.deck.draw()?);
                }
                Some(self.resolve_stand())
            }
        };

        let status = match status {
            Some(outcome) => {
                log::debug!(
                    "blackjack over: {:?} ({} vs {})",
                    outcome,
                    self.player_sum(),
                    self.house_sum()
                );
                self.state = BlackjackState::GameOver(outcome);
                outcome.label()
            }
            None => "",
        };
        Ok(self.display_state(status))
    }

    fn check_after_hit(&self) -> Option<BlackjackOutcome> {
        let player = self.player_sum();
        if player > BLACKJACK {
            Some(BlackjackOutcome::Bust)
        } else if player == BLACKJACK || self.house_sum() > BLACKJACK {
            Some(BlackjackOutcome::Win)
        } else {
            None
        }
    }

    fn resolve_stand(&self) -> BlackjackOutcome {
        use BlackjackOutcome::*;

        let player = self.player_sum();
        let house = self.house_sum();
        match (player > BLACKJACK, house > BLACKJACK) {
            (true, true) => Tie,
            (true, false) => Bust,
            (false, true) => Win,
            (false, false) if player > house => Win,
            (false, false) if player == house => Tie,
            (false, false) => Bust,
        }
    }

    fn display_state(&self, status: &str) -> String {
        format!(
            "CURRENT HAND: {}\nHOUSE HAND: {}\n{}",
            self.player_sum(),
            self.house_sum(),
            status
        )
    }

    fn table(&self) -> String {
        let revealed = self
            .house
            .cards()
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        format!(
            "\nBlackjack\n\nHouse's revealed card: {revealed}\n\nPlayer Hand: \n{}",
            self.player.show_hand()
        )
    }

    pub fn reset(&mut self) -> Result<&'static str> {
        self.setup()?;
        log::debug!("blackjack reset");
        Ok("Game reset")
    }

    /// Hands hold nothing beyond the current round, so clearing is a reset.
    pub fn clear(&mut self) -> Result<&'static str> {
        self.setup()?;
        Ok("History cleared")
    }

    pub fn execute(&mut self, command: Command<Decision>) -> Result<Reply> {
        use Lifecycle::*;

        Ok(match command {
            Command::Lifecycle(NewGame) => {
                self.setup()?;
                self.table().into()
            }
            Command::Lifecycle(Reset) => self.reset()?.into(),
            Command::Lifecycle(Clear) => self.clear()?.into(),
            Command::Lifecycle(Help) => HELP.into(),
            Command::Lifecycle(State) => self.state.label().into(),
            Command::Lifecycle(Quit) => Reply::Quit,
            Command::Move(decision) => self.next_state(decision)?.into(),
        })
    }
}

impl GameEngine for Blackjack {
    type Move = Decision;

    const NAME: &'static str = "Blackjack";
    const INVALID_INPUT: &'static str = "Invalid input. User should specify hit or stand.";

    fn parse_move(input: &str) -> Option<Self::Move> {
        if input.eq_ignore_ascii_case("hit") {
            Some(Decision::Hit)
        } else if input.eq_ignore_ascii_case("stand") {
            Some(Decision::Stand)
        } else {
            None
        }
    }

    fn help() -> &'static str {
        HELP
    }

    fn state_label(&self) -> String {
        self.state.label().to_owned()
    }
}
