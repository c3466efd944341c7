use core::fmt::Write;
use serde::{Deserialize, Serialize};

use crate::*;

const HELP: &str = "Get rid of all your cards. Play a card matching the rank or the suit of the top card \
of the discard pile (Ex: Nine,Hearts). Eights are wild: play one at any time and name the next suit \
(Ex: Eight,Spades,Hearts). If you cannot play, type draw. When a hand is emptied the round ends and \
the player(s) with the fewest points left in hand score the difference from everyone else. \
Type reset for a new game, clear to also forget past games, state to see the round, quit to leave.";

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

/// Player number of the person at the keyboard; the rest are automated.
pub const USER_PLAYER: usize = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrazyEightsConfig {
    pub players: usize,
    /// Let players other than the user take their turns after each user play.
    pub auto_opponents: bool,
}

impl CrazyEightsConfig {
    pub fn new(players: usize) -> Result<Self> {
        let config = Self {
            players,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            Ok(())
        } else {
            Err(GameError::InvalidConfig("crazy eights needs 2 to 7 players"))
        }
    }
}

impl Default for CrazyEightsConfig {
    fn default() -> Self {
        Self {
            players: 4,
            auto_opponents: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrazyEightsState {
    #[default]
    NewGame,
    /// Last completed round.
    Round(usize),
}

impl CrazyEightsState {
    pub fn label(self) -> String {
        match self {
            Self::NewGame => "New game.".to_owned(),
            Self::Round(round) => format!("Round {round}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrazyEightsMove {
    Draw,
    /// `suit` is the suit named when playing an eight.
    Play { card: Card, suit: Option<Suit> },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drew(Card),
    /// Nothing left to draw, the round was scored and dealt again.
    RoundReset,
    UnknownPlayer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Card),
    RoundReset,
    UnknownPlayer,
}

/// Finished game: final players and every round snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub players: Vec<Player>,
    pub rounds: Vec<Vec<Player>>,
}

/// Points left in a hand at the end of a round.
pub fn card_points(card: Card) -> u32 {
    match card.rank() {
        Rank::Eight => 50,
        rank if rank > Rank::Ten => 10,
        rank => rank.value().into(),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrazyEights {
    config: CrazyEightsConfig,
    players: Vec<Player>,
    deck: Deck,
    discard: Vec<Card>,
    current_suit: Suit,
    points: Vec<u32>,
    round_history: Vec<Vec<Player>>,
    game_history: Vec<GameRecord>,
    state: CrazyEightsState,
    #[serde(skip)]
    rng: GameRng,
}

impl CrazyEights {
    pub fn new(config: CrazyEightsConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            config,
            players: Vec::new(),
            deck: Deck::default(),
            discard: Vec::new(),
            current_suit: Suit::Spades,
            points: Vec::new(),
            round_history: Vec::new(),
            game_history: Vec::new(),
            state: Default::default(),
            rng,
        };
        game.setup_game();
        Ok(game)
    }

    /// Fresh players numbered `1..=n`, empty round history, first round dealt.
    fn setup_game(&mut self) {
        self.players = (0..self.config.players).map(|_| Player::new()).collect();
        self.round_history.clear();
        self.setup_round();
    }

    fn setup_round(&mut self) {
        for player in &mut self.players {
            player.clear_hand();
        }

        let num_decks = if self.players.len() <= 5 { 1 } else { 2 };
        self.deck = Deck::shuffled(num_decks, &mut *self.rng);
        let hand_size = if self.players.len() > 2 { 5 } else { 7 };
        self.deal(hand_size);

        self.discard.clear();
        if let Ok(top) = self.deck.draw() {
            self.current_suit = top.suit();
            self.discard.push(top);
        }
        self.points = vec![0; self.players.len()];
        log::debug!(
            "dealt {} cards to {} players, {} left in deck",
            hand_size,
            self.players.len(),
            self.deck.len()
        );
    }

    /// Deals round-robin from player 1, stopping early if the deck runs out.
    pub fn deal(&mut self, cards_per_player: usize) -> &mut Self {
        let total = cards_per_player * self.players.len();
        for n in 0..total {
            let Ok(card) = self.deck.draw() else {
                break;
            };
            let idx = n % self.players.len();
            self.players[idx].add_to_hand(card);
        }
        self
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, player_num: usize) -> Option<&Player> {
        player_num.checked_sub(1).and_then(|idx| self.players.get(idx))
    }

    fn player_mut(&mut self, player_num: usize) -> Option<&mut Player> {
        player_num
            .checked_sub(1)
            .and_then(|idx| self.players.get_mut(idx))
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn top_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn points(&self) -> &[u32] {
        &self.points
    }

    pub fn round_history(&self) -> &[Vec<Player>] {
        &self.round_history
    }

    pub fn game_history(&self) -> &[GameRecord] {
        &self.game_history
    }

    pub fn state(&self) -> CrazyEightsState {
        self.state
    }

    /// Suit to follow: the named suit when an eight is on top, else the top card's.
    pub fn top_card_suit(&self) -> Suit {
        match self.top_card() {
            Some(top) if top.rank() != Rank::Eight => top.suit(),
            _ => self.current_suit,
        }
    }

    pub fn playable(&self, card: Card) -> bool {
        let Some(top) = self.top_card() else {
            return true;
        };
        card.rank() == top.rank() || card.suit() == self.top_card_suit() || card.rank() == Rank::Eight
    }

    pub fn play_options(&self, player_num: usize) -> Vec<Card> {
        self.player(player_num)
            .map(|player| {
                player
                    .cards()
                    .iter()
                    .copied()
                    .filter(|&card| self.playable(card))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Plays `card` from a player's hand, returning whether it was accepted.
    ///
    /// `suit` names the suit to follow after an eight and defaults to the eight's own.
    pub fn play(&mut self, player_num: usize, card: Card, suit: Option<Suit>) -> bool {
        let playable = self.playable(card);
        let Some(player) = self.player_mut(player_num) else {
            return false;
        };
        if !playable || !player.remove_from_hand(card) {
            return false;
        }
        let emptied = !player.has_cards();

        self.discard.push(card);
        if card.rank() == Rank::Eight {
            self.current_suit = suit.unwrap_or(card.suit());
        }
        log::trace!("player {} played {}", player_num, card);

        if emptied {
            self.state = CrazyEightsState::Round(self.round_history.len() + 1);
            log::debug!("player {} emptied their hand", player_num);
            self.reset_round();
        }
        true
    }

    pub fn draw(&mut self, player_num: usize) -> DrawOutcome {
        if self.player(player_num).is_none() {
            return DrawOutcome::UnknownPlayer;
        }

        if self.deck.is_empty() {
            if self.discard.len() <= 1 {
                log::warn!("no cards left to draw, ending the round");
                self.reset_round();
                return DrawOutcome::RoundReset;
            }
            self.recycle_discard();
        }

        match self.deck.draw() {
            Ok(card) => {
                if let Some(player) = self.player_mut(player_num) {
                    player.add_to_hand(card);
                }
                DrawOutcome::Drew(card)
            }
            Err(_) => {
                self.reset_round();
                DrawOutcome::RoundReset
            }
        }
    }

    /// Shuffles everything under the top discard back into the deck.
    fn recycle_discard(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        let recycled = self.discard.len();
        self.deck.add_cards(self.discard.drain(..));
        self.discard.push(top);
        self.deck.shuffle(&mut *self.rng);
        log::debug!("recycled {} discarded cards into the deck", recycled);
    }

    /// Automated turn: play the first playable card, drawing until one turns up.
    pub fn turn(&mut self, player_num: usize) -> TurnOutcome {
        loop {
            if let Some(&card) = self.play_options(player_num).first() {
                let suit = self.preferred_suit(player_num, card);
                self.play(player_num, card, Some(suit));
                return TurnOutcome::Played(card);
            }
            match self.draw(player_num) {
                DrawOutcome::Drew(_) => continue,
                DrawOutcome::RoundReset => return TurnOutcome::RoundReset,
                DrawOutcome::UnknownPlayer => return TurnOutcome::UnknownPlayer,
            }
        }
    }

    /// Suit the player holds most of, not counting `playing`.
    fn preferred_suit(&self, player_num: usize, playing: Card) -> Suit {
        let Some(player) = self.player(player_num) else {
            return playing.suit();
        };
        let mut best = playing.suit();
        let mut best_count = 0;
        for suit in Suit::ALL {
            let count = player
                .cards_of_suit(suit)
                .filter(|&card| card.rank() != Rank::Eight)
                .count();
            if count > best_count {
                best = suit;
                best_count = count;
            }
        }
        best
    }

    /// Scores the round and deals a new one.
    ///
    /// Players at the lowest hand value each gain the summed difference between
    /// every other player's points and that minimum.
    pub fn reset_round(&mut self) -> &mut Self {
        self.round_history.push(self.players.clone());

        for (points, player) in self.points.iter_mut().zip(&self.players) {
            *points += player.cards().iter().map(|&card| card_points(card)).sum::<u32>();
        }

        if let Some(&min) = self.points.iter().min() {
            let surplus: u32 = self
                .points
                .iter()
                .filter(|&&points| points > min)
                .map(|&points| points - min)
                .sum();
            for (player, &points) in self.players.iter_mut().zip(&self.points) {
                if points == min {
                    player.increase_score(surplus as i32);
                }
            }
            log::debug!(
                "round {} scored, points: {:?}, winners gain {}",
                self.round_history.len(),
                self.points,
                surplus
            );
        }

        self.setup_round();
        self
    }

    /// Archives the current game and starts a new one.
    ///
    /// `num_players` changes the player count; `None` keeps it.
    pub fn reset(&mut self, num_players: Option<usize>) -> Result<&'static str> {
        let mut config = self.config;
        if let Some(players) = num_players {
            config.players = players;
            config.validate()?;
        }

        self.state = CrazyEightsState::NewGame;
        self.reset_round();
        self.game_history.push(GameRecord {
            players: self.players.clone(),
            rounds: core::mem::take(&mut self.round_history),
        });
        self.config = config;
        self.setup_game();
        log::debug!("crazy eights reset with {} players", self.players.len());
        Ok("Game reset")
    }

    /// Resets and forgets every archived game.
    pub fn clear(&mut self) -> &'static str {
        self.state = CrazyEightsState::NewGame;
        self.game_history.clear();
        self.setup_game();
        "History cleared"
    }

    fn table(&self, player_num: usize) -> String {
        let mut out = String::new();
        match self.top_card() {
            Some(top) if top.rank() == Rank::Eight => {
                let _ = write!(out, "\nTop Card: {top} (suit: {})", self.current_suit);
            }
            Some(top) => {
                let _ = write!(out, "\nTop Card: {top}");
            }
            None => out.push_str("\nTop Card: none"),
        }
        let hand = self.player(player_num).map(Player::show_hand).unwrap_or_default();
        let _ = write!(out, "\n\nPlayer Hand: \n{hand}");
        out
    }

    /// Automated turns for everyone after the user, stopping at a round change.
    fn play_opponents(&mut self) -> String {
        let mut out = String::new();
        let round = self.round_history.len();
        for player_num in (USER_PLAYER + 1)..=self.players.len() {
            match self.turn(player_num) {
                TurnOutcome::Played(card) => {
                    let _ = writeln!(out, "Player {player_num} played {card}");
                }
                TurnOutcome::RoundReset | TurnOutcome::UnknownPlayer => {}
            }
            if self.round_history.len() != round {
                break;
            }
        }
        out
    }

    pub fn execute(&mut self, command: Command<CrazyEightsMove>) -> Result<Reply> {
        use Lifecycle::*;

        Ok(match command {
            Command::Lifecycle(NewGame) => {
                self.clear();
                format!("\nCrazy Eights\n\n{}{}\n", self.state.label(), self.table(USER_PLAYER))
                    .into()
            }
            Command::Lifecycle(Reset) => {
                let message = self.reset(None)?;
                format!("{message}\n{}\n{}", self.state.label(), self.table(USER_PLAYER)).into()
            }
            Command::Lifecycle(Clear) => self.clear().into(),
            Command::Lifecycle(Help) => HELP.into(),
            Command::Lifecycle(State) => self.state.label().into(),
            Command::Lifecycle(Quit) => Reply::Quit,
            Command::Move(CrazyEightsMove::Draw) => {
                self.draw(USER_PLAYER);
                self.table(USER_PLAYER).into()
            }
            Command::Move(CrazyEightsMove::Play { card, suit }) => {
                let before = self.state;
                let played = self.play(USER_PLAYER, card, suit);
                let mut out = String::new();
                if played && self.config.auto_opponents && before == self.state {
                    out.push_str(&self.play_opponents());
                }
                let not = if played { "" } else { "not " };
                let _ = write!(out, "card {card} was {not}played {}", self.table(USER_PLAYER));
                if before != self.state {
                    let score = self.player(USER_PLAYER).map(Player::score).unwrap_or_default();
                    out = format!("{}\nScore: {score}\n{out}", self.state.label());
                }
                out.into()
            }
        })
    }
}

impl GameEngine for CrazyEights {
    type Move = CrazyEightsMove;

    const NAME: &'static str = "Crazy Eights";
    const INVALID_INPUT: &'static str = "Invalid input. User should specify either to draw or which card to place (Ex: Eight,Spades)";

    fn parse_move(input: &str) -> Option<Self::Move> {
        if input.eq_ignore_ascii_case("draw") {
            return Some(CrazyEightsMove::Draw);
        }
        let mut parts = input.split(',');
        let rank = parts.next()?.parse().ok()?;
        let card_suit = parts.next()?.parse().ok()?;
        let suit = match parts.next() {
            Some(named) => Some(named.parse().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(CrazyEightsMove::Play {
            card: Card::new(rank, card_suit),
            suit,
        })
    }

    fn help() -> &'static str {
        HELP
    }

    fn state_label(&self) -> String {
        self.state.label()
    }
}

#[cfg(test)]
impl CrazyEights {
    /// Stages a card on the discard pile; it comes from no hand.
    fn push_discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    fn set_current_suit(&mut self, suit: Suit) {
        self.current_suit = suit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(players: usize) -> CrazyEights {
        let mut config = CrazyEightsConfig::new(players).unwrap();
        config.auto_opponents = false;
        CrazyEights::new(config, GameRng::seeded(17)).unwrap()
    }

    fn total_cards(game: &CrazyEights) -> usize {
        game.deck().len()
            + game.discard().len()
            + (1..=game.num_players())
                .map(|n| game.player(n).unwrap().cards().len())
                .sum::<usize>()
    }

    #[test]
    fn deals_five_each_for_four_players() {
        let mut game = game(4);
        assert_eq!(game.player(1).unwrap().cards().len(), 5);
        assert_eq!(game.discard().len(), 1);
        assert_eq!(total_cards(&game), 52);
        game.deal(5);
        assert_eq!(game.player(1).unwrap().cards().len(), 10);
        assert_eq!(total_cards(&game), 52);
    }

    #[test]
    fn two_players_get_seven_and_big_tables_two_decks() {
        let two = game(2);
        assert_eq!(two.player(2).unwrap().cards().len(), 7);
        let seven = game(7);
        assert_eq!(total_cards(&seven), 104);
    }

    #[test]
    fn draw_adds_a_card() {
        let mut game = game(2);
        assert!(matches!(game.draw(1), DrawOutcome::Drew(_)));
        assert_eq!(game.player(1).unwrap().cards().len(), 8);
        assert_eq!(game.draw(3), DrawOutcome::UnknownPlayer);
        assert_eq!(game.draw(0), DrawOutcome::UnknownPlayer);
    }

    #[test]
    fn playable_rules() {
        let mut game = game(4);
        game.push_discard(Card::new(Rank::Nine, Suit::Hearts));
        assert!(!game.playable(Card::new(Rank::Ace, Suit::Spades)));
        assert!(game.playable(Card::new(Rank::Nine, Suit::Spades)));
        assert!(game.playable(Card::new(Rank::Ace, Suit::Hearts)));
        assert!(game.playable(Card::new(Rank::Eight, Suit::Spades)));
    }

    #[test]
    fn eight_is_always_playable() {
        let mut game = game(4);
        for top in Deck::new(1).iter().copied() {
            game.push_discard(top);
            for suit in Suit::ALL {
                assert!(game.playable(Card::new(Rank::Eight, suit)));
            }
        }
    }

    #[test]
    fn named_suit_follows_an_eight() {
        let mut game = game(4);
        game.push_discard(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(game.top_card_suit(), Suit::Spades);
        game.push_discard(Card::new(Rank::Eight, Suit::Spades));
        game.set_current_suit(Suit::Hearts);
        assert_eq!(game.top_card_suit(), Suit::Hearts);
        assert!(game.playable(Card::new(Rank::Two, Suit::Hearts)));
        assert!(!game.playable(Card::new(Rank::Two, Suit::Spades)));
    }

    #[test]
    fn play_moves_card_to_discard() {
        let mut game = game(4);
        let top = Card::new(Rank::King, Suit::Hearts);
        game.push_discard(top);

        let unplayable = Card::new(Rank::Two, Suit::Clubs);
        game.player_mut(1).unwrap().add_to_hand(unplayable);
        assert!(!game.play(1, unplayable, None));
        assert_eq!(game.player(1).unwrap().cards().len(), 6);
        assert_eq!(game.top_card(), Some(top));

        let same_rank = Card::new(Rank::King, Suit::Spades);
        game.player_mut(1).unwrap().add_to_hand(same_rank);
        assert!(game.play(1, same_rank, Some(Suit::Diamonds)));
        assert_eq!(game.player(1).unwrap().cards().len(), 6);
        assert_eq!(game.top_card(), Some(same_rank));
        assert_eq!(game.top_card_suit(), Suit::Spades);

        let eight = Card::new(Rank::Eight, Suit::Clubs);
        game.player_mut(2).unwrap().add_to_hand(eight);
        assert!(game.play(2, eight, Some(Suit::Diamonds)));
        assert_eq!(game.player(2).unwrap().cards().len(), 5);
        assert_eq!(game.top_card(), Some(eight));
        assert_eq!(game.top_card_suit(), Suit::Diamonds);
    }

    #[test]
    fn cannot_play_a_card_not_held() {
        let mut game = game(4);
        let eight = Card::new(Rank::Eight, Suit::Clubs);
        while game.player(1).unwrap().has(eight) {
            game.player_mut(1).unwrap().remove_from_hand(eight);
        }
        assert!(!game.play(1, eight, None));
        assert!(!game.play(9, eight, None));
    }

    #[test]
    fn play_options_lists_matching_cards() {
        let mut game = game(4);
        let player = game.player_mut(1).unwrap();
        player.clear_hand();
        for card in [
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Four, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Spades),
        ] {
            player.add_to_hand(card);
        }
        game.push_discard(Card::new(Rank::Ten, Suit::Spades));
        let options = game.play_options(1);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|&card| game.player(1).unwrap().has(card)));
    }

    #[test]
    fn round_scoring_awards_surplus_to_lowest() {
        let mut game = game(2);
        game.player_mut(1)
            .unwrap()
            .clear_hand()
            .add_to_hand(Card::new(Rank::Ace, Suit::Clubs));
        game.player_mut(2)
            .unwrap()
            .clear_hand()
            .add_to_hand(Card::new(Rank::Eight, Suit::Diamonds));
        game.reset_round();
        assert_eq!(game.player(1).unwrap().score(), 49);
        assert_eq!(game.player(2).unwrap().score(), 0);
        assert_eq!(game.round_history().len(), 1);
        assert_eq!(game.player(1).unwrap().cards().len(), 7);
    }

    #[test]
    fn tied_winners_each_gain_the_surplus() {
        let mut game = game(3);
        let hands = [
            vec![Card::new(Rank::King, Suit::Clubs)],
            vec![Card::new(Rank::Queen, Suit::Hearts)],
            vec![Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Eight, Suit::Spades)],
        ];
        for (n, hand) in hands.into_iter().enumerate() {
            let player = game.player_mut(n + 1).unwrap();
            player.clear_hand();
            for card in hand {
                player.add_to_hand(card);
            }
        }
        game.reset_round();
        // 10, 10, 55: surplus is 45
        assert_eq!(game.player(1).unwrap().score(), 45);
        assert_eq!(game.player(2).unwrap().score(), 45);
        assert_eq!(game.player(3).unwrap().score(), 0);
    }

    #[test]
    fn emptying_a_hand_ends_the_round() {
        let mut game = game(2);
        let last = Card::new(Rank::Eight, Suit::Hearts);
        game.player_mut(1).unwrap().clear_hand().add_to_hand(last);
        assert!(game.play(1, last, Some(Suit::Clubs)));
        assert_eq!(game.state(), CrazyEightsState::Round(1));
        assert_eq!(game.state_label(), "Round 1");
        assert_eq!(game.round_history().len(), 1);
        assert!(game.player(1).unwrap().score() > 0);
        assert_eq!(game.player(1).unwrap().cards().len(), 7);
    }

    #[test]
    fn empty_deck_recycles_discard() {
        let mut game = game(2);
        while !game.deck().is_empty() {
            game.draw(2);
        }
        game.push_discard(Card::new(Rank::Two, Suit::Clubs));
        game.push_discard(Card::new(Rank::Three, Suit::Clubs));
        let cards = total_cards(&game);
        assert!(matches!(game.draw(1), DrawOutcome::Drew(_)));
        assert_eq!(game.discard().len(), 1);
        assert_eq!(game.top_card(), Some(Card::new(Rank::Three, Suit::Clubs)));
        assert_eq!(total_cards(&game), cards);
    }

    #[test]
    fn empty_deck_and_discard_resets_the_round() {
        let mut game = game(2);
        while !game.deck().is_empty() {
            game.draw(2);
        }
        assert_eq!(game.discard().len(), 1);
        assert_eq!(game.draw(1), DrawOutcome::RoundReset);
        assert_eq!(game.round_history().len(), 1);
        assert_eq!(total_cards(&game), 52);
    }

    #[test]
    fn automated_turns_always_finish() {
        let mut game = game(4);
        for n in 1..=4 {
            game.player_mut(n).unwrap().clear_hand();
        }
        for n in 2..=4 {
            assert_ne!(game.turn(n), TurnOutcome::UnknownPlayer);
        }
        for _ in 0..200 {
            for n in 1..=4 {
                game.turn(n);
            }
        }
        assert_eq!(game.turn(5), TurnOutcome::UnknownPlayer);
    }

    #[test]
    fn reset_archives_game_and_clear_zeroes_scores() {
        let mut game = game(4);
        game.player_mut(1).unwrap().clear_hand();
        assert_eq!(game.reset(None).unwrap(), "Game reset");
        assert_eq!(game.game_history().len(), 1);
        assert!(game.game_history()[0].players[0].score() > 0);
        assert_eq!(game.game_history()[0].rounds.len(), 1);
        assert!(game.round_history().is_empty());

        assert_eq!(game.clear(), "History cleared");
        assert!(game.game_history().is_empty());
        for n in 1..=4 {
            assert_eq!(game.player(n).unwrap().score(), 0);
        }
        assert!(game.points().iter().all(|&p| p == 0));
    }

    #[test]
    fn reset_can_change_player_count() {
        let mut game = game(4);
        game.reset(Some(6)).unwrap();
        assert_eq!(game.num_players(), 6);
        assert!(game.reset(Some(8)).is_err());
        assert_eq!(game.num_players(), 6);
    }

    #[test]
    fn decodes_moves() {
        assert_eq!(CrazyEights::decode("DRAW"), Some(Command::Move(CrazyEightsMove::Draw)));
        assert_eq!(
            CrazyEights::decode("Eight,Spades"),
            Some(Command::Move(CrazyEightsMove::Play {
                card: Card::new(Rank::Eight, Suit::Spades),
                suit: None,
            }))
        );
        assert_eq!(
            CrazyEights::decode("eight,spades,hearts"),
            Some(Command::Move(CrazyEightsMove::Play {
                card: Card::new(Rank::Eight, Suit::Spades),
                suit: Some(Suit::Hearts),
            }))
        );
        assert_eq!(CrazyEights::decode("Eight"), None);
        assert_eq!(CrazyEights::decode("Eight,Spades,Hearts,Clubs"), None);
        assert_eq!(CrazyEights::decode("Nine,Swords"), None);
    }

    #[test]
    fn user_play_reports_result() {
        let mut game = game(4);
        game.push_discard(Card::new(Rank::King, Suit::Hearts));
        let card = Card::new(Rank::Two, Suit::Clubs);
        game.player_mut(1).unwrap().add_to_hand(card);
        let reply = game
            .execute(Command::Move(CrazyEightsMove::Play { card, suit: None }))
            .unwrap();
        assert!(reply.text().starts_with("card two of clubs was not played"));
    }
}
