use arcade_core::*;

fn arcade() -> Arcade {
    Arcade::new(ArcadeConfig::default().with_seed(2024)).unwrap()
}

fn coords_input((row, col): Coord2) -> String {
    format!("{row},{col}")
}

fn card_input(card: Card) -> String {
    format!("{},{}", card.rank().name(), card.suit().name())
}

#[test]
fn unknown_game_and_bad_input() {
    let mut arcade = arcade();
    assert_eq!(
        arcade.handle_input("solitaire", "new game").unwrap().text(),
        "Invalid game provided."
    );
    assert_eq!(
        arcade.handle_input("blackjack", "fold").unwrap().text(),
        Blackjack::INVALID_INPUT
    );
    assert_eq!(
        arcade.handle_input("minesweeper", "a,b").unwrap().text(),
        Minesweeper::INVALID_INPUT
    );
    assert_eq!(
        arcade.handle_input("crazy eights", "Nine").unwrap().text(),
        CrazyEights::INVALID_INPUT
    );
    assert_eq!(
        arcade.handle_input("mastermind", "12345").unwrap().text(),
        Mastermind::INVALID_INPUT
    );
}

#[test]
fn quit_and_state_for_every_game() {
    let mut arcade = arcade();
    for kind in GameKind::ALL {
        assert!(arcade.handle_input(kind.name(), "QUIT").unwrap().is_quit());
        let label = arcade.handle_input(kind.name(), " state ").unwrap();
        assert_eq!(label.text(), arcade.state_label(kind));
    }
}

#[test]
fn minesweeper_through_session() {
    let mut arcade = arcade();
    let layout = arcade.minesweeper().layout().clone();
    let safe: Vec<Coord2> = layout
        .iter_coords()
        .filter(|&coords| !layout.contains_mine(coords))
        .collect();

    let mut last = String::new();
    for &coords in &safe {
        if arcade.minesweeper().is_finished() {
            break;
        }
        if arcade.minesweeper().cell_at(coords).is_hidden() {
            last = arcade
                .handle_input("Minesweeper", &coords_input(coords))
                .unwrap()
                .text()
                .to_owned();
            assert!(!last.contains("BOOM"));
        }
    }
    assert!(last.contains("Congratulations! You win!"), "{last}");
    assert!(last.contains(&format!("(3BV: {})", three_bv(&layout))));
    assert_eq!(arcade.minesweeper().state(), MinesweeperState::Won);
    assert_eq!(arcade.state_label(GameKind::Minesweeper), "Game over.");

    let reply = arcade.handle_input("minesweeper", &coords_input(safe[0])).unwrap();
    assert!(reply.text().ends_with("Game over. Type reset to play again."));
}

#[test]
fn minesweeper_mine_and_bounds() {
    let mut arcade = arcade();
    let (rows, cols) = arcade.minesweeper().size();
    assert_eq!(
        arcade.handle_input("minesweeper", &coords_input((rows, 0))),
        Err(GameError::OutOfBounds)
    );
    assert_eq!(
        arcade.handle_input("minesweeper", &format!("0,{cols}")),
        Err(GameError::OutOfBounds)
    );
    assert_eq!(
        arcade.handle_input("minesweeper", "99999999999999999999999,0"),
        Err(GameError::OutOfBounds)
    );

    let layout = arcade.minesweeper().layout().clone();
    let mine = layout
        .iter_coords()
        .find(|&coords| layout.contains_mine(coords))
        .unwrap();
    let reply = arcade.handle_input("minesweeper", &coords_input(mine)).unwrap();
    assert!(reply.text().ends_with("BOOM! Game over."));
    assert_eq!(arcade.state_label(GameKind::Minesweeper), "Game over.");
}

#[test]
fn mastermind_solve_is_archived() {
    let mut arcade = arcade();
    let hidden: String = arcade
        .mastermind()
        .hidden_sequence()
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect();
    let miss: String = arcade
        .mastermind()
        .hidden_sequence()
        .iter()
        .map(|d| char::from(b'0' + (d + 1) % 10))
        .collect();

    let reply = arcade.handle_input("mastermind", &miss).unwrap();
    assert!(reply.text().contains("bulls: 0"));
    let reply = arcade.handle_input("mastermind", &hidden).unwrap();
    assert!(reply.text().contains("bulls: 4, cows: 0"));
    assert_eq!(arcade.state_label(GameKind::Mastermind), "Game over.");

    let number = arcade.mastermind().game_number();
    assert_eq!(arcade.mastermind_archive().history()[&number].len(), 2);

    arcade.handle_input("mastermind", "reset").unwrap();
    assert_eq!(arcade.mastermind().game_number(), number + 1);
    arcade.handle_input("mastermind", "clear").unwrap();
    assert!(arcade.mastermind_archive().history().is_empty());
    assert_eq!(arcade.mastermind_archive().total_games(), 1);
    assert_eq!(arcade.mastermind().game_number(), 1);
}

#[test]
fn blackjack_through_session() {
    let mut arcade = arcade();
    let reply = arcade.handle_input("blackjack", "stand").unwrap();
    assert!(reply.text().starts_with("CURRENT HAND:"));
    assert!(matches!(
        arcade.blackjack().state(),
        BlackjackState::GameOver(_)
    ));
    let reply = arcade.handle_input("blackjack", "hit").unwrap();
    assert!(reply.text().ends_with("Game over. Type reset to play again."));
    assert_eq!(
        arcade.handle_input("blackjack", "reset").unwrap().text(),
        "Game reset"
    );
    assert_eq!(arcade.blackjack().player().cards().len(), 2);
}

#[test]
fn crazy_eights_draw_and_play() {
    let mut arcade = arcade();
    let before = arcade.crazy_eights().player(1).unwrap().cards().len();
    let reply = arcade.handle_input("crazy eights", "draw").unwrap();
    assert!(reply.text().contains("Top Card:"));
    assert_eq!(
        arcade.crazy_eights().player(1).unwrap().cards().len(),
        before + 1
    );

    let mut options = arcade.crazy_eights().play_options(1);
    while options.is_empty() {
        arcade.handle_input("crazy eights", "draw").unwrap();
        options = arcade.crazy_eights().play_options(1);
    }
    let card = options[0];
    let reply = arcade
        .handle_input("crazy eights", &card_input(card))
        .unwrap();
    assert!(
        reply.text().contains(&format!("card {card} was played")),
        "{}",
        reply.text()
    );
}
