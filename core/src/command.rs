/// Commands every game understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    NewGame,
    Reset,
    Clear,
    Help,
    State,
    Quit,
}

impl Lifecycle {
    /// Case-insensitive match on the whole (trimmed) input.
    pub fn parse(input: &str) -> Option<Self> {
        use Lifecycle::*;

        let input = input.trim();
        [
            ("new game", NewGame),
            ("reset", Reset),
            ("clear", Clear),
            ("help", Help),
            ("state", State),
            ("quit", Quit),
        ]
        .into_iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(input))
        .map(|(_, command)| command)
    }
}

/// A decoded line of input for a game with moves of type `M`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<M> {
    Lifecycle(Lifecycle),
    Move(M),
}

/// What a game hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Quit => "QUIT",
        }
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Input surface shared by the game engines.
pub trait GameEngine {
    type Move;

    const NAME: &'static str;

    /// Reply for input that is neither a lifecycle command nor a valid move.
    const INVALID_INPUT: &'static str;

    fn parse_move(input: &str) -> Option<Self::Move>;

    fn help() -> &'static str;

    fn state_label(&self) -> String;

    /// Decodes a raw line once; lifecycle words win over moves.
    fn decode(input: &str) -> Option<Command<Self::Move>> {
        match Lifecycle::parse(input) {
            Some(lifecycle) => Some(Command::Lifecycle(lifecycle)),
            None => Self::parse_move(input.trim()).map(Command::Move),
        }
    }
}
