use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Hidden,
    Revealed(u8),
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Character drawn on the board; zero counts render blank.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '-',
            Self::Revealed(0) => ' ',
            Self::Revealed(count) => (b'0' + count) as char,
        }
    }
}
