use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A physical token in the arena. Scoresheets record each token as a single
/// upper-case character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Token {
    #[serde(rename = "B")]
    Bronze,
    #[serde(rename = "S")]
    Silver,
    #[serde(rename = "G")]
    Gold,
}

/// Number of tokens of each type seen in some token string.
pub type TokenCounts = EnumMap<Token, usize>;

impl Token {
    /// Parse a scoresheet character. Case-sensitive: `'b'` is not a token.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Token::Bronze),
            'S' => Some(Token::Silver),
            'G' => Some(Token::Gold),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Token::Bronze => 'B',
            Token::Silver => 'S',
            Token::Gold => 'G',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Token::Bronze => "Bronze",
            Token::Silver => "Silver",
            Token::Gold => "Gold",
        }
    }
}

/// All legal token characters, in declaration order
pub fn legal_symbols() -> Vec<char> {
    Token::iter().map(Token::symbol).collect()
}

/// Count tokens in a normalized token string. Characters that are not
/// tokens are skipped; rejecting them is the validator's job.
pub fn count_tokens(tokens: &str) -> TokenCounts {
    let mut counts = TokenCounts::default();
    for token in tokens.chars().filter_map(Token::from_char) {
        counts[token] += 1;
    }
    counts
}
