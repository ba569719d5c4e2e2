use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    pub static ref NAME_LOOKUP: HashMap<&'static str, TokenCategory> = {
        let mut map = HashMap::new();
        for category in TokenCategory::ALL {
            map.insert(category.name(), category);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Whitespace,
    Identifier,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,

    Dot,
    Comma,
    Plus,
    Minus,
    LessThan,
    GreaterThan,
    Equal,

    Slash,
    Backslash,
    Star,

    Comment,
}

impl TokenCategory {
    /// Every category, in registry order. `NAME_LOOKUP` is built from this
    /// table, so the two lookup directions cannot drift apart.
    pub const ALL: [TokenCategory; 16] = [
        TokenCategory::Whitespace,
        TokenCategory::Identifier,
        TokenCategory::StringLiteral,
        TokenCategory::IntegerLiteral,
        TokenCategory::FloatLiteral,
        TokenCategory::Dot,
        TokenCategory::Comma,
        TokenCategory::Plus,
        TokenCategory::Minus,
        TokenCategory::LessThan,
        TokenCategory::GreaterThan,
        TokenCategory::Equal,
        TokenCategory::Slash,
        TokenCategory::Backslash,
        TokenCategory::Star,
        TokenCategory::Comment,
    ];

    /// The canonical uppercase name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "WHITESPACE",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::StringLiteral => "STRING_LITERAL",
            TokenCategory::IntegerLiteral => "INTEGER_LITERAL",
            TokenCategory::FloatLiteral => "FLOAT_LITERAL",
            TokenCategory::Dot => "DOT",
            TokenCategory::Comma => "COMMA",
            TokenCategory::Plus => "PLUS",
            TokenCategory::Minus => "MINUS",
            TokenCategory::LessThan => "LESS_THAN",
            TokenCategory::GreaterThan => "GREATER_THAN",
            TokenCategory::Equal => "EQUAL",
            TokenCategory::Slash => "SLASH",
            TokenCategory::Backslash => "BACKSLASH",
            TokenCategory::Star => "STAR",
            TokenCategory::Comment => "COMMENT",
        }
    }

    /// Looks a category up by its canonical name, the exact inverse of
    /// [`TokenCategory::name`]. An unrecognised name is a lookup failure,
    /// never a default.
    pub fn from_name(name: &str) -> Result<TokenCategory, Error> {
        NAME_LOOKUP.get(name).copied().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownCategoryName {
                    name: String::from(name),
                },
                Position::null(),
            )
        })
    }

    /// Whether tokens of this category belong in the output sequence.
    /// Whitespace and comments are accumulation states only.
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenCategory::Whitespace | TokenCategory::Comment)
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.position, self.category, self.text)
    }
}
