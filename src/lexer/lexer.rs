use std::{fs, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenCategory};

/// The token under construction during a scan.
///
/// `category` is `None` until some character commits the accumulator to a
/// category. A whitespace run never commits it, so "nothing started yet"
/// and "inside a whitespace run" are the same state. The line and column
/// counters track the character being consumed; a closed token records
/// their values at close time, the position of its closing delimiter.
#[derive(Debug, Clone)]
pub struct Accumulator {
    category: Option<TokenCategory>,
    text: String,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Accumulator {
    pub fn new(file: Rc<String>) -> Accumulator {
        Accumulator {
            category: None,
            text: String::new(),
            line: 1,
            column: 1,
            file,
        }
    }

    pub fn category(&self) -> Option<TokenCategory> {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ends the token under construction. A significant token is handed
    /// back for the output sequence, whitespace and comments are dropped.
    /// The accumulator is left empty and unclassified, keeping its file
    /// handle and line/column counters.
    fn close(&mut self) -> Option<Token> {
        let completed = match self.category {
            Some(category) if category.is_significant() => Some(Token {
                category,
                text: std::mem::take(&mut self.text),
                position: Position::new(self.line, self.column, Rc::clone(&self.file)),
            }),
            _ => {
                self.text.clear();
                None
            }
        };

        self.category = None;
        completed
    }
}

/// Consumes one character, producing the next accumulator state and the
/// completed token, if this character closed a significant one.
///
/// Comment and string-literal states take priority over the per-character
/// dispatch: a comment swallows everything up to the newline that closes
/// it, and a string literal swallows everything up to the closing quote,
/// newlines included, with no case change. Everywhere else the character
/// itself decides the transition, and identifier characters are
/// uppercased as they are appended.
pub fn scan_char(mut acc: Accumulator, ch: char) -> (Accumulator, Option<Token>) {
    let mut completed = None;

    if acc.category == Some(TokenCategory::Comment) {
        if ch == '\n' {
            completed = acc.close();
            acc.line += 1;
            acc.column = 1;
            return (acc, completed);
        }
        acc.text.push(ch);
    } else if acc.category == Some(TokenCategory::StringLiteral) {
        if ch == '"' {
            completed = acc.close();
        } else {
            acc.text.push(ch);
        }
    } else {
        match ch {
            '0'..='9' => {
                if acc.category.is_none() {
                    acc.category = Some(TokenCategory::IntegerLiteral);
                }
                acc.text.push(ch);
            }
            '"' => {
                completed = acc.close();
                acc.category = Some(TokenCategory::StringLiteral);
            }
            '.' => {
                if acc.category == Some(TokenCategory::IntegerLiteral) {
                    acc.category = Some(TokenCategory::FloatLiteral);
                    acc.text.push(ch);
                } else {
                    acc.category = Some(TokenCategory::Dot);
                }
            }
            ',' => acc.category = Some(TokenCategory::Comma),
            '+' => acc.category = Some(TokenCategory::Plus),
            '-' => acc.category = Some(TokenCategory::Minus),
            '<' => acc.category = Some(TokenCategory::LessThan),
            '>' => acc.category = Some(TokenCategory::GreaterThan),
            '=' => acc.category = Some(TokenCategory::Equal),
            ' ' | '\t' | '\r' => {
                completed = acc.close();
            }
            '\n' => {
                completed = acc.close();
                acc.line += 1;
                acc.column = 1;
                return (acc, completed);
            }
            '/' => {
                if acc.category.is_none() {
                    acc.category = Some(TokenCategory::Slash);
                } else if acc.category == Some(TokenCategory::Slash) {
                    acc.category = Some(TokenCategory::Comment);
                }
            }
            _ => {
                // an open digit run can still grow into a word, e.g. 2DUP
                if acc.category.is_none() || acc.category == Some(TokenCategory::IntegerLiteral) {
                    acc.category = Some(TokenCategory::Identifier);
                }
                acc.text.push(ch.to_ascii_uppercase());
            }
        }
    }

    acc.column += 1;
    (acc, completed)
}

/// Scans a whole source string into its ordered token sequence. Tokens
/// appear in the order their closing delimiter was reached. A token still
/// open at end of input has no closing delimiter and is dropped.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut tokens = vec![];
    let mut acc = Accumulator::new(file_name);

    for ch in source.chars() {
        let (next, completed) = scan_char(acc, ch);
        acc = next;

        if let Some(token) = completed {
            tokens.push(token);
        }
    }

    tokens
}

/// Reads the named file and scans it, labelling every token with the
/// file's path.
pub fn lex_file(file_path: &str) -> Result<Vec<Token>, Error> {
    let source = fs::read_to_string(file_path).map_err(|_| {
        Error::new(
            ErrorImpl::SourceUnavailable {
                path: String::from(file_path),
            },
            Position::null(),
        )
    })?;

    Ok(tokenize(source, Some(String::from(file_path))))
}
