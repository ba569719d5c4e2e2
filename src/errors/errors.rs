use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
            ErrorImpl::UnknownCategoryName { .. } => "UnknownCategoryName",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => ErrorTip::None,
            ErrorImpl::UnknownCategoryName { name } => ErrorTip::Suggestion(format!(
                "`{}` is not a token category name, check the spelling against the category table",
                name
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unable to open input file: {path:?}")]
    SourceUnavailable { path: String },
    #[error("unknown token category name: {name:?}")]
    UnknownCategoryName { name: String },
}
