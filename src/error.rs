use thiserror::Error;

use crate::charset::CharacterClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("minimum length {min} is greater than maximum length {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("password length {length} is too short, at least 3 characters are required")]
    TooShort { length: usize },

    #[error("password length {length} is too long, at most {max} characters are allowed")]
    TooLong { length: usize, max: usize },

    #[error(
        "cannot choose {requested} unique characters, the available set of characters has only {available} unique characters"
    )]
    InsufficientUniqueCharacters { requested: usize, available: usize },

    #[error("every character was excluded, nothing left to draw from")]
    EmptyCharacterSet,

    #[error("every character of the {0} class was excluded")]
    EmptyClass(CharacterClass),
}
