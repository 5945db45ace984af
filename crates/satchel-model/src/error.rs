use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} may not contain {character:?}")]
    ReservedCharacter {
        field: &'static str,
        character: char,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
