use thiserror::Error;

/// Why a line typed at the prompt was not accepted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("not an integer: {0:?}")]
    NotANumber(String),

    #[error("{value} is outside [1 - {max}]")]
    OutOfRange { value: i64, max: usize },
}

/// Parses a 1-based position typed by the user and checks it against `max`.
pub fn parse_selection(input: &str, max: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    match usize::try_from(value) {
        Ok(position) if (1..=max).contains(&position) => Ok(position),
        _ => Err(SelectionError::OutOfRange { value, max }),
    }
}
