//! Comic selection policies: latest, by number, and random.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::error::ComicApiError;
use crate::model::Comic;
use crate::source::ComicSource;

/// Random picks that may land on a gap in the numbering before giving up.
pub const MAX_RANDOM_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("read current comic")]
    ReadCurrent(#[source] ComicApiError),

    #[error("read comic by number")]
    ReadByNumber(#[source] ComicApiError),

    #[error("not a comic number: {input}")]
    InvalidNumber { input: String },

    #[error("comic not found")]
    NotFound { number: u32 },

    #[error("current comic has no usable number ({number})")]
    EmptyRange { number: u32 },

    #[error("cannot find a random comic")]
    RetryExhausted { attempts: u32 },
}

/// Which comic to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Latest,
    /// Unparsed user input; validated when the selection is resolved.
    Number(String),
    Random,
}

impl Selection {
    pub fn resolve<S, R>(&self, source: &S, rng: &mut R) -> Result<Comic, SelectError>
    where
        S: ComicSource + ?Sized,
        R: Rng,
    {
        match self {
            Self::Latest => latest(source),
            Self::Number(input) => by_number(source, input),
            Self::Random => random(source, rng),
        }
    }
}

/// Parse a user-supplied comic number. Only integers `>= 1` are accepted.
pub fn parse_comic_number(input: &str) -> Result<u32, SelectError> {
    let invalid = || SelectError::InvalidNumber {
        input: input.to_owned(),
    };
    let parsed: i64 = input.parse().map_err(|_| invalid())?;
    if parsed < 1 {
        return Err(invalid());
    }
    u32::try_from(parsed).map_err(|_| invalid())
}

pub fn latest<S>(source: &S) -> Result<Comic, SelectError>
where
    S: ComicSource + ?Sized,
{
    source.current_comic().map_err(SelectError::ReadCurrent)
}

pub fn by_number<S>(source: &S, input: &str) -> Result<Comic, SelectError>
where
    S: ComicSource + ?Sized,
{
    let number = parse_comic_number(input)?;
    source
        .comic_by_number(number)
        .map_err(SelectError::ReadByNumber)?
        .ok_or(SelectError::NotFound { number })
}

/// Pick uniformly from `[1, current]`, retrying only when the pick is absent.
///
/// Transport and decode failures end the search immediately and do not count
/// as attempts.
pub fn random<S, R>(source: &S, rng: &mut R) -> Result<Comic, SelectError>
where
    S: ComicSource + ?Sized,
    R: Rng,
{
    let current = latest(source)?;
    if current.number < 1 {
        return Err(SelectError::EmptyRange {
            number: current.number,
        });
    }

    for attempt in 1..=MAX_RANDOM_ATTEMPTS {
        let number = rng.gen_range(1..=current.number);
        debug!(attempt, number, max = current.number, "random comic pick");
        match source
            .comic_by_number(number)
            .map_err(SelectError::ReadByNumber)?
        {
            Some(comic) => return Ok(comic),
            None => debug!(number, "random pick landed on a gap"),
        }
    }

    Err(SelectError::RetryExhausted {
        attempts: MAX_RANDOM_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_comic_number, SelectError};

    #[test]
    fn parses_positive_numbers() {
        assert_eq!(parse_comic_number("1").expect("one"), 1);
        assert_eq!(parse_comic_number("2048").expect("2048"), 2048);
        assert_eq!(parse_comic_number("+7").expect("explicit sign"), 7);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for input in ["0", "-3", "abc", "", " 5", "1.5", "99999999999"] {
            assert!(
                matches!(
                    parse_comic_number(input),
                    Err(SelectError::InvalidNumber { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_number_message_echoes_input() {
        let error = parse_comic_number("zero").expect_err("not numeric");
        assert_eq!(error.to_string(), "not a comic number: zero");
    }
}
