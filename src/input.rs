use crate::{
    error::{Error, Result},
    tree::NUMBER_COUNT,
};

/// Reads the first [`NUMBER_COUNT`] whitespace-separated integers of `input`.
///
/// Line breaks count as whitespace. Anything after the last number is
/// ignored.
pub fn parse_numbers(input: &str) -> Result<[i64; NUMBER_COUNT]> {
    let mut numbers = [0; NUMBER_COUNT];
    let mut tokens = input.split_whitespace();
    for (position, number) in numbers.iter_mut().enumerate() {
        let token = tokens.next().ok_or(Error::TooFewNumbers { found: position })?;
        *number = token.parse().map_err(|source| Error::Malformed {
            position: position + 1,
            token: token.to_owned(),
            source,
        })?;
    }
    let ignored = tokens.count();
    if ignored > 0 {
        tracing::warn!(ignored, "ignoring input after the first {} numbers", NUMBER_COUNT);
    }
    Ok(numbers)
}
