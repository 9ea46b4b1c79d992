//! Parsing of comma-separated level-order input such as `1,2,null,3`.

use tracing::{instrument, warn};

use crate::domain::error::{DomainError, DomainResult};

/// Literal marking an absent node.
pub const NULL_TOKEN: &str = "null";

/// Split `text` into optional integers.
///
/// Tokens are trimmed; an empty token or `null` (any case) is `None`.
/// Surrounding `[` `]` are accepted. Blank input gives an empty sequence.
/// With `lenient`, unparseable tokens become `None` instead of an error.
#[instrument(level = "debug")]
pub fn parse_values(text: &str, lenient: bool) -> DomainResult<Vec<Option<i64>>> {
    let body = strip_brackets(text.trim());
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .enumerate()
        .map(|(position, raw)| parse_token(position, raw.trim(), lenient))
        .collect()
}

fn strip_brackets(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
}

fn parse_token(position: usize, token: &str, lenient: bool) -> DomainResult<Option<i64>> {
    if token.is_empty() || token.eq_ignore_ascii_case(NULL_TOKEN) {
        return Ok(None);
    }
    match token.parse::<i64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) if lenient => {
            warn!("treating invalid token {:?} at position {} as null", token, position);
            Ok(None)
        }
        Err(_) => Err(DomainError::InvalidToken {
            position,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_brackets_requires_both_ends() {
        assert_eq!(strip_brackets("[1,2]"), "1,2");
        assert_eq!(strip_brackets("[1,2"), "[1,2");
        assert_eq!(strip_brackets("1,2"), "1,2");
    }
}
