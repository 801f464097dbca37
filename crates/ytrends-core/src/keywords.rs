use serde::Serialize;
use thiserror::Error;

/// Maximum number of keywords the provider compares in a single request.
pub const MAX_KEYWORDS: usize = 5;

/// Reasons raw keyword input is rejected before any network call is made.
///
/// Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at most {max} keywords can be compared at once (got {count})")]
    TooManyKeywords { count: usize, max: usize },

    #[error("keyword input must not be empty")]
    EmptyInput,
}

/// An ordered list of 1 to [`MAX_KEYWORDS`] trimmed search keywords.
///
/// Order decides the column order of every table and chart built from the
/// query. Duplicates are allowed. Only [`normalize`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validated set; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns `true` when an interior token was empty, e.g. `"a,,b"`.
    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses comma-separated user input into a [`KeywordSet`].
///
/// Each comma-delimited token is trimmed. Empty interior tokens are kept
/// as-is; only input that yields nothing but a single empty token is
/// rejected.
///
/// # Errors
///
/// - [`ValidationError::TooManyKeywords`] when more than [`MAX_KEYWORDS`]
///   tokens are present.
/// - [`ValidationError::EmptyInput`] when the input is blank.
pub fn normalize(raw_text: &str) -> Result<KeywordSet, ValidationError> {
    let tokens: Vec<String> = raw_text
        .split(',')
        .map(|token| token.trim().to_owned())
        .collect();

    if tokens.len() > MAX_KEYWORDS {
        return Err(ValidationError::TooManyKeywords {
            count: tokens.len(),
            max: MAX_KEYWORDS,
        });
    }

    match tokens.as_slice() {
        [] => Err(ValidationError::EmptyInput),
        [only] if only.is_empty() => Err(ValidationError::EmptyInput),
        _ => Ok(KeywordSet(tokens)),
    }
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
