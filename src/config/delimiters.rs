// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Template delimiter patterns.
//!
//! A [`Delimiter`] is a compiled regular expression whose first capture group holds the
//! expression of a substitution region. [`Delimiters`] groups the three substitution
//! classes a template engine understands:
//!
//! * `interpolate` - raw substitution (`{{{name}}}` by default)
//! * `escape` - HTML-escaped substitution (`{{name}}` by default)
//! * `evaluate` - template logic such as conditionals (disabled by default)
//!
//! Each class resolves independently with the priority explicit value, then registry
//! default, then built-in default.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{DEFAULT_ESCAPE, DEFAULT_INTERPOLATE, SUGGESTED_EVALUATE};
use crate::errors::{MessageBoxError, Result};

static BUILTIN_INTERPOLATE: Lazy<Delimiter> =
    Lazy::new(|| Delimiter::new(DEFAULT_INTERPOLATE).expect("valid built-in interpolate pattern"));
static BUILTIN_ESCAPE: Lazy<Delimiter> =
    Lazy::new(|| Delimiter::new(DEFAULT_ESCAPE).expect("valid built-in escape pattern"));
static SUGGESTED_EVALUATE_DELIMITER: Lazy<Delimiter> =
    Lazy::new(|| Delimiter::new(SUGGESTED_EVALUATE).expect("valid suggested evaluate pattern"));

/// A validated delimiter pattern.
///
/// Two delimiters are equal when their pattern sources are equal.
#[derive(Clone)]
pub struct Delimiter {
    regex: Regex,
}

impl Delimiter {
    /// Compile a delimiter pattern.
    ///
    /// # Arguments
    /// * `pattern` - Regular expression whose first capture group is the expression
    ///
    /// # Errors
    /// [`MessageBoxError::InvalidDelimiter`] when the pattern does not compile or
    /// contains no capture group.
    ///
    /// # Example
    /// ```
    /// use message_box::config::Delimiter;
    ///
    /// let delimiter = Delimiter::new(r"\[\[(.+?)\]\]").unwrap();
    /// assert_eq!(delimiter.as_str(), r"\[\[(.+?)\]\]");
    ///
    /// assert!(Delimiter::new(r"\[\[.+?\]\]").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| MessageBoxError::InvalidDelimiter {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        // Group 0 is the whole match, so a usable pattern reports at least two.
        if regex.captures_len() < 2 {
            return Err(MessageBoxError::InvalidDelimiter {
                pattern: pattern.to_string(),
                reason: "pattern needs a capture group for the expression".to_string(),
            });
        }

        Ok(Self { regex })
    }

    /// Built-in raw interpolation delimiter, `{{{expr}}}`.
    pub fn default_interpolate() -> Self {
        BUILTIN_INTERPOLATE.clone()
    }

    /// Built-in escaped interpolation delimiter, `{{expr}}`.
    pub fn default_escape() -> Self {
        BUILTIN_ESCAPE.clone()
    }

    /// Suggested evaluate delimiter, `{{#directive}}`. Opt-in only.
    pub fn suggested_evaluate() -> Self {
        SUGGESTED_EVALUATE_DELIMITER.clone()
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Delimiter").field(&self.as_str()).finish()
    }
}

impl PartialEq for Delimiter {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Delimiter {}

impl FromStr for Delimiter {
    type Err = MessageBoxError;

    fn from_str(s: &str) -> Result<Self> {
        Delimiter::new(s)
    }
}

/// The three delimiter classes handed to a template engine.
///
/// A `None` field disables that class of substitution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delimiters {
    pub interpolate: Option<Delimiter>,
    pub evaluate: Option<Delimiter>,
    pub escape: Option<Delimiter>,
}

impl Delimiters {
    /// Built-in defaults: raw and escaped interpolation on, evaluate off.
    pub fn builtin() -> Self {
        Self {
            interpolate: Some(Delimiter::default_interpolate()),
            evaluate: None,
            escape: Some(Delimiter::default_escape()),
        }
    }

    /// Fill every unset class from `fallback`, keeping the classes already set.
    pub fn or(self, fallback: &Delimiters) -> Self {
        Self {
            interpolate: self.interpolate.or_else(|| fallback.interpolate.clone()),
            evaluate: self.evaluate.or_else(|| fallback.evaluate.clone()),
            escape: self.escape.or_else(|| fallback.escape.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_requires_capture_group() {
        let result = Delimiter::new(r"<%=.+?%>");
        match result {
            Err(MessageBoxError::InvalidDelimiter { pattern, reason }) => {
                assert_eq!(pattern, "<%=.+?%>");
                assert!(reason.contains("capture group"));
            }
            other => panic!("Expected InvalidDelimiter, got {:?}", other.map(|d| d.as_str().to_string())),
        }
    }

    #[test]
    fn test_delimiter_rejects_invalid_regex() {
        assert!(matches!(
            Delimiter::new(r"<%=(.+?%>"),
            Err(MessageBoxError::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn test_builtin_patterns_match_expected_regions() {
        let escape = Delimiter::default_escape();
        let caps = escape.regex().captures("Hello {{name}}!").unwrap();
        assert_eq!(&caps[1], "name");

        let interpolate = Delimiter::default_interpolate();
        let caps = interpolate.regex().captures("<b>{{{label}}}</b>").unwrap();
        assert_eq!(&caps[1], "label");

        let evaluate = Delimiter::suggested_evaluate();
        let caps = evaluate.regex().captures("{{#if value}}x{{#end}}").unwrap();
        assert_eq!(&caps[1], "if value");
    }

    #[test]
    fn test_escape_pattern_ignores_evaluate_blocks() {
        let escape = Delimiter::default_escape();
        assert!(escape.regex().captures("{{#if value}}").is_none());
    }

    #[test]
    fn test_delimiters_or_keeps_explicit_values() {
        let custom = Delimiter::new(r"\[\[(.+?)\]\]").unwrap();
        let explicit = Delimiters {
            interpolate: Some(custom.clone()),
            evaluate: None,
            escape: None,
        };

        let resolved = explicit.or(&Delimiters::builtin());

        assert_eq!(resolved.interpolate, Some(custom));
        assert_eq!(resolved.escape, Some(Delimiter::default_escape()));
        assert_eq!(resolved.evaluate, None);
    }

    #[test]
    fn test_delimiter_from_str() {
        let delimiter: Delimiter = r"%\{(\w+)\}".parse().unwrap();
        assert_eq!(delimiter, Delimiter::new(r"%\{(\w+)\}").unwrap());
    }
}
