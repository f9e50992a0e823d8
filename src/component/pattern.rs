use color_eyre::{Result, eyre::Context};
use regex::Regex;

/// Pattern used when none is configured: anything starting with a word character.
pub(crate) const DEFAULT_PATTERN: &str = r"^\w";

/// Validation rule for the text of an [`InputSubmit`](super::input_submit::InputSubmit).
#[derive(Clone, Debug)]
pub(crate) struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern. A malformed expression is returned as an error
    /// so the caller fails at construction time.
    pub fn new<T: AsRef<str>>(source: T) -> Result<Self> {
        let source = source.as_ref();
        let regex = Regex::new(source)
            .with_context(|| format!("Invalid validation pattern `{}`", source))?;
        Ok(Self { regex })
    }

    /// A text is valid when it is non-empty and the pattern matches somewhere in it.
    pub fn is_valid(&self, text: &str) -> bool {
        !text.is_empty() && self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            regex: Regex::new(DEFAULT_PATTERN).expect("default pattern is a valid regex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern() {
        let pattern = Pattern::default();
        assert_eq!(pattern.as_str(), r"^\w");
        assert!(pattern.is_valid("a"));
        assert!(pattern.is_valid("abc def"));
        assert!(pattern.is_valid("_x"));
        assert!(!pattern.is_valid(""));
        assert!(!pattern.is_valid(" a"));
        assert!(!pattern.is_valid("-a"));
    }

    #[test]
    fn unanchored_search() {
        let pattern = Pattern::new("[0-9]").unwrap();
        assert!(pattern.is_valid("abc1"));
        assert!(!pattern.is_valid("abc"));
    }

    #[test]
    fn empty_never_valid() {
        // `.*` matches the empty string, but empty input is still rejected
        let pattern = Pattern::new(".*").unwrap();
        assert!(!pattern.is_valid(""));
        assert!(pattern.is_valid(" "));
    }

    #[test]
    fn malformed_pattern() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }
}
