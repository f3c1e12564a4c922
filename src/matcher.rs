//! Deciding which object keys are subject to the stringified-JSON check.

use regex::Regex;

const DEFAULT_NEEDLE: &str = "richtext";

/// Selects the keys whose values must hold stringified JSON.
///
/// The default matches any key containing `richtext`, ignoring case.
///
/// ```rust
/// use richtext_lint::KeyMatcher;
///
/// let matcher = KeyMatcher::default();
/// assert!(matcher.matches("RichText"));
/// assert!(matcher.matches("body_richtext_v2"));
/// assert!(!matcher.matches("rich_text"));
///
/// let custom = KeyMatcher::pattern(r"(?i)^(body|summary)_html$").unwrap();
/// assert!(custom.matches("Body_HTML"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyMatcher {
    kind: MatcherKind,
}

#[derive(Debug, Clone, Default)]
enum MatcherKind {
    #[default]
    Richtext,
    Pattern(Regex),
}

impl KeyMatcher {
    /// Matches keys against a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind: MatcherKind::Pattern(Regex::new(pattern)?),
        })
    }

    pub fn matches(&self, key: &str) -> bool {
        match &self.kind {
            MatcherKind::Richtext => key.to_lowercase().contains(DEFAULT_NEEDLE),
            MatcherKind::Pattern(regex) => regex.is_match(key),
        }
    }

    /// Human-readable description of what this matcher selects.
    pub fn describe(&self) -> String {
        match &self.kind {
            MatcherKind::Richtext => format!("keys containing '{}'", DEFAULT_NEEDLE),
            MatcherKind::Pattern(regex) => format!("keys matching /{}/", regex.as_str()),
        }
    }
}
