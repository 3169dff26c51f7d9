//! Ordered recognition patterns and the first-match field extractor.
//!
//! A field is extracted by walking an ordered list of [`Pattern`]s and taking
//! the first one whose designated capture group is non-empty after trimming.
//! List order is precedence: labelled patterns must come before generic
//! fallbacks, and no attempt is made to find a "better" later match.

use regex::Regex;
use tracing::{debug, trace};

/// Display form of a field that no pattern recognised.
pub const UNKNOWN: &str = "알 수 없음";

/// Capture groups tried when a pattern does not name its own.
const DEFAULT_GROUPS: &[usize] = &[1, 2];

/// A compiled recognition rule for one field.
///
/// `groups` lists the capture groups to read, in preference order. Some rules
/// capture an indicator word in one group and the payload in another; the
/// first non-empty group wins.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
    groups: &'static [usize],
}

impl Pattern {
    /// Compile a pattern that reads group 1, falling back to group 2.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Self::with_groups(name, pattern, DEFAULT_GROUPS)
    }

    /// Compile a pattern with an explicit group preference order.
    pub fn with_groups(
        name: &'static str,
        pattern: &str,
        groups: &'static [usize],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            groups,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Trimmed capture of the leftmost match, if any designated group is non-empty.
    ///
    /// Only the leftmost match is considered. If its groups are all blank the
    /// pattern fails outright rather than scanning for a later match.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.regex.captures(text)?;
        self.groups
            .iter()
            .filter_map(|&g| caps.get(g))
            .map(|m| m.as_str().trim())
            .find(|s| !s.is_empty())
    }
}

/// Apply `patterns` in order and return the first successful trimmed capture.
///
/// `None` means no pattern succeeded; callers render it as [`UNKNOWN`].
pub fn extract_field(text: &str, patterns: &[Pattern]) -> Option<String> {
    for pattern in patterns {
        match pattern.capture(text) {
            Some(value) => {
                debug!(pattern = pattern.name, value, "field pattern matched");
                return Some(value.to_string());
            }
            None => trace!(pattern = pattern.name, "no match"),
        }
    }
    None
}

/// Render an extracted field, substituting [`UNKNOWN`] for absence.
pub fn display_field(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}
