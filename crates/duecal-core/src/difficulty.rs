//! Keyword-scored difficulty suggestion for assignment notices.
//!
//! Each token of the notice scores against three keyword tiers, and the first
//! bare point value (`N점`) adds weight on top. The total maps onto a
//! three-level [`Difficulty`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CoreError;

/// Keywords worth +2 per token.
pub const HIGH_KEYWORDS: &[&str] = &[
    "어려운",
    "복잡한",
    "심화",
    "고난도",
    "도전적",
    "심층",
    "종합",
    "프로젝트",
    "difficult",
    "complex",
    "advanced",
    "challenging",
    "comprehensive",
    "project",
];

/// Keywords worth +1 per token.
pub const MEDIUM_KEYWORDS: &[&str] = &[
    "중간", "보통", "일반", "기본", "moderate", "standard", "basic",
];

/// Keywords worth −1 per token.
pub const LOW_KEYWORDS: &[&str] = &[
    "쉬운",
    "간단한",
    "기초",
    "입문",
    "단순",
    "easy",
    "simple",
    "introductory",
];

static POINT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*점").unwrap_or_else(|e| panic!("invalid point value pattern: {e}"))
});

/// Suggested effort level for an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Korean label shown in the review panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "쉬움",
            Self::Medium => "보통",
            Self::High => "어려움",
        }
    }

    /// Calendar colour for assignments of this difficulty.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Medium => "#2196F3",
            Self::High => "#F44336",
        }
    }

    fn from_score(score: i32) -> Self {
        if score >= 2 {
            Self::High
        } else if score >= 0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CoreError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Suggest a difficulty for `text`. Always returns a label.
pub fn classify_difficulty(text: &str) -> Difficulty {
    Difficulty::from_score(difficulty_score(text))
}

/// Raw score behind [`classify_difficulty`].
///
/// Each token counts once, in the first tier whose keyword it contains
/// (high, then medium, then low). The first bare `N점` adds +2 at 30 or more
/// and +1 at 15 or more.
pub fn difficulty_score(text: &str) -> i32 {
    let lowered = text.to_lowercase();
    let mut score = 0;

    for token in tokens(&lowered) {
        let weight = token_weight(token);
        if weight != 0 {
            trace!(token, weight, "difficulty keyword");
        }
        score += weight;
    }

    score + point_weight(first_point_value(text))
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|t| !t.is_empty())
}

fn token_weight(token: &str) -> i32 {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| token.contains(k));
    if contains_any(HIGH_KEYWORDS) {
        2
    } else if contains_any(MEDIUM_KEYWORDS) {
        1
    } else if contains_any(LOW_KEYWORDS) {
        -1
    } else {
        0
    }
}

/// First bare point value. Digit runs too long for `u64` saturate.
fn first_point_value(text: &str) -> Option<u64> {
    let caps = POINT_VALUE.captures(text)?;
    Some(caps[1].parse().unwrap_or(u64::MAX))
}

fn point_weight(points: Option<u64>) -> i32 {
    match points {
        Some(p) if p >= 30 => 2,
        Some(p) if p >= 15 => 1,
        _ => 0,
    }
}
