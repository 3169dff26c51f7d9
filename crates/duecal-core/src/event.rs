//! Calendar event drafts built from an extraction result.
//!
//! The assistant has two save paths that disagree on priority: direct save
//! keeps the suggested difficulty, while "edit then save" forces `high`.
//! Both are kept as a [`PriorityPolicy`] the caller picks.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::deadline::parse_deadline_date_on;
use crate::difficulty::Difficulty;
use crate::error::CoreError;
use crate::extract::ExtractionResult;

/// Time of day every assignment draft is due.
pub const DUE_TIME: &str = "23:59";

/// Days added to the reference date when a deadline cannot be normalised.
pub const FALLBACK_DAYS: u64 = 7;

/// Kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Assignment,
    Exam,
    Lecture,
    Meeting,
    Academic,
    Personal,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        Self::Assignment,
        Self::Exam,
        Self::Lecture,
        Self::Meeting,
        Self::Academic,
        Self::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Lecture => "lecture",
            Self::Meeting => "meeting",
            Self::Academic => "academic",
            Self::Personal => "personal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Assignment => "과제",
            Self::Exam => "시험",
            Self::Lecture => "강의",
            Self::Meeting => "미팅",
            Self::Academic => "학사일정",
            Self::Personal => "개인일정",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Assignment => "📝",
            Self::Exam => "📚",
            Self::Lecture => "🎓",
            Self::Meeting => "👥",
            Self::Academic => "🏫",
            Self::Personal => "🌟",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Assignment => "#FF5733",
            Self::Exam => "#C70039",
            Self::Lecture => "#900C3F",
            Self::Meeting => "#581845",
            Self::Academic => "#2874A6",
            Self::Personal => "#229954",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownEventType(s.to_string()))
    }
}

/// How the draft's priority is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityPolicy {
    /// Use the classifier's suggestion and its colour.
    #[default]
    Suggested,
    /// Always `high`, coloured with the assignment type colour.
    ForceHigh,
}

impl FromStr for PriorityPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suggested" => Ok(Self::Suggested),
            "high" | "force-high" => Ok(Self::ForceHigh),
            _ => Err(CoreError::UnknownPolicy(s.to_string())),
        }
    }
}

/// What to do when the deadline cannot be normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingDeadline {
    /// Schedule [`FALLBACK_DAYS`] after the reference date.
    #[default]
    OneWeekOut,
    /// Refuse to build the draft.
    Reject,
}

impl FromStr for MissingDeadline {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "one-week-out" => Ok(Self::OneWeekOut),
            "reject" => Ok(Self::Reject),
            _ => Err(CoreError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DraftPolicy {
    pub priority: PriorityPolicy,
    pub missing_deadline: MissingDeadline,
}

/// An assignment event ready for the calendar's storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: String,
    pub end_time: String,
    pub priority: Difficulty,
    pub color: String,
    pub description: String,
}

impl EventDraft {
    /// Build a draft from an extraction result.
    ///
    /// `today` is the reference date for year-less deadlines and for the
    /// one-week fallback.
    pub fn from_extraction(
        result: &ExtractionResult,
        policy: DraftPolicy,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        let date = match result
            .deadline
            .as_deref()
            .and_then(|d| parse_deadline_date_on(d, today))
        {
            Some(date) => date,
            None => fallback_date(result, policy.missing_deadline, today)?,
        };

        let (priority, color) = match policy.priority {
            PriorityPolicy::Suggested => (
                result.suggested_difficulty,
                result.suggested_difficulty.color(),
            ),
            PriorityPolicy::ForceHigh => (Difficulty::High, EventType::Assignment.default_color()),
        };

        debug!(%date, %priority, "event draft built");
        Ok(Self {
            title: result.title_or_unknown().to_string(),
            event_type: EventType::Assignment,
            date,
            time: DUE_TIME.to_string(),
            end_time: DUE_TIME.to_string(),
            priority,
            color: color.to_string(),
            description: format!(
                "배점: {}\n제출장소: {}",
                result.points_or_unknown(),
                result.location_or_unknown()
            ),
        })
    }
}

fn fallback_date(
    result: &ExtractionResult,
    policy: MissingDeadline,
    today: NaiveDate,
) -> Result<NaiveDate, CoreError> {
    let unparsed = || CoreError::UnparseableDeadline(result.deadline_or_unknown().to_string());
    match policy {
        MissingDeadline::Reject => Err(unparsed()),
        MissingDeadline::OneWeekOut => {
            warn!(
                deadline = result.deadline_or_unknown(),
                "deadline not normalised, defaulting to one week out"
            );
            today.checked_add_days(Days::new(FALLBACK_DAYS)).ok_or_else(unparsed)
        }
    }
}
