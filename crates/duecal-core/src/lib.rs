//! Assignment extraction for pasted Korean academic notices: field patterns,
//! difficulty suggestion, deadline normalisation, and calendar event drafts.

pub mod deadline;
pub mod difficulty;
pub mod error;
pub mod event;
pub mod extract;
pub mod library;
pub mod pattern;

pub use deadline::{
    DeadlineShape, ParsedDeadline, parse_deadline, parse_deadline_date, parse_deadline_date_on,
};
pub use difficulty::{Difficulty, classify_difficulty, difficulty_score};
pub use error::CoreError;
pub use event::{DraftPolicy, EventDraft, EventType, MissingDeadline, PriorityPolicy};
pub use extract::{ExtractionResult, extract_assignment_info};
pub use pattern::{Pattern, UNKNOWN, extract_field};
