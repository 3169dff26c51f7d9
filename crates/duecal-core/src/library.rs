//! Pattern lists for the four assignment fields.
//!
//! Each list is ordered by precedence. Labelled forms (`마감일: ...`) come
//! first, bare shapes last. Digits are matched as ASCII only so every capture
//! parses as an integer.

use std::sync::LazyLock;

use crate::pattern::Pattern;

/// `YYYY[-/년] M[-/월] D[일]`
const YMD: &str = r"[0-9]{4}[-/년]\s*[0-9]{1,2}[-/월]\s*[0-9]{1,2}일?";

/// Words that end a labelled title.
const TITLE_STOP: &str = r"(?:\n|마감|제출|배점|점수|$)";

fn compile(name: &'static str, pattern: &str) -> Pattern {
    Pattern::new(name, pattern).unwrap_or_else(|e| panic!("invalid {name} pattern: {e}"))
}

fn compile_groups(name: &'static str, pattern: &str, groups: &'static [usize]) -> Pattern {
    Pattern::with_groups(name, pattern, groups)
        .unwrap_or_else(|e| panic!("invalid {name} pattern: {e}"))
}

pub static TITLE_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        compile("title.assignment_label", &format!(r"(?i)과제\s*[:：][ \t]*([^\n]*?){TITLE_STOP}")),
        compile("title.title_label", &format!(r"(?i)제목\s*[:：][ \t]*([^\n]*?){TITLE_STOP}")),
        compile("title.topic_label", &format!(r"(?i)주제\s*[:：][ \t]*([^\n]*?){TITLE_STOP}")),
        compile("title.bracketed", r"[\[<【](.+?)[\]>】]"),
        compile("title.before_keyword", r"(?i)^(.+?)(?:과제|assignment|homework)"),
    ]
});

pub static DEADLINE_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        compile("deadline.due_label", &format!(r"마감일?\s*[:：]\s*({YMD})")),
        compile("deadline.submit_label", &format!(r"제출일?\s*[:：]\s*({YMD})")),
        compile("deadline.term_label", &format!(r"기한\s*[:：]\s*({YMD})")),
        compile("deadline.until", &format!(r"({YMD})까지")),
        compile("deadline.slash", r"([0-9]{1,2}/[0-9]{1,2}/?[0-9]{0,4})"),
        compile("deadline.korean_month_day", r"([0-9]{1,2}월\s*[0-9]{1,2}일)"),
        compile("deadline.iso", r"([0-9]{4}-[0-9]{1,2}-[0-9]{1,2})"),
    ]
});

/// Captures digits only; the orchestrator appends the `점` unit.
pub static POINTS_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        compile("points.allotment_label", r"배점\s*[:：]\s*([0-9]+)\s*점"),
        compile("points.score_label", r"점수\s*[:：]\s*([0-9]+)\s*점"),
        compile("points.out_of", r"([0-9]+)\s*점\s*만점"),
        compile("points.bare", r"([0-9]+)\s*점"),
    ]
});

pub static LOCATION_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        compile("location.place_label", r"(?i)제출\s*장소\s*[:：]\s*(.+?)(?:\n|$)"),
        compile("location.method_label", r"(?i)제출\s*방법\s*[:：]\s*(.+?)(?:\n|$)"),
        compile("location.destination_label", r"(?i)제출처\s*[:：]\s*(.+?)(?:\n|$)"),
        compile("location.submit_label", r"(?i)제출\s*[:：]\s*(.+?)(?:\n|$)"),
        compile("location.venue_label", r"(?i)장소\s*[:：]\s*(.+?)(?:\n|$)"),
        compile_groups(
            "location.email",
            r"(?i)(이메일|email)\s*[:：]\s*(\S+@\S+)",
            &[2, 1],
        ),
        compile("location.online", r"(온라인|사이버|웹)"),
    ]
});
