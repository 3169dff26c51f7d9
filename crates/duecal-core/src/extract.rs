//! Assignment extraction: one pass of every field pattern list plus the
//! difficulty classifier over a pasted notice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::difficulty::{Difficulty, classify_difficulty};
use crate::library::{DEADLINE_PATTERNS, LOCATION_PATTERNS, POINTS_PATTERNS, TITLE_PATTERNS};
use crate::pattern::{display_field, extract_field};

/// Unit appended to extracted point values.
pub const POINTS_UNIT: &str = "점";

/// Structured assignment metadata pulled from free text.
///
/// Each field is extracted independently; `None` means no pattern recognised
/// it. The deadline is the raw matched text; see
/// [`parse_deadline_date`](crate::parse_deadline_date) to turn it into a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: Option<String>,
    pub deadline: Option<String>,
    /// Digits plus [`POINTS_UNIT`], e.g. `"25점"`.
    pub points: Option<String>,
    pub location: Option<String>,
    pub suggested_difficulty: Difficulty,
}

impl ExtractionResult {
    pub fn title_or_unknown(&self) -> &str {
        display_field(self.title.as_deref())
    }

    pub fn deadline_or_unknown(&self) -> &str {
        display_field(self.deadline.as_deref())
    }

    pub fn points_or_unknown(&self) -> &str {
        display_field(self.points.as_deref())
    }

    pub fn location_or_unknown(&self) -> &str {
        display_field(self.location.as_deref())
    }

    /// Whether the text looked like an assignment notice at all.
    pub fn has_assignment_signal(&self) -> bool {
        self.title.is_some() || self.deadline.is_some()
    }

    /// Review lines shown to the user before saving.
    pub fn summary(&self) -> String {
        format!(
            "📝 과제명: {}\n📅 마감일: {}\n💯 배점: {}\n📍 제출장소: {}\n🎯 추천 난이도: {}",
            self.title_or_unknown(),
            self.deadline_or_unknown(),
            self.points_or_unknown(),
            self.location_or_unknown(),
            self.suggested_difficulty.label(),
        )
    }
}

/// Extract title, deadline, points, location and a difficulty suggestion.
///
/// Never fails: empty or unrecognisable text yields a result with every field
/// `None` and the classifier's verdict.
pub fn extract_assignment_info(text: &str) -> ExtractionResult {
    let result = ExtractionResult {
        title: extract_field(text, &TITLE_PATTERNS),
        deadline: extract_field(text, &DEADLINE_PATTERNS),
        points: extract_field(text, &POINTS_PATTERNS).map(|digits| digits + POINTS_UNIT),
        location: extract_field(text, &LOCATION_PATTERNS),
        suggested_difficulty: classify_difficulty(text),
    };

    debug!(
        title = result.title.is_some(),
        deadline = result.deadline.is_some(),
        points = result.points.is_some(),
        location = result.location.is_some(),
        difficulty = %result.suggested_difficulty,
        "assignment extracted"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::UNKNOWN;

    const NOTICE: &str = "[자료구조 과제] 마감일: 2024-12-25, 배점: 30점, 제출 장소: 이메일 제출";

    #[test]
    fn end_to_end_notice() {
        let r = extract_assignment_info(NOTICE);
        assert!(r.title.as_deref().unwrap().contains("자료구조 과제"));
        assert_eq!(r.deadline.as_deref(), Some("2024-12-25"));
        assert_eq!(r.points.as_deref(), Some("30점"));
        assert_eq!(r.location.as_deref(), Some("이메일 제출"));
        assert_eq!(r.suggested_difficulty, Difficulty::High);
    }

    #[test]
    fn multi_line_notice() {
        let text = "과제: 운영체제 프로세스 스케줄링 보고서\n\
                    제출일: 2025년 4월 11일\n\
                    점수: 20점\n\
                    제출 방법: 사이버캠퍼스 업로드\n\
                    간단한 요약 위주로 작성";
        let r = extract_assignment_info(text);
        assert_eq!(r.title.as_deref(), Some("운영체제 프로세스 스케줄링 보고서"));
        assert_eq!(r.deadline.as_deref(), Some("2025년 4월 11일"));
        assert_eq!(r.points.as_deref(), Some("20점"));
        assert_eq!(r.location.as_deref(), Some("사이버캠퍼스 업로드"));
        // 20 points (+1), "간단한" (−1).
        assert_eq!(r.suggested_difficulty, Difficulty::Medium);
    }

    #[test]
    fn points_are_formatted_with_unit() {
        let r = extract_assignment_info("배점: 25점");
        assert_eq!(r.points.as_deref(), Some("25점"));
    }

    #[test]
    fn empty_input_is_all_unknown() {
        for text in ["", "   ", "\n\t \n"] {
            let r = extract_assignment_info(text);
            assert_eq!(
                r,
                ExtractionResult {
                    suggested_difficulty: Difficulty::Medium,
                    ..Default::default()
                }
            );
            assert!(!r.has_assignment_signal());
            assert_eq!(r.title_or_unknown(), UNKNOWN);
        }
    }

    #[test]
    fn fields_fail_independently() {
        let r = extract_assignment_info("마감: 2025-01-05");
        assert_eq!(r.title, None);
        assert_eq!(r.deadline.as_deref(), Some("2025-01-05"));
        assert_eq!(r.points, None);
        assert_eq!(r.location, None);
        assert!(r.has_assignment_signal());
    }

    #[test]
    fn literal_unknown_text_is_not_absence() {
        let r = extract_assignment_info("제목: 알 수 없음\n");
        assert_eq!(r.title.as_deref(), Some(UNKNOWN));
        assert!(r.title.is_some());
        assert_eq!(r.deadline, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract_assignment_info(NOTICE), extract_assignment_info(NOTICE));
    }

    #[test]
    fn concurrent_callers_agree() {
        let expected = extract_assignment_info(NOTICE);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| extract_assignment_info(NOTICE)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn fields_are_trimmed_and_non_empty() {
        let samples = [
            NOTICE,
            "  [  공백 제목  ]  ",
            "제출:    \n장소:  도서관  ",
            "과제: \n마감일: 2024-01-01",
            "온라인 제출, 30 점",
            "random text without anything",
        ];
        for text in samples {
            let r = extract_assignment_info(text);
            for field in [&r.title, &r.deadline, &r.points, &r.location].into_iter().flatten() {
                assert!(!field.is_empty(), "empty field from {text:?}");
                assert_eq!(field.trim(), field.as_str(), "untrimmed field from {text:?}");
            }
        }
    }

    #[test]
    fn summary_renders_unknown_fields() {
        let r = extract_assignment_info("[리포트] 배점: 10점");
        let summary = r.summary();
        assert!(summary.contains("📝 과제명: 리포트"));
        assert!(summary.contains(&format!("📅 마감일: {UNKNOWN}")));
        assert!(summary.contains("💯 배점: 10점"));
        assert!(summary.contains("🎯 추천 난이도: 보통"));
    }

    #[test]
    fn json_uses_null_for_absent_fields() {
        let r = extract_assignment_info("배점: 40점");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["points"], "40점");
        assert_eq!(json["suggested_difficulty"], "high");
    }
}
