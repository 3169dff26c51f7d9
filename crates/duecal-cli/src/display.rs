//! Card display for extraction results and event drafts.

use duecal_core::{EventDraft, ExtractionResult, ParsedDeadline};

const LABEL_WIDTH: usize = 12;

/// Render an extraction result as the assistant's review card.
pub fn render_extraction(result: &ExtractionResult) -> String {
    let mut out = String::new();
    if !result.has_assignment_signal() {
        out.push_str("과제 정보를 찾지 못했습니다. 제목이나 마감일을 포함해 다시 입력해 주세요.\n\n");
    } else {
        out.push_str("과제 정보를 분석했습니다!\n\n");
    }

    out.push_str(&result.summary());
    out.push('\n');
    out.push_str("\n※ 난이도는 자동 추천된 것이며, 일정 등록 시 수정할 수 있습니다.\n");
    out
}

/// Render a normalised deadline as `YYYY-MM-DD (shape)`.
pub fn render_deadline(parsed: &ParsedDeadline) -> String {
    let mut line = format!("{} ({})", parsed.date.format("%Y-%m-%d"), parsed.shape);
    if parsed.shape.year_implied() {
        line.push_str(" [year assumed]");
    }
    line
}

/// Render an event draft as a short human-readable card.
pub fn render_draft(draft: &EventDraft) -> String {
    let mut out = format!("=== {} {} ===\n", draft.event_type.icon(), draft.title);
    push_row(&mut out, "유형", draft.event_type.label());
    push_row(
        &mut out,
        "날짜",
        &format!("{} {}", draft.date.format("%Y-%m-%d"), draft.time),
    );
    push_row(&mut out, "난이도", draft.priority.label());
    push_row(&mut out, "색상", &draft.color);
    for line in draft.description.lines() {
        push_row(&mut out, "", line);
    }
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {label:<LABEL_WIDTH$} {value}\n"));
}
