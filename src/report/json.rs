use crate::report::{AnnotationRow, SurvivalSummary};

pub fn render_summary_json(summary: &SurvivalSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

pub fn render_annotations_json(rows: &[AnnotationRow<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
