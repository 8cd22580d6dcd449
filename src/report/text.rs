use crate::report::{GroupSummary, SurvivalSummary};

pub fn render_report_text(summary: &SurvivalSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", summary.title));
    out.push_str(&format!("{}\n\n", "=".repeat(summary.title.chars().count())));

    out.push_str("Group\t#total cases\t#cases deceased\tMedian Months Survival\n");
    push_group_row(&mut out, &summary.altered);
    push_group_row(&mut out, &summary.unaltered);
    out.push('\n');

    out.push_str(&format!(
        "Logrank Test P-Value: {}\n",
        summary.log_rank_p_value_text
    ));
    if summary.altered.stats.total_cases == 0 || summary.unaltered.stats.total_cases == 0 {
        out.push_str("Note: one group is empty; the test is not informative.\n");
    }
    out
}

fn push_group_row(out: &mut String, group: &GroupSummary) {
    out.push_str(&format!(
        "{}\t{}\t{}\t{}\n",
        group.label,
        group.stats.total_cases,
        group.stats.cases_with_event,
        group.stats.median_months
    ));
}
