use std::fs;
use std::path::Path;

use tracing::info;

use crate::input::SurvivalCohorts;
use crate::model::profile::ChartProfile;
use crate::model::survival::{
    LinePoint, PatientSurvival, ScatterPoint, SurvivalEstimatePoint, SurvivalStats,
};
use crate::pipeline::{PipelineError, write_text};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{GroupSummary, SurvivalSummary, format_precision};
use crate::survival::{
    SurvivalError, calculate_log_rank, estimate_points, get_download_content, get_estimates,
    get_line_data, get_scatter_data_with_opacity, get_stats, sort_survivals,
};

#[derive(Debug, Clone)]
pub struct CohortCurve {
    pub sorted: Vec<PatientSurvival>,
    pub scatter: Vec<ScatterPoint>,
    pub line: Vec<LinePoint>,
    pub points: Vec<SurvivalEstimatePoint>,
    pub stats: SurvivalStats,
}

pub fn build_curve(observations: &[PatientSurvival]) -> Result<CohortCurve, SurvivalError> {
    let sorted = sort_survivals(observations)?;
    let estimates = get_estimates(&sorted)?;
    let scatter = get_scatter_data_with_opacity(&sorted, &estimates)?;
    let line = get_line_data(&sorted, &estimates)?;
    let points = estimate_points(&sorted)?;
    let stats = get_stats(&sorted, &estimates)?;
    Ok(CohortCurve {
        sorted,
        scatter,
        line,
        points,
        stats,
    })
}

pub fn build_survival_summary(
    cohorts: &SurvivalCohorts,
    profile: &ChartProfile,
) -> Result<(SurvivalSummary, String), SurvivalError> {
    let altered = build_curve(&cohorts.altered)?;
    let unaltered = build_curve(&cohorts.unaltered)?;
    let p_value = calculate_log_rank(&altered.sorted, &unaltered.sorted)?;

    let download = get_download_content(
        &profile.title,
        &[
            (profile.altered_label.as_str(), altered.scatter.as_slice()),
            (profile.unaltered_label.as_str(), unaltered.scatter.as_slice()),
        ],
    );

    let summary = SurvivalSummary {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        title: profile.title.clone(),
        altered: group_summary(&profile.altered_label, altered),
        unaltered: group_summary(&profile.unaltered_label, unaltered),
        log_rank_p_value: p_value,
        log_rank_p_value_text: format_precision(p_value, profile.p_value_digits),
    };
    Ok((summary, download))
}

pub fn write_survival_reports(
    cohorts: &SurvivalCohorts,
    profile: &ChartProfile,
    out_dir: &Path,
) -> Result<SurvivalSummary, PipelineError> {
    let (summary, download) = build_survival_summary(cohorts, profile)?;
    fs::create_dir_all(out_dir)?;

    write_text(&out_dir.join("survival_data.txt"), &download)?;
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;
    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    info!(
        altered = summary.altered.stats.total_cases,
        unaltered = summary.unaltered.stats.total_cases,
        p_value = %summary.log_rank_p_value_text,
        "survival reports written to {}",
        out_dir.display()
    );
    Ok(summary)
}

fn group_summary(label: &str, curve: CohortCurve) -> GroupSummary {
    GroupSummary {
        label: label.to_string(),
        stats: curve.stats,
        line: curve.line,
        estimates: curve.points,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/survival_report.rs"]
mod tests;
