use std::fmt::Write;

use crate::model::survival::{
    DownloadRow, LinePoint, PatientSurvival, ScatterPoint, SurvivalStats,
};
use crate::survival::{
    SurvivalError, get_median, time_groups, validate_lengths, validate_sorted,
};

const DOWNLOAD_HEADER: &str =
    "Case ID\tStudy ID\tNumber at Risk\tStatus\tSurvival Rate\tTime (months)";

/// Each distinct time contributes one vertex holding the value after every
/// observation at that time; the value holds until the next vertex.
pub fn get_line_data(
    sorted: &[PatientSurvival],
    estimates: &[f64],
) -> Result<Vec<LinePoint>, SurvivalError> {
    validate_sorted(sorted)?;
    validate_lengths(sorted, estimates)?;
    let mut points = Vec::with_capacity(sorted.len() + 1);
    points.push(LinePoint { x: 0.0, y: 100.0 });
    for group in time_groups(sorted) {
        points.push(LinePoint {
            x: group.months,
            y: estimates[group.end - 1],
        });
    }
    Ok(points)
}

pub fn get_scatter_data(
    sorted: &[PatientSurvival],
    estimates: &[f64],
) -> Result<Vec<ScatterPoint>, SurvivalError> {
    validate_sorted(sorted)?;
    validate_lengths(sorted, estimates)?;
    Ok(sorted
        .iter()
        .zip(estimates)
        .map(|(obs, &estimate)| ScatterPoint {
            x: obs.months,
            y: estimate,
            patient_id: obs.patient_id.clone(),
            study_id: obs.study_id.clone(),
            status: obs.status,
            opacity: 1.0,
        })
        .collect())
}

pub fn get_scatter_data_with_opacity(
    sorted: &[PatientSurvival],
    estimates: &[f64],
) -> Result<Vec<ScatterPoint>, SurvivalError> {
    let mut points = get_scatter_data(sorted, estimates)?;
    for point in &mut points {
        point.opacity = if point.status { 0.0 } else { 1.0 };
    }
    Ok(points)
}

pub fn get_stats(
    sorted: &[PatientSurvival],
    estimates: &[f64],
) -> Result<SurvivalStats, SurvivalError> {
    let median = get_median(sorted, estimates)?;
    Ok(SurvivalStats {
        total_cases: sorted.len(),
        cases_with_event: sorted.iter().filter(|obs| obs.status).count(),
        median_months: match median {
            Some(months) => format!("{:.2}", months),
            None => "NA".to_string(),
        },
    })
}

pub fn convert_scatter_to_download_data(points: &[ScatterPoint]) -> Vec<DownloadRow> {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(index, point)| DownloadRow {
            patient_id: point.patient_id.clone(),
            study_id: point.study_id.clone(),
            number_at_risk: n - index,
            status: if point.status { "deceased" } else { "censored" },
            survival_rate: point.y,
            time: point.x,
        })
        .collect()
}

pub fn get_download_content(title: &str, groups: &[(&str, &[ScatterPoint])]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}\n\n", title);
    for (label, points) in groups {
        let _ = writeln!(out, "{}", label);
        let _ = writeln!(out, "{}", DOWNLOAD_HEADER);
        for row in convert_scatter_to_download_data(points) {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                row.patient_id,
                row.study_id,
                row.number_at_risk,
                row.status,
                row.survival_rate,
                row.time
            );
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/survival/chart.rs"]
mod tests;
