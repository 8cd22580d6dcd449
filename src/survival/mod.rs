pub mod chart;
pub mod kaplan_meier;
pub mod logrank;

use thiserror::Error;

use crate::model::survival::PatientSurvival;

pub use chart::{get_download_content, get_line_data, get_scatter_data_with_opacity, get_stats};
pub use kaplan_meier::{estimate_points, get_estimates, get_median};
pub use logrank::calculate_log_rank;

#[derive(Debug, Error, PartialEq)]
pub enum SurvivalError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Observations sharing one `months` value, as a half-open index range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeGroup {
    pub months: f64,
    pub start: usize,
    pub end: usize,
    pub events: usize,
}

pub fn sort_survivals(
    observations: &[PatientSurvival],
) -> Result<Vec<PatientSurvival>, SurvivalError> {
    validate_months(observations)?;
    let mut sorted = observations.to_vec();
    sorted.sort_by(|a, b| a.months.total_cmp(&b.months));
    Ok(sorted)
}

pub(crate) fn validate_months(observations: &[PatientSurvival]) -> Result<(), SurvivalError> {
    for obs in observations {
        if !obs.months.is_finite() || obs.months < 0.0 {
            return Err(SurvivalError::InvalidInput(format!(
                "patient {} has invalid survival months {}",
                obs.patient_id, obs.months
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_sorted(observations: &[PatientSurvival]) -> Result<(), SurvivalError> {
    validate_months(observations)?;
    for pair in observations.windows(2) {
        if pair[1].months < pair[0].months {
            return Err(SurvivalError::InvalidInput(format!(
                "observations are not sorted by months ({} after {})",
                pair[1].months, pair[0].months
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_lengths(
    observations: &[PatientSurvival],
    estimates: &[f64],
) -> Result<(), SurvivalError> {
    if observations.len() != estimates.len() {
        return Err(SurvivalError::InvalidInput(format!(
            "{} observations but {} estimates",
            observations.len(),
            estimates.len()
        )));
    }
    Ok(())
}

pub(crate) fn time_groups(sorted: &[PatientSurvival]) -> Vec<TimeGroup> {
    let mut groups = Vec::new();
    let mut start = 0usize;
    while start < sorted.len() {
        let months = sorted[start].months;
        let mut end = start;
        let mut events = 0usize;
        while end < sorted.len() && sorted[end].months == months {
            if sorted[end].status {
                events += 1;
            }
            end += 1;
        }
        groups.push(TimeGroup {
            months,
            start,
            end,
            events,
        });
        start = end;
    }
    groups
}

#[cfg(test)]
#[path = "../../tests/src_inline/survival/mod.rs"]
mod tests;
