use crate::model::survival::{PatientSurvival, SurvivalEstimatePoint};
use crate::survival::{SurvivalError, time_groups, validate_lengths, validate_sorted};

/// All observations at one time form a single step whose risk set is
/// everything at or after that time. Censored observations carry the value
/// of the last step at or before their time.
pub fn get_estimates(sorted: &[PatientSurvival]) -> Result<Vec<f64>, SurvivalError> {
    validate_sorted(sorted)?;

    let n = sorted.len();
    let mut estimates = Vec::with_capacity(n);
    let mut survival = 1.0f64;

    for group in time_groups(sorted) {
        let at_risk = n - group.start;
        if group.events > 0 {
            survival *= 1.0 - group.events as f64 / at_risk as f64;
        }
        for _ in group.start..group.end {
            estimates.push(survival * 100.0);
        }
    }

    Ok(estimates)
}

pub fn estimate_points(
    sorted: &[PatientSurvival],
) -> Result<Vec<SurvivalEstimatePoint>, SurvivalError> {
    validate_sorted(sorted)?;

    let n = sorted.len();
    let mut points = Vec::new();
    let mut survival = 1.0f64;

    for group in time_groups(sorted) {
        if group.events == 0 {
            continue;
        }
        let at_risk = n - group.start;
        survival *= 1.0 - group.events as f64 / at_risk as f64;
        points.push(SurvivalEstimatePoint {
            months: group.months,
            survival_probability: survival,
            at_risk,
            event_count: group.events,
        });
    }

    Ok(points)
}

pub fn get_median(
    sorted: &[PatientSurvival],
    estimates: &[f64],
) -> Result<Option<f64>, SurvivalError> {
    validate_sorted(sorted)?;
    validate_lengths(sorted, estimates)?;
    for (obs, &estimate) in sorted.iter().zip(estimates) {
        if estimate <= 50.0 {
            return Ok(Some(obs.months));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/src_inline/survival/kaplan_meier.rs"]
mod tests;
