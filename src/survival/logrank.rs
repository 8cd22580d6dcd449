use std::cmp::Ordering;

use crate::model::survival::PatientSurvival;
use crate::survival::{SurvivalError, validate_months};

#[derive(Debug, Clone, Copy)]
struct Pooled {
    months: f64,
    event: bool,
    in_a: bool,
}

/// 1.0 when either group is empty or no event time carries any variance.
pub fn calculate_log_rank(
    group_a: &[PatientSurvival],
    group_b: &[PatientSurvival],
) -> Result<f64, SurvivalError> {
    validate_months(group_a)?;
    validate_months(group_b)?;
    if group_a.is_empty() || group_b.is_empty() {
        return Ok(1.0);
    }

    let mut pooled: Vec<Pooled> = group_a
        .iter()
        .map(|p| Pooled {
            months: p.months,
            event: p.status,
            in_a: true,
        })
        .chain(group_b.iter().map(|p| Pooled {
            months: p.months,
            event: p.status,
            in_a: false,
        }))
        .collect();
    pooled.sort_by(|x, y| x.months.partial_cmp(&y.months).unwrap_or(Ordering::Equal));

    let mut at_risk_a = group_a.len() as f64;
    let mut at_risk_b = group_b.len() as f64;
    let mut observed_a = 0.0f64;
    let mut expected_a = 0.0f64;
    let mut variance = 0.0f64;

    let mut i = 0usize;
    while i < pooled.len() {
        let months = pooled[i].months;
        let mut events_a = 0.0f64;
        let mut events_b = 0.0f64;
        let mut leaving_a = 0.0f64;
        let mut leaving_b = 0.0f64;
        while i < pooled.len() && pooled[i].months == months {
            let obs = pooled[i];
            match (obs.in_a, obs.event) {
                (true, true) => events_a += 1.0,
                (false, true) => events_b += 1.0,
                _ => {}
            }
            if obs.in_a {
                leaving_a += 1.0;
            } else {
                leaving_b += 1.0;
            }
            i += 1;
        }

        let at_risk = at_risk_a + at_risk_b;
        let events = events_a + events_b;
        if at_risk > 0.0 && events > 0.0 {
            observed_a += events_a;
            expected_a += events * at_risk_a / at_risk;
            if at_risk > 1.0 {
                variance += at_risk_a * at_risk_b * events * (at_risk - events)
                    / (at_risk * at_risk * (at_risk - 1.0));
            }
        }

        at_risk_a -= leaving_a;
        at_risk_b -= leaving_b;
    }

    if variance <= 0.0 {
        return Ok(1.0);
    }

    let deviation = observed_a - expected_a;
    let chi_square = deviation * deviation / variance;
    Ok(chi_square_upper_tail_1df(chi_square))
}

pub fn chi_square_upper_tail_1df(x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    erfc((x / 2.0).sqrt()).clamp(0.0, 1.0)
}

/// Complementary error function, Chebyshev fit with relative error < 1.2e-7.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let ans = t * poly.exp();
    if x >= 0.0 { ans } else { 2.0 - ans }
}

#[cfg(test)]
#[path = "../../tests/src_inline/survival/logrank.rs"]
mod tests;
