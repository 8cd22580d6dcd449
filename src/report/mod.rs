pub mod json;
pub mod text;

use serde::Serialize;

use crate::annotation::MergedAnnotation;
use crate::model::alteration::AlterationRecord;
use crate::model::oncokb::EvidenceQuery;
use crate::model::survival::{LinePoint, SurvivalEstimatePoint, SurvivalStats};

#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub label: String,
    #[serde(flatten)]
    pub stats: SurvivalStats,
    pub line: Vec<LinePoint>,
    pub estimates: Vec<SurvivalEstimatePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurvivalSummary {
    pub tool: String,
    pub version: String,
    pub title: String,
    pub altered: GroupSummary,
    pub unaltered: GroupSummary,
    pub log_rank_p_value: f64,
    pub log_rank_p_value_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotationRow<'a> {
    pub records: &'a [AlterationRecord],
    pub annotation: &'a MergedAnnotation,
    pub sort_value: Vec<f64>,
    pub evidence_query: Option<EvidenceQuery>,
}

pub fn format_precision(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{}", mantissa, sign, exponent.abs());
    }
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
