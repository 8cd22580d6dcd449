use crate::annotation::MergedAnnotation;
use crate::model::civic::CivicEntry;
use crate::model::oncokb::IndicatorQueryResp;
use crate::model::pharmacodb::PharmacoDbView;

const SENSITIVE_LEVELS: &[&str] = &[
    "LEVEL_1", "LEVEL_2", "LEVEL_2A", "LEVEL_2B", "LEVEL_3A", "LEVEL_3B", "LEVEL_4",
];
const RESISTANCE_LEVELS: &[&str] = &["LEVEL_R1", "LEVEL_R2", "LEVEL_R3"];

pub fn sort_value(annotation: &MergedAnnotation) -> Vec<f64> {
    let mut values = indicator_sort_value(annotation.onco_kb_indicator.as_ref());
    values.push(civic_sort_value(annotation.civic_entry.as_ref()));
    values.push(pharmaco_db_sort_value(annotation.pharmaco_db_view.as_ref()));
    values
}

pub fn indicator_sort_value(indicator: Option<&IndicatorQueryResp>) -> Vec<f64> {
    let Some(indicator) = indicator else {
        return Vec::new();
    };
    let known = indicator.variant_exist || indicator.allele_exist;
    vec![
        flag(known || indicator.vus),
        oncogenic_score(&indicator.oncogenic),
        flag(known),
        level_score(indicator.highest_sensitive_level.as_deref(), SENSITIVE_LEVELS),
        level_score(indicator.highest_resistance_level.as_deref(), RESISTANCE_LEVELS),
        flag(indicator.vus),
        flag(indicator.gene_exist),
    ]
}

pub fn civic_sort_value(entry: Option<&CivicEntry>) -> f64 {
    flag(entry.is_some())
}

pub fn pharmaco_db_sort_value(view: Option<&PharmacoDbView>) -> f64 {
    flag(view.is_some())
}

pub fn oncogenic_score(oncogenic: &str) -> f64 {
    match oncogenic.trim().to_ascii_lowercase().as_str() {
        "oncogenic" => 4.0,
        "likely oncogenic" => 3.0,
        "predicted oncogenic" => 2.0,
        "inconclusive" => 1.0,
        _ => 0.0,
    }
}

fn level_score(level: Option<&str>, ordered: &[&str]) -> f64 {
    level
        .and_then(|l| ordered.iter().position(|candidate| *candidate == l))
        .map(|idx| (ordered.len() - idx) as f64)
        .unwrap_or(0.0)
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotation/sort.rs"]
mod tests;
