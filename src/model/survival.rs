use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSurvival {
    pub patient_id: String,
    pub study_id: String,
    pub months: f64,
    /// `true` when the event occurred, `false` when censored.
    pub status: bool,
}

impl PatientSurvival {
    pub fn new(patient_id: &str, study_id: &str, months: f64, status: bool) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            study_id: study_id.to_string(),
            months,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalEstimatePoint {
    pub months: f64,
    pub survival_probability: f64,
    pub at_risk: usize,
    pub event_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub patient_id: String,
    pub study_id: String,
    pub status: bool,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadRow {
    pub patient_id: String,
    pub study_id: String,
    pub number_at_risk: usize,
    pub status: &'static str,
    pub survival_rate: f64,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalStats {
    pub total_cases: usize,
    pub cases_with_event: usize,
    pub median_months: String,
}
