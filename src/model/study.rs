use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MIXED_CANCER_TYPE_ID: &str = "mixed";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CancerType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CancerStudy {
    pub study_id: String,
    pub cancer_type_id: String,
    pub cancer_type: CancerType,
}

impl CancerStudy {
    pub fn is_mixed(&self) -> bool {
        self.cancer_type_id == MIXED_CANCER_TYPE_ID
    }
}

pub type StudyMap = BTreeMap<String, CancerStudy>;
