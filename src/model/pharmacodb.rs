use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrugResponse {
    pub drug: String,
    pub dataset: String,
    pub tested_cell_lines: u32,
    pub sensitive_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmacoDbView {
    pub gene: String,
    pub onco_tree_code: String,
    pub status: String,
    pub drugs: Vec<DrugResponse>,
}

pub type PharmacoDbViewList = BTreeMap<String, PharmacoDbView>;
