use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CivicGeneData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub variants: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CivicVariantData {
    pub id: i64,
    pub name: String,
    pub gene_symbol: String,
    pub url: String,
    pub evidence: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CivicEntry {
    pub name: String,
    pub description: String,
    pub url: String,
    pub variants: BTreeMap<String, CivicVariantData>,
}

pub type CivicGenes = BTreeMap<String, CivicGeneData>;
pub type CivicVariants = BTreeMap<String, BTreeMap<String, CivicVariantData>>;
