use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorQuery {
    pub id: String,
    pub entrez_gene_id: i64,
    pub hugo_symbol: String,
    pub alteration: String,
    pub tumor_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorQueryResp {
    pub query: IndicatorQuery,
    pub gene_exist: bool,
    pub variant_exist: bool,
    pub allele_exist: bool,
    pub oncogenic: String,
    pub vus: bool,
    pub highest_sensitive_level: Option<String>,
    pub highest_resistance_level: Option<String>,
    pub gene_summary: String,
    pub variant_summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OncoKbData {
    pub unique_sample_key_to_tumor_type: Option<BTreeMap<String, String>>,
    pub indicator_map: Option<BTreeMap<String, IndicatorQueryResp>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceQuery {
    pub id: String,
    pub entrez_gene_id: i64,
    pub tumor_type: Option<String>,
    pub alteration: String,
}

pub type AnnotatedGenes = BTreeMap<i64, bool>;
