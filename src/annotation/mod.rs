pub mod civic;
pub mod merge;
pub mod oncokb;
pub mod pharmacodb;
pub mod sort;

use serde::Serialize;
use thiserror::Error;

use crate::model::civic::CivicEntry;
use crate::model::oncokb::IndicatorQueryResp;
use crate::model::pharmacodb::PharmacoDbView;
use crate::model::source::SourceStatus;

pub use merge::{AnnotationSources, merge_cell};
pub use sort::sort_value;

#[derive(Debug, Error, PartialEq)]
pub enum AnnotationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedAnnotation {
    pub hugo_gene_symbol: String,
    pub onco_kb_status: SourceStatus,
    pub onco_kb_indicator: Option<IndicatorQueryResp>,
    pub onco_kb_gene_exist: bool,
    pub civic_status: SourceStatus,
    pub civic_entry: Option<CivicEntry>,
    pub has_civic_variants: bool,
    pub pharmaco_db_status: SourceStatus,
    pub pharmaco_db_view: Option<PharmacoDbView>,
}

impl MergedAnnotation {
    pub fn empty() -> Self {
        Self {
            hugo_gene_symbol: String::new(),
            onco_kb_status: SourceStatus::Complete,
            onco_kb_indicator: None,
            onco_kb_gene_exist: false,
            civic_status: SourceStatus::Complete,
            civic_entry: None,
            has_civic_variants: true,
            pharmaco_db_status: SourceStatus::Complete,
            pharmaco_db_view: None,
        }
    }
}
