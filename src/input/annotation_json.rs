use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::annotation::AnnotationSources;
use crate::input::{InputError, open_maybe_gz};
use crate::model::alteration::AlterationRecord;
use crate::model::civic::{CivicGenes, CivicVariants};
use crate::model::oncokb::{AnnotatedGenes, OncoKbData};
use crate::model::pharmacodb::PharmacoDbViewList;
use crate::model::source::{SourceResult, SourceWire};
use crate::model::study::StudyMap;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnnotationBundle {
    records: Vec<AlterationRecord>,
    annotated_genes: SourceWire<AnnotatedGenes>,
    oncokb: SourceWire<OncoKbData>,
    civic_genes: SourceWire<CivicGenes>,
    civic_variants: SourceWire<CivicVariants>,
    pharmacodb: SourceWire<PharmacoDbViewList>,
    sample_to_oncotree: Option<BTreeMap<String, String>>,
    studies: Option<StudyMap>,
}

#[derive(Debug, Clone)]
pub struct AnnotationInput {
    pub records: Vec<AlterationRecord>,
    pub annotated_genes: SourceResult<AnnotatedGenes>,
    pub onco_kb: SourceResult<OncoKbData>,
    pub civic_genes: SourceResult<CivicGenes>,
    pub civic_variants: SourceResult<CivicVariants>,
    pub pharmaco_db: SourceResult<PharmacoDbViewList>,
    pub sample_to_oncotree: Option<BTreeMap<String, String>>,
    pub studies: Option<StudyMap>,
}

impl AnnotationInput {
    pub fn sources(&self) -> AnnotationSources<'_> {
        AnnotationSources {
            annotated_genes: &self.annotated_genes,
            onco_kb: &self.onco_kb,
            civic_genes: &self.civic_genes,
            civic_variants: &self.civic_variants,
            pharmaco_db: &self.pharmaco_db,
            sample_to_oncotree: self.sample_to_oncotree.as_ref(),
            studies: self.studies.as_ref(),
        }
    }
}

impl From<AnnotationBundle> for AnnotationInput {
    fn from(bundle: AnnotationBundle) -> Self {
        Self {
            records: bundle.records,
            annotated_genes: bundle.annotated_genes.into(),
            onco_kb: bundle.oncokb.into(),
            civic_genes: bundle.civic_genes.into(),
            civic_variants: bundle.civic_variants.into(),
            pharmaco_db: bundle.pharmacodb.into(),
            sample_to_oncotree: bundle.sample_to_oncotree,
            studies: bundle.studies,
        }
    }
}

pub fn parse_annotation_input(json: &str) -> Result<AnnotationInput, InputError> {
    let bundle: AnnotationBundle = serde_json::from_str(json)?;
    Ok(bundle.into())
}

pub fn load_annotation_input(path: &Path) -> Result<AnnotationInput, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    let input = parse_annotation_input(&json)?;
    info!(
        records = input.records.len(),
        onco_kb = input.onco_kb.status().as_str(),
        civic_genes = input.civic_genes.status().as_str(),
        civic_variants = input.civic_variants.status().as_str(),
        pharmaco_db = input.pharmaco_db.status().as_str(),
        "loaded annotation bundle from {}",
        path.display()
    );
    Ok(input)
}
