use std::collections::BTreeMap;

use tracing::trace;

use crate::annotation::civic::resolve_variant_evidence;
use crate::annotation::oncokb::resolve_gene_indicator;
use crate::annotation::pharmacodb::get_pharmaco_db_view;
use crate::annotation::{AnnotationError, MergedAnnotation};
use crate::model::alteration::AlterationRecord;
use crate::model::civic::{CivicGenes, CivicVariants};
use crate::model::oncokb::{AnnotatedGenes, OncoKbData};
use crate::model::pharmacodb::PharmacoDbViewList;
use crate::model::source::SourceResult;
use crate::model::study::StudyMap;

#[derive(Debug, Clone, Copy)]
pub struct AnnotationSources<'a> {
    pub annotated_genes: &'a SourceResult<AnnotatedGenes>,
    pub onco_kb: &'a SourceResult<OncoKbData>,
    pub civic_genes: &'a SourceResult<CivicGenes>,
    pub civic_variants: &'a SourceResult<CivicVariants>,
    pub pharmaco_db: &'a SourceResult<PharmacoDbViewList>,
    pub sample_to_oncotree: Option<&'a BTreeMap<String, String>>,
    pub studies: Option<&'a StudyMap>,
}

pub fn merge(
    record: &AlterationRecord,
    sources: &AnnotationSources<'_>,
) -> Result<MergedAnnotation, AnnotationError> {
    validate_record(record)?;

    let gene = resolve_gene_indicator(
        record,
        sources.annotated_genes,
        sources.onco_kb,
        sources.studies,
    );
    let evidence = resolve_variant_evidence(record, sources.civic_genes, sources.civic_variants);
    let pharmaco_db_view = match (sources.pharmaco_db.data(), sources.sample_to_oncotree) {
        (Some(views), Some(oncotree)) => get_pharmaco_db_view(record, oncotree, views),
        _ => None,
    };

    trace!(
        gene = %record.hugo_gene_symbol,
        sample = %record.unique_sample_key,
        onco_kb = gene.status.as_str(),
        civic = evidence.status.as_str(),
        pharmaco_db = sources.pharmaco_db.status().as_str(),
        "annotation merged"
    );

    Ok(MergedAnnotation {
        hugo_gene_symbol: record.hugo_gene_symbol.clone(),
        onco_kb_status: gene.status,
        onco_kb_indicator: gene.indicator,
        onco_kb_gene_exist: gene.gene_exist,
        civic_status: evidence.status,
        civic_entry: evidence.entry,
        has_civic_variants: evidence.has_variants,
        pharmaco_db_status: sources.pharmaco_db.status(),
        pharmaco_db_view,
    })
}

pub fn merge_cell(
    records: &[AlterationRecord],
    sources: &AnnotationSources<'_>,
) -> Result<MergedAnnotation, AnnotationError> {
    match records.first() {
        Some(record) => merge(record, sources),
        None => Ok(MergedAnnotation::empty()),
    }
}

fn validate_record(record: &AlterationRecord) -> Result<(), AnnotationError> {
    if record.hugo_gene_symbol.trim().is_empty() {
        return Err(AnnotationError::InvalidInput(format!(
            "alteration for entrez gene {} has no gene symbol",
            record.entrez_gene_id
        )));
    }
    if record.unique_sample_key.trim().is_empty() {
        return Err(AnnotationError::InvalidInput(format!(
            "alteration in {} has no unique sample key",
            record.hugo_gene_symbol
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotation/merge.rs"]
mod tests;
