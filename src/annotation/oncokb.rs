use tracing::debug;

use crate::model::alteration::{AlterationRecord, CnaLevel};
use crate::model::oncokb::{AnnotatedGenes, EvidenceQuery, IndicatorQueryResp, OncoKbData};
use crate::model::source::{SourceResult, SourceStatus};
use crate::model::study::StudyMap;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneIndicatorResolution {
    pub status: SourceStatus,
    pub indicator: Option<IndicatorQueryResp>,
    pub gene_exist: bool,
}

pub fn alteration_string(alteration: i32) -> &'static str {
    CnaLevel::from_alteration(alteration).alteration_string()
}

pub fn generate_query_variant_id(
    entrez_gene_id: i64,
    tumor_type: Option<&str>,
    alteration: Option<&str>,
    mutation_type: Option<&str>,
) -> String {
    let mut id = entrez_gene_id.to_string();
    for part in [tumor_type, alteration, mutation_type].into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        id.push('_');
        id.push_str(part);
    }
    id.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

pub fn gene_is_annotated(annotated_genes: &SourceResult<AnnotatedGenes>, entrez_gene_id: i64) -> bool {
    annotated_genes
        .data()
        .and_then(|genes| genes.get(&entrez_gene_id).copied())
        .unwrap_or(false)
}

fn tumor_type_for<'a>(record: &AlterationRecord, data: &'a OncoKbData) -> Option<&'a str> {
    data.unique_sample_key_to_tumor_type
        .as_ref()
        .and_then(|map| map.get(&record.unique_sample_key))
        .map(String::as_str)
}

/// Indicator for the record, with an unset tumor type filled from the study
/// unless the study is of the mixed cancer type.
pub fn get_indicator_data(
    record: &AlterationRecord,
    data: &OncoKbData,
    studies: Option<&StudyMap>,
) -> Option<IndicatorQueryResp> {
    let sample_tumor_types = data.unique_sample_key_to_tumor_type.as_ref()?;
    let indicator_map = data.indicator_map.as_ref()?;

    let id = generate_query_variant_id(
        record.entrez_gene_id,
        sample_tumor_types
            .get(&record.unique_sample_key)
            .map(String::as_str),
        Some(alteration_string(record.alteration)),
        None,
    );

    let Some(found) = indicator_map.get(&id) else {
        debug!(id = %id, gene = %record.hugo_gene_symbol, "no indicator for query id");
        return None;
    };
    let mut indicator = found.clone();

    if indicator.query.tumor_type.is_none() {
        if let Some(studies) = studies {
            match studies.get(&record.study_id) {
                Some(study) if !study.is_mixed() => {
                    indicator.query.tumor_type = Some(study.cancer_type.name.clone());
                }
                Some(_) => {}
                None => debug!(study = %record.study_id, "study metadata missing; tumor type left unset"),
            }
        }
    }

    Some(indicator)
}

pub fn get_evidence_query(record: &AlterationRecord, data: &OncoKbData) -> Option<EvidenceQuery> {
    data.unique_sample_key_to_tumor_type.as_ref()?;
    let tumor_type = tumor_type_for(record, data);
    let alteration = alteration_string(record.alteration);
    Some(EvidenceQuery {
        id: generate_query_variant_id(record.entrez_gene_id, tumor_type, Some(alteration), None),
        entrez_gene_id: record.entrez_gene_id,
        tumor_type: tumor_type.map(str::to_string),
        alteration: alteration.to_string(),
    })
}

pub fn resolve_gene_indicator(
    record: &AlterationRecord,
    annotated_genes: &SourceResult<AnnotatedGenes>,
    source: &SourceResult<OncoKbData>,
    studies: Option<&StudyMap>,
) -> GeneIndicatorResolution {
    let gene_exist = gene_is_annotated(annotated_genes, record.entrez_gene_id);

    if source.is_error() {
        return GeneIndicatorResolution {
            status: SourceStatus::Error,
            indicator: None,
            gene_exist,
        };
    }

    let indicator = if gene_exist {
        source
            .data()
            .and_then(|data| get_indicator_data(record, data, studies))
    } else {
        None
    };

    GeneIndicatorResolution {
        status: source.status(),
        indicator,
        gene_exist,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotation/oncokb.rs"]
mod tests;
