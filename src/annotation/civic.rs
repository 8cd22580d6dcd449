use std::collections::BTreeMap;

use crate::model::alteration::{AlterationRecord, CnaLevel};
use crate::model::civic::{CivicEntry, CivicGenes, CivicVariantData, CivicVariants};
use crate::model::source::{SourceResult, SourceStatus, combined_status};

#[derive(Debug, Clone, PartialEq)]
pub struct VariantEvidenceResolution {
    pub status: SourceStatus,
    pub entry: Option<CivicEntry>,
    pub has_variants: bool,
}

pub fn get_civic_cna_variants(
    record: &AlterationRecord,
    gene_symbol: &str,
    civic_variants: &CivicVariants,
) -> BTreeMap<String, CivicVariantData> {
    let mut matched = BTreeMap::new();
    let wanted = match CnaLevel::from_alteration(record.alteration) {
        CnaLevel::Amplification => "AMPLIFICATION",
        CnaLevel::DeepDeletion => "DELETION",
        _ => return matched,
    };
    if let Some(variant) = civic_variants
        .get(gene_symbol)
        .and_then(|variants| variants.get(wanted))
    {
        matched.insert(gene_symbol.to_string(), variant.clone());
    }
    matched
}

pub fn get_civic_entry(
    record: &AlterationRecord,
    civic_genes: &CivicGenes,
    civic_variants: &CivicVariants,
) -> Option<CivicEntry> {
    let gene_symbol = record.hugo_gene_symbol.as_str();
    let variants = get_civic_cna_variants(record, gene_symbol, civic_variants);
    let gene = civic_genes.get(gene_symbol);
    let has_description = gene.is_some_and(|g| !g.description.is_empty());

    if variants.is_empty() && !has_description {
        return None;
    }

    Some(match gene {
        Some(gene) => CivicEntry {
            name: gene.name.clone(),
            description: gene.description.clone(),
            url: gene.url.clone(),
            variants,
        },
        None => CivicEntry {
            name: gene_symbol.to_string(),
            description: String::new(),
            url: String::new(),
            variants,
        },
    })
}

/// False only when the gene has an entry but no matching variants.
///
/// A gene without any entry reports `true`.
pub fn has_civic_variants(
    record: &AlterationRecord,
    civic_genes: &CivicGenes,
    civic_variants: &CivicVariants,
) -> bool {
    let gene_symbol = record.hugo_gene_symbol.as_str();
    let variants = get_civic_cna_variants(record, gene_symbol, civic_variants);
    !(civic_genes.contains_key(gene_symbol) && variants.is_empty())
}

pub fn resolve_variant_evidence(
    record: &AlterationRecord,
    genes: &SourceResult<CivicGenes>,
    variants: &SourceResult<CivicVariants>,
) -> VariantEvidenceResolution {
    let status = combined_status(genes.status(), variants.status());
    match (genes.data(), variants.data()) {
        (Some(genes), Some(variants)) => VariantEvidenceResolution {
            status,
            entry: get_civic_entry(record, genes, variants),
            has_variants: has_civic_variants(record, genes, variants),
        },
        _ => VariantEvidenceResolution {
            status,
            entry: None,
            has_variants: true,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotation/civic.rs"]
mod tests;
