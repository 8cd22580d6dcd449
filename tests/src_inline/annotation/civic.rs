use super::*;
use crate::model::civic::CivicGeneData;

fn record(gene: &str, alteration: i32) -> AlterationRecord {
    AlterationRecord {
        hugo_gene_symbol: gene.to_string(),
        entrez_gene_id: 1,
        unique_sample_key: "S1KEY".to_string(),
        study_id: "study".to_string(),
        alteration,
    }
}

fn gene(name: &str, description: &str) -> CivicGeneData {
    CivicGeneData {
        id: 1,
        name: name.to_string(),
        description: description.to_string(),
        url: format!("https://civic.example/genes/{name}"),
        variants: BTreeMap::new(),
    }
}

fn variant(gene: &str, name: &str) -> CivicVariantData {
    CivicVariantData {
        id: 10,
        name: name.to_string(),
        gene_symbol: gene.to_string(),
        url: String::new(),
        evidence: BTreeMap::new(),
    }
}

fn genes(entries: &[(&str, &str)]) -> CivicGenes {
    entries
        .iter()
        .map(|(name, desc)| (name.to_string(), gene(name, desc)))
        .collect()
}

fn variants(entries: &[(&str, &str)]) -> CivicVariants {
    let mut out = CivicVariants::new();
    for (gene, name) in entries {
        out.entry(gene.to_string())
            .or_default()
            .insert(name.to_string(), variant(gene, name));
    }
    out
}

#[test]
fn test_cna_variants_match_amplification_and_deletion() {
    let vars = variants(&[("MYC", "AMPLIFICATION"), ("MYC", "DELETION")]);
    let amp = get_civic_cna_variants(&record("MYC", 2), "MYC", &vars);
    assert_eq!(amp["MYC"].name, "AMPLIFICATION");
    let del = get_civic_cna_variants(&record("MYC", -2), "MYC", &vars);
    assert_eq!(del["MYC"].name, "DELETION");
    assert!(get_civic_cna_variants(&record("MYC", 1), "MYC", &vars).is_empty());
    assert!(get_civic_cna_variants(&record("MYC", -1), "MYC", &vars).is_empty());
}

#[test]
fn test_empty_description_without_variants_is_suppressed() {
    let g = genes(&[("PTEN", "")]);
    let v = variants(&[]);
    assert!(get_civic_entry(&record("PTEN", -2), &g, &v).is_none());
}

#[test]
fn test_empty_description_with_matching_variant_is_kept() {
    let g = genes(&[("PTEN", "")]);
    let v = variants(&[("PTEN", "DELETION")]);
    let entry = get_civic_entry(&record("PTEN", -2), &g, &v).unwrap();
    assert_eq!(entry.name, "PTEN");
    assert_eq!(entry.variants.len(), 1);
}

#[test]
fn test_description_without_variants_is_kept() {
    let g = genes(&[("ERBB2", "Receptor tyrosine kinase.")]);
    let v = variants(&[]);
    let entry = get_civic_entry(&record("ERBB2", 2), &g, &v).unwrap();
    assert_eq!(entry.description, "Receptor tyrosine kinase.");
    assert!(entry.variants.is_empty());
}

#[test]
fn test_variant_without_gene_entry_uses_symbol() {
    let g = genes(&[]);
    let v = variants(&[("MYC", "AMPLIFICATION")]);
    let entry = get_civic_entry(&record("MYC", 2), &g, &v).unwrap();
    assert_eq!(entry.name, "MYC");
    assert_eq!(entry.description, "");
}

#[test]
fn test_has_variants_boundary() {
    let v = variants(&[("MYC", "AMPLIFICATION")]);
    // entry present, nothing matches
    assert!(!has_civic_variants(&record("ERBB2", 2), &genes(&[("ERBB2", "x")]), &v));
    // entry present, match
    assert!(has_civic_variants(&record("MYC", 2), &genes(&[("MYC", "")]), &v));
    // no entry at all reports true
    assert!(has_civic_variants(&record("KRAS", 2), &genes(&[]), &v));
}

#[test]
fn test_resolve_requires_both_dictionaries() {
    let g: SourceResult<CivicGenes> = SourceResult::Complete(Some(genes(&[("PTEN", "desc")])));
    let v: SourceResult<CivicVariants> = SourceResult::Pending;
    let res = resolve_variant_evidence(&record("PTEN", -2), &g, &v);
    assert_eq!(res.status, SourceStatus::Pending);
    assert!(res.entry.is_none());
    assert!(res.has_variants);
}

#[test]
fn test_resolve_status_combination() {
    let ok: SourceResult<CivicGenes> = SourceResult::Complete(Some(genes(&[])));
    let err: SourceResult<CivicVariants> = SourceResult::Error("boom".to_string());
    assert_eq!(
        resolve_variant_evidence(&record("PTEN", -2), &ok, &err).status,
        SourceStatus::Error
    );

    let v: SourceResult<CivicVariants> = SourceResult::Complete(Some(variants(&[])));
    let res = resolve_variant_evidence(&record("PTEN", -2), &ok, &v);
    assert_eq!(res.status, SourceStatus::Complete);
    assert!(res.entry.is_none());
}

#[test]
fn test_resolve_complete_without_result_is_not_data() {
    let g: SourceResult<CivicGenes> = SourceResult::Complete(None);
    let v: SourceResult<CivicVariants> =
        SourceResult::Complete(Some(variants(&[("PTEN", "DELETION")])));
    let res = resolve_variant_evidence(&record("PTEN", -2), &g, &v);
    assert_eq!(res.status, SourceStatus::Complete);
    assert!(res.entry.is_none());
    assert!(res.has_variants);
}
