use std::collections::BTreeMap;

use crate::model::alteration::{AlterationRecord, CnaLevel};
use crate::model::pharmacodb::{PharmacoDbView, PharmacoDbViewList};

pub fn cna_status_label(alteration: i32) -> &'static str {
    CnaLevel::from_alteration(alteration).status_label()
}

pub fn view_key(gene_symbol: &str, onco_tree_code: &str, alteration: i32) -> String {
    format!(
        "{}{}{}",
        gene_symbol,
        onco_tree_code,
        cna_status_label(alteration)
    )
}

pub fn get_pharmaco_db_view(
    record: &AlterationRecord,
    sample_to_oncotree: &BTreeMap<String, String>,
    views: &PharmacoDbViewList,
) -> Option<PharmacoDbView> {
    let onco_tree_code = sample_to_oncotree
        .get(&record.unique_sample_key)
        .filter(|code| !code.is_empty())?;
    let key = view_key(&record.hugo_gene_symbol, onco_tree_code, record.alteration);
    views.get(&key).cloned()
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotation/pharmacodb.rs"]
mod tests;
