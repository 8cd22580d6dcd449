use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::annotation::oncokb::{alteration_string, get_evidence_query};
use crate::annotation::{MergedAnnotation, merge_cell, sort_value};
use crate::input::AnnotationInput;
use crate::model::alteration::AlterationRecord;
use crate::model::source::SourceStatus;
use crate::pipeline::{PipelineError, write_text};
use crate::report::AnnotationRow;
use crate::report::json::render_annotations_json;
use crate::status::{CellStatus, CellStatusIndicator};

const TSV_HEADER: &str =
    "unique_sample_key\thugo_gene_symbol\talteration\talterations_in_cell\toncokb\tcivic\tpharmacodb";

#[derive(Debug, Clone)]
pub struct AnnotationCell {
    pub records: Vec<AlterationRecord>,
    pub annotation: MergedAnnotation,
}

/// Groups records by sample and gene, in order of first appearance.
pub fn group_cells(records: &[AlterationRecord]) -> Vec<Vec<AlterationRecord>> {
    let mut index: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut cells: Vec<Vec<AlterationRecord>> = Vec::new();
    for record in records {
        let key = (
            record.unique_sample_key.as_str(),
            record.hugo_gene_symbol.as_str(),
        );
        match index.get(&key) {
            Some(&idx) => cells[idx].push(record.clone()),
            None => {
                index.insert(key, cells.len());
                cells.push(vec![record.clone()]);
            }
        }
    }
    cells
}

pub fn merge_all(input: &AnnotationInput) -> Result<Vec<AnnotationCell>, PipelineError> {
    let sources = input.sources();
    let mut cells = Vec::new();
    for records in group_cells(&input.records) {
        let annotation = merge_cell(&records, &sources)?;
        cells.push(AnnotationCell {
            records,
            annotation,
        });
    }
    Ok(cells)
}

pub fn write_annotation_reports(
    input: &AnnotationInput,
    out_dir: &Path,
) -> Result<Vec<AnnotationCell>, PipelineError> {
    let cells = merge_all(input)?;
    fs::create_dir_all(out_dir)?;

    let onco_kb_data = input.onco_kb.data();
    let rows = cells
        .iter()
        .map(|cell| AnnotationRow {
            records: &cell.records,
            annotation: &cell.annotation,
            sort_value: sort_value(&cell.annotation),
            evidence_query: cell
                .records
                .first()
                .zip(onco_kb_data)
                .and_then(|(record, data)| get_evidence_query(record, data)),
        })
        .collect::<Vec<_>>();
    write_text(
        &out_dir.join("annotations.json"),
        &render_annotations_json(&rows)?,
    )?;

    let indicator = CellStatusIndicator::default();
    let mut tsv = String::new();
    let _ = writeln!(tsv, "{}", TSV_HEADER);
    for cell in &cells {
        if let Some(row) = annotation_tsv_row(cell, &indicator) {
            let _ = writeln!(tsv, "{}", row);
        }
    }
    write_text(&out_dir.join("annotations.tsv"), &tsv)?;

    let errored = cells
        .iter()
        .map(|cell| &cell.annotation)
        .filter(|a| {
            a.onco_kb_status == SourceStatus::Error
                || a.civic_status == SourceStatus::Error
                || a.pharmaco_db_status == SourceStatus::Error
        })
        .count();
    if errored > 0 {
        warn!("{} annotation cells carry a source error", errored);
    }
    info!(
        records = input.records.len(),
        cells = cells.len(),
        "annotation reports written to {}",
        out_dir.display()
    );
    Ok(cells)
}

pub fn annotation_tsv_row(cell: &AnnotationCell, indicator: &CellStatusIndicator) -> Option<String> {
    let record = cell.records.first()?;
    let annotation = &cell.annotation;
    let onco_kb = source_cell(
        annotation.onco_kb_status,
        annotation.onco_kb_indicator.as_ref().map(|resp| {
            let level = resp.highest_sensitive_level.as_deref().unwrap_or("-");
            let oncogenic = if resp.oncogenic.is_empty() {
                "Unknown"
            } else {
                resp.oncogenic.as_str()
            };
            format!("{} [{}]", oncogenic, level)
        }),
        indicator,
    );
    let civic = source_cell(
        annotation.civic_status,
        annotation
            .civic_entry
            .as_ref()
            .map(|entry| format!("{} ({} variants)", entry.name, entry.variants.len())),
        indicator,
    );
    let pharmaco_db = source_cell(
        annotation.pharmaco_db_status,
        annotation
            .pharmaco_db_view
            .as_ref()
            .map(|view| format!("{} ({} drugs)", view.status, view.drugs.len())),
        indicator,
    );
    Some(format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.unique_sample_key,
        record.hugo_gene_symbol,
        alteration_string(record.alteration),
        cell.records.len(),
        onco_kb,
        civic,
        pharmaco_db
    ))
}

fn source_cell(
    status: SourceStatus,
    rendered: Option<String>,
    indicator: &CellStatusIndicator,
) -> String {
    match CellStatus::for_source(status, rendered.is_some()) {
        Some(cell) => indicator.label(cell),
        None => rendered.unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/annotation_report.rs"]
mod tests;
