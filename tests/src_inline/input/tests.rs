use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::annotation_json::parse_annotation_input;
use super::survival_tsv::parse_status;
use super::*;
use crate::model::source::{SourceResult, SourceStatus};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_oncoview_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

const SURVIVAL_TSV: &str = "patient_id\tstudy_id\tmonths\tstatus\tgroup\n\
P1\tluad\t3.5\t1:DECEASED\taltered\n\
P2\tluad\t10\t0:LIVING\taltered\n\
P3\tluad\tNA\t1\tunaltered\n\
P4\tluad\t7.25\ttrue\tUnaltered\n\
P5\tluad\t2\tmaybe\tunaltered\n\
P6\tluad\t4\t0\tother\n\
\n\
P7\tluad\t12\tcensored\tunaltered\n";

#[test]
fn test_load_survival_cohorts() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv");
    write_file(&path, SURVIVAL_TSV);

    let cohorts = load_survival_cohorts(&path).unwrap();
    assert_eq!(cohorts.altered.len(), 2);
    assert_eq!(cohorts.unaltered.len(), 2);
    assert_eq!(cohorts.altered[0].patient_id, "P1");
    assert!(cohorts.altered[0].status);
    assert!(!cohorts.altered[1].status);
    assert_eq!(cohorts.unaltered[0].months, 7.25);
    assert_eq!(cohorts.unaltered[1].patient_id, "P7");
    assert!(!cohorts.unaltered[1].status);
}

#[test]
fn test_load_survival_gz() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv.gz");
    write_gz(&path, SURVIVAL_TSV);
    let cohorts = load_survival_cohorts(&path).unwrap();
    assert_eq!(cohorts.altered.len(), 2);
}

#[test]
fn test_survival_header_without_study_column() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv");
    write_file(&path, "GROUP\tMONTHS\tSTATUS\tPATIENT_ID\naltered\t1\t1\tP1\n");
    let cohorts = load_survival_cohorts(&path).unwrap();
    assert_eq!(cohorts.altered[0].study_id, "");
    assert_eq!(cohorts.altered[0].months, 1.0);
}

#[test]
fn test_survival_missing_column_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv");
    write_file(&path, "patient_id\tmonths\tgroup\nP1\t1\taltered\n");
    assert!(matches!(
        load_survival_cohorts(&path),
        Err(InputError::Parse(_))
    ));
}

#[test]
fn test_survival_negative_months_is_invalid() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv");
    write_file(
        &path,
        "patient_id\tmonths\tstatus\tgroup\nP1\t-2\t1\taltered\n",
    );
    assert!(matches!(
        load_survival_cohorts(&path),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_survival_bad_number_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("survival.tsv");
    write_file(
        &path,
        "patient_id\tmonths\tstatus\tgroup\nP1\tabc\t1\taltered\n",
    );
    assert!(matches!(
        load_survival_cohorts(&path),
        Err(InputError::Parse(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = make_temp_dir();
    assert!(matches!(
        load_survival_cohorts(&dir.join("nope.tsv")),
        Err(InputError::MissingInput(_))
    ));
}

#[test]
fn test_parse_status_forms() {
    assert_eq!(parse_status("1"), Some(true));
    assert_eq!(parse_status("1:DECEASED"), Some(true));
    assert_eq!(parse_status("DECEASED"), Some(true));
    assert_eq!(parse_status("0:LIVING"), Some(false));
    assert_eq!(parse_status("false"), Some(false));
    assert_eq!(parse_status("censored"), Some(false));
    assert_eq!(parse_status(""), None);
    assert_eq!(parse_status("unknown"), None);
}

#[test]
fn test_parse_annotation_input() {
    let json = r#"{
        "records": [{
            "hugo_gene_symbol": "TP53",
            "entrez_gene_id": 7157,
            "unique_sample_key": "S1KEY",
            "study_id": "luad",
            "alteration": -2
        }],
        "annotated_genes": {"status": "complete", "result": {"7157": true}},
        "oncokb": {"status": "error", "error": "503"},
        "civic_genes": {"status": "complete"},
        "pharmacodb": {"status": "complete", "result": {
            "TP53LUADDEEPDEL": {"gene": "TP53", "onco_tree_code": "LUAD", "status": "DEEPDEL"}
        }},
        "sample_to_oncotree": {"S1KEY": "LUAD"}
    }"#;
    let input = parse_annotation_input(json).unwrap();
    assert_eq!(input.records.len(), 1);
    assert_eq!(input.records[0].alteration, -2);
    assert_eq!(input.annotated_genes.data().unwrap().get(&7157), Some(&true));
    assert_eq!(input.onco_kb, SourceResult::Error("503".to_string()));
    assert_eq!(input.civic_genes.status(), SourceStatus::Complete);
    assert!(input.civic_genes.data().is_none());
    assert_eq!(input.civic_variants.status(), SourceStatus::Pending);
    assert!(input.studies.is_none());

    let sources = input.sources();
    assert_eq!(sources.pharmaco_db.data().unwrap().len(), 1);
    assert!(sources.sample_to_oncotree.is_some());
}

#[test]
fn test_parse_annotation_input_rejects_bad_json() {
    assert!(matches!(
        parse_annotation_input("{\"records\": 3}"),
        Err(InputError::Json(_))
    ));
}

#[test]
fn test_load_annotation_and_messages_files() {
    let dir = make_temp_dir();
    let annotation = dir.join("annotation.json");
    write_file(&annotation, "{}");
    let input = load_annotation_input(&annotation).unwrap();
    assert!(input.records.is_empty());
    assert_eq!(input.onco_kb.status(), SourceStatus::Pending);

    let messages = dir.join("messages.json");
    write_file(
        &messages,
        r#"[{"id": "m1", "date_end": 100, "content": "hello"}]"#,
    );
    let loaded = load_messages(&messages).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "m1");
    assert!(loaded[0].show_condition.is_none());
}
