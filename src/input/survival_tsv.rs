use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::input::{InputError, open_maybe_gz};
use crate::model::survival::PatientSurvival;

#[derive(Debug, Clone, Default)]
pub struct SurvivalCohorts {
    pub altered: Vec<PatientSurvival>,
    pub unaltered: Vec<PatientSurvival>,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    patient_id: usize,
    study_id: Option<usize>,
    months: usize,
    status: usize,
    group: usize,
}

// Rows with an NA time, unknown status or unknown group are skipped.
pub fn load_survival_cohorts(path: &Path) -> Result<SurvivalCohorts, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("survival file is empty".to_string()));
    }
    let columns = parse_header(buf.trim_end())?;

    let mut cohorts = SurvivalCohorts::default();
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let field = |idx: usize| fields.get(idx).copied().unwrap_or("");

        let patient_id = field(columns.patient_id);
        if patient_id.is_empty() {
            warn!(line = line_no, "survival row has no patient id; skipping");
            continue;
        }

        let months_raw = field(columns.months);
        if months_raw.is_empty() || months_raw.eq_ignore_ascii_case("na") {
            warn!(line = line_no, patient = patient_id, "missing survival months; skipping");
            continue;
        }
        let months: f64 = months_raw.parse().map_err(|_| {
            InputError::Parse(format!(
                "invalid months '{}' at line {}",
                months_raw, line_no
            ))
        })?;
        if !months.is_finite() || months < 0.0 {
            return Err(InputError::InvalidInput(format!(
                "negative or non-finite months {} at line {}",
                months, line_no
            )));
        }

        let Some(status) = parse_status(field(columns.status)) else {
            warn!(
                line = line_no,
                patient = patient_id,
                value = field(columns.status),
                "unrecognised survival status; skipping"
            );
            continue;
        };

        let study_id = columns.study_id.map(field).unwrap_or("");
        let obs = PatientSurvival::new(patient_id, study_id, months, status);
        match field(columns.group).to_ascii_lowercase().as_str() {
            "altered" => cohorts.altered.push(obs),
            "unaltered" => cohorts.unaltered.push(obs),
            other => {
                warn!(line = line_no, group = other, "unknown cohort group; skipping");
            }
        }
    }

    info!(
        altered = cohorts.altered.len(),
        unaltered = cohorts.unaltered.len(),
        "loaded survival cohorts from {}",
        path.display()
    );

    Ok(cohorts)
}

fn parse_header(line: &str) -> Result<Columns, InputError> {
    let names: Vec<String> = line
        .split('\t')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect();
    let find = |name: &str| names.iter().position(|n| n == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| InputError::Parse(format!("survival header lacks '{name}'")))
    };

    Ok(Columns {
        patient_id: require("patient_id")?,
        study_id: find("study_id"),
        months: require("months")?,
        status: require("status")?,
        group: require("group")?,
    })
}

pub fn parse_status(raw: &str) -> Option<bool> {
    let value = raw.trim().to_ascii_lowercase();
    let label = value.split_once(':').map(|(code, _)| code).unwrap_or(value.as_str());
    match label {
        "1" | "true" | "deceased" | "event" | "recurred" | "progressed" => Some(true),
        "0" | "false" | "living" | "censored" | "diseasefree" | "disease free" => Some(false),
        _ => None,
    }
}
