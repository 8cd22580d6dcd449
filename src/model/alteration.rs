use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterationRecord {
    pub hugo_gene_symbol: String,
    pub entrez_gene_id: i64,
    pub unique_sample_key: String,
    pub study_id: String,
    pub alteration: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CnaLevel {
    DeepDeletion,
    ShallowDeletion,
    Neutral,
    Gain,
    Amplification,
    Other,
}

impl CnaLevel {
    pub fn from_alteration(alteration: i32) -> Self {
        match alteration {
            -2 => CnaLevel::DeepDeletion,
            -1 => CnaLevel::ShallowDeletion,
            0 => CnaLevel::Neutral,
            1 => CnaLevel::Gain,
            2 => CnaLevel::Amplification,
            _ => CnaLevel::Other,
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            CnaLevel::DeepDeletion => "DEEPDEL",
            CnaLevel::ShallowDeletion => "SHALLOWDEL",
            CnaLevel::Gain => "GAIN",
            CnaLevel::Amplification => "AMP",
            CnaLevel::Neutral | CnaLevel::Other => "",
        }
    }

    pub fn alteration_string(self) -> &'static str {
        match self {
            CnaLevel::Amplification => "Amplification",
            CnaLevel::DeepDeletion => "Deletion",
            _ => "Unknown",
        }
    }
}
