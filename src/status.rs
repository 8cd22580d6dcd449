use crate::model::source::SourceStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Loading,
    Error,
    Na,
}

impl CellStatus {
    pub fn text(self) -> &'static str {
        match self {
            CellStatus::Loading => "LOADING",
            CellStatus::Error => "ERROR",
            CellStatus::Na => "NA",
        }
    }

    pub fn default_alt(self) -> &'static str {
        match self {
            CellStatus::Loading => "Querying server for data.",
            CellStatus::Error => "Error retrieving data.",
            CellStatus::Na => "Data not available.",
        }
    }

    /// Placeholder for a source cell; `None` means the data itself is shown.
    pub fn for_source(status: SourceStatus, has_data: bool) -> Option<Self> {
        match status {
            SourceStatus::Pending => Some(CellStatus::Loading),
            SourceStatus::Error => Some(CellStatus::Error),
            SourceStatus::Complete if has_data => None,
            SourceStatus::Complete => Some(CellStatus::Na),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CellStatusIndicator {
    pub loading_alt: Option<String>,
    pub error_alt: Option<String>,
    pub na_alt: Option<String>,
}

impl CellStatusIndicator {
    pub fn alt(&self, status: CellStatus) -> &str {
        let custom = match status {
            CellStatus::Loading => self.loading_alt.as_deref(),
            CellStatus::Error => self.error_alt.as_deref(),
            CellStatus::Na => self.na_alt.as_deref(),
        };
        custom.unwrap_or(status.default_alt())
    }

    pub fn label(&self, status: CellStatus) -> String {
        format!("{} ({})", status.text(), self.alt(status))
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/status.rs"]
mod tests;
