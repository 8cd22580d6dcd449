use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Pending,
    Error,
    Complete,
}

impl SourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceStatus::Pending => "pending",
            SourceStatus::Error => "error",
            SourceStatus::Complete => "complete",
        }
    }
}

/// `Complete(None)` never counts as having data.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceResult<T> {
    Pending,
    Error(String),
    Complete(Option<T>),
}

impl<T> SourceResult<T> {
    pub fn status(&self) -> SourceStatus {
        match self {
            SourceResult::Pending => SourceStatus::Pending,
            SourceResult::Error(_) => SourceStatus::Error,
            SourceResult::Complete(_) => SourceStatus::Complete,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            SourceResult::Complete(Some(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SourceResult::Error(_))
    }
}

impl<T> Default for SourceResult<T> {
    fn default() -> Self {
        SourceResult::Pending
    }
}

pub fn combined_status(a: SourceStatus, b: SourceStatus) -> SourceStatus {
    if a == SourceStatus::Error || b == SourceStatus::Error {
        return SourceStatus::Error;
    }
    if a == SourceStatus::Complete && b == SourceStatus::Complete {
        return SourceStatus::Complete;
    }
    SourceStatus::Pending
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceWire<T> {
    pub status: SourceStatus,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Default for SourceWire<T> {
    fn default() -> Self {
        Self {
            status: SourceStatus::Pending,
            result: None,
            error: None,
        }
    }
}

impl<T> From<SourceWire<T>> for SourceResult<T> {
    fn from(wire: SourceWire<T>) -> Self {
        match wire.status {
            SourceStatus::Pending => SourceResult::Pending,
            SourceStatus::Error => {
                SourceResult::Error(wire.error.unwrap_or_else(|| "source failed".to_string()))
            }
            SourceStatus::Complete => SourceResult::Complete(wire.result),
        }
    }
}
