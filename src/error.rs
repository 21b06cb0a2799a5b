use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaxDiffError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("data integrity violation in record {record}: {reason}")]
    DataIntegrity { record: usize, reason: String },
    #[error("no choice records supplied; nothing to score")]
    EmptyRecords,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl MaxDiffError {
    pub fn config(msg: impl Into<String>) -> Self {
        MaxDiffError::Configuration(msg.into())
    }

    pub fn integrity(record: usize, reason: impl Into<String>) -> Self {
        MaxDiffError::DataIntegrity {
            record,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegenerateInput {
    #[error("item '{label}' never appeared in any choice set; excluded from scoring")]
    ZeroAppearances { label: String },
    #[error("all scored items share net score {score:.3}; utilities set to midpoint 50")]
    AllTied { score: f64 },
}

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
