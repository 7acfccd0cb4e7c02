use thiserror::Error;

/// Errors surfaced by the POI core. None of them are fatal: every failing
/// operation leaves the state exactly as it was before the call.
#[derive(Debug, Error)]
pub enum PoiError {
    /// Bulk import text was not a JSON array of valid zones
    #[error("Invalid JSON format: {0}")]
    MalformedImport(String),

    /// Create/edit form submitted without its required fields
    #[error("Please fill in all required fields (missing: {})", .missing.join(", "))]
    IncompleteFormInput { missing: Vec<&'static str> },

    /// A zone failed validation at the model boundary
    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Zone index {index} out of range (repository holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PoiResult<T> = Result<T, PoiError>;
