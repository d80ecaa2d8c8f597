use thiserror::Error;

/// Errors surfaced by the strict layout entry points.
///
/// The lenient `build_layout` path never returns an error; these only come from
/// `try_build_layout`, `build_layout_json` and `CloudStyle::validate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CloudError {
    #[error("Score for '{label}' is not finite: {score}")]
    NonFiniteScore { label: String, score: f64 },

    #[error("Invalid cloud style: {0}")]
    InvalidStyle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for CloudError {
    fn from(e: serde_json::Error) -> Self {
        CloudError::InvalidInput(e.to_string())
    }
}
