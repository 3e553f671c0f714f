#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid data format: {0}")]
    Format(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Field violations carried by a [`CoreError::Validation`], empty for
    /// every other variant.
    pub fn violations(&self) -> &[String] {
        match self {
            CoreError::Validation(errors) => errors.as_slice(),
            _ => &[],
        }
    }
}
