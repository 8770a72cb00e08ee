use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomObjectError {
    #[error("The custom resource is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Expected {expected} at `{path}` but found {found}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to serialize the sink defaults: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("The merged custom object could not be converted to a dynamic object: {0}")]
    Object(#[source] serde_json::Error),
}

impl CustomObjectError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CustomObjectError::Decode(_))
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, CustomObjectError::Shape { .. })
    }
}
