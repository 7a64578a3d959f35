use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_kind() {
        let v = ServiceError::from(ModelError::Validation("data must not be null".into()));
        assert!(matches!(v, ServiceError::Validation(ref m) if m == "data must not be null"));
        let d = ServiceError::from(ModelError::Db("connection refused".into()));
        assert_eq!(d.to_string(), "database error: connection refused");
    }
}
