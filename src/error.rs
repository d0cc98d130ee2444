use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{source_name} source unavailable: {message}")]
    SourceUnavailable {
        source_name: String,
        message: String,
    },

    #[error("suppression store unavailable: {message}")]
    StoreUnavailable { message: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unavailable_names_the_source() {
        let err = CoreError::SourceUnavailable {
            source_name: "notices".into(),
            message: "503 from api".into(),
        };
        assert_eq!(err.to_string(), "notices source unavailable: 503 from api");
    }

    #[test]
    fn store_unavailable_carries_the_message() {
        let err = CoreError::StoreUnavailable {
            message: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "suppression store unavailable: quota exceeded"
        );
    }
}
