use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary: {0}")]
    VocabularyParse(#[from] serde_yaml::Error),

    #[error("invalid vocabulary: {0}")]
    Validation(String),
}
