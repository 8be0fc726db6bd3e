use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("invalid story config: {0}")]
    InvalidStoryConfig(#[from] serde_json::Error),

    #[error("invalid chapter `{chapter}` in story config: {source}")]
    InvalidChapter {
        chapter: String,
        source: serde_json::Error,
    },

    #[error("invalid trigger map: {0}")]
    InvalidTriggerMap(serde_json::Error),

    #[error("failed to serialize output: {0}")]
    Output(serde_json::Error),
}
