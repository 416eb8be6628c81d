use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentence segmentation failed: {0}")]
    Segmentation(String),

    #[error("scoring failed for sentence \"{sentence}\": {reason}")]
    Scoring { sentence: String, reason: String },
}
