/// Client for the remote sentiment classifier
use crate::config::Config;
use crate::error::ClassificationError;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome for one comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order used by the popup
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Classifier wire codes: 1 positive, 0 neutral, 2 negative
    pub fn from_code(code: &str) -> Option<SentimentLabel> {
        match code.trim() {
            "1" => Some(SentimentLabel::Positive),
            "0" => Some(SentimentLabel::Neutral),
            "2" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "1",
            SentimentLabel::Neutral => "0",
            SentimentLabel::Negative => "2",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    comments: &'a [String],
}

#[derive(Debug, Deserialize)]
struct Prediction {
    sentiment: SentimentCode,
}

/// Some classifier builds return the code as a string, others as a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SentimentCode {
    Text(String),
    Number(i64),
}

impl SentimentCode {
    fn into_label(self) -> Result<SentimentLabel, ClassificationError> {
        let code = match self {
            SentimentCode::Text(text) => text,
            SentimentCode::Number(n) => n.to_string(),
        };
        SentimentLabel::from_code(&code).ok_or(ClassificationError::UnknownLabel(code))
    }
}

/// Classify the whole batch in a single request
///
/// The response must line up one-to-one with `comments`. Large batches are
/// not chunked.
pub async fn classify<C: HttpClient>(
    client: &C,
    comments: &[String],
    config: &Config,
) -> Result<Vec<SentimentLabel>, ClassificationError> {
    let result = request_labels(client, comments, config).await;
    match &result {
        Ok(labels) => log::info!("Classified {} comments", labels.len()),
        Err(e) => log::error!("Error fetching predictions: {}", e),
    }
    result
}

async fn request_labels<C: HttpClient>(
    client: &C,
    comments: &[String],
    config: &Config,
) -> Result<Vec<SentimentLabel>, ClassificationError> {
    let body = ClassifyRequest { comments };
    let predictions: Vec<Prediction> = client.post_json(config.api_url.clone(), &body).await?;

    if predictions.len() != comments.len() {
        return Err(ClassificationError::LengthMismatch {
            expected: comments.len(),
            actual: predictions.len(),
        });
    }

    predictions
        .into_iter()
        .map(|prediction| prediction.sentiment.into_label())
        .collect()
}
