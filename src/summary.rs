/// Sentiment tallies and percentages
use crate::sentiment::SentimentLabel;

/// Per-label counts over a batch, with percentages rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// `count / total * 100` rounded to two decimals; 0.0 when there is nothing to count
    pub fn percent(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.count(label) as f64 / self.total as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }
}

/// Count labels and derive percentages
pub fn summarize(labels: &[SentimentLabel]) -> SentimentSummary {
    labels
        .iter()
        .fold(SentimentSummary::default(), |mut summary, label| {
            match label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
                SentimentLabel::Negative => summary.negative += 1,
            }
            summary.total += 1;
            summary
        })
}
