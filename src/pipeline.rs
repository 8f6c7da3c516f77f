/// The popup's fetch → classify → summarize sequence
///
/// Every step awaits the previous one. After each whole-section change the
/// current `PopupReport` is handed to `publish`, which is how the UI redraws.
use crate::bridge;
use crate::comments::{CommentBatch, FetchEnd, fetch_comments};
use crate::config::{self, Config};
use crate::http::{BrowserClient, HttpClient};
use crate::sentiment::{SentimentLabel, classify};
use crate::summary::{SentimentSummary, summarize};
use crate::video_id::{VideoId, extract_video_id};

pub const FETCHING_STATUS: &str = "Fetching comments...";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TabStatus {
    #[default]
    Pending,
    NotWatchPage,
    Video(VideoId),
}

/// One line of the comment preview, numbered from 1
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow {
    pub position: usize,
    pub text: String,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NoComments,
    /// Nothing could be fetched
    FetchFailed(String),
    ClassificationFailed(String),
    Results {
        summary: SentimentSummary,
        preview: Vec<CommentRow>,
        /// Pagination failed part way; the summary covers what was fetched
        partial: bool,
    },
}

/// Everything the popup shows, built up as the pipeline advances
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupReport {
    pub tab: TabStatus,
    pub status: Vec<String>,
    pub outcome: Option<Outcome>,
    /// Config or tab lookup failed; nothing else ran
    pub fatal: Option<String>,
}

impl PopupReport {
    pub fn is_finished(&self) -> bool {
        self.fatal.is_some() || self.outcome.is_some() || self.tab == TabStatus::NotWatchPage
    }
}

/// Run the whole popup flow against the live browser
pub async fn open_popup(mut publish: impl FnMut(&PopupReport)) -> PopupReport {
    let mut report = PopupReport::default();

    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            report.fatal = Some(e.to_string());
            publish(&report);
            return report;
        }
    };

    let tab_url = match bridge::get_active_tab_url().await {
        Ok(url) => url,
        Err(e) => {
            log::error!("{}", e);
            report.fatal = Some(e);
            publish(&report);
            return report;
        }
    };

    let client = BrowserClient::new();
    analyze(&client, &config, tab_url.as_deref(), publish).await
}

/// Analyze the comments of the video open at `tab_url`
pub async fn analyze<C: HttpClient>(
    client: &C,
    config: &Config,
    tab_url: Option<&str>,
    mut publish: impl FnMut(&PopupReport),
) -> PopupReport {
    let mut report = PopupReport::default();

    let Some(video) = tab_url.and_then(extract_video_id) else {
        report.tab = TabStatus::NotWatchPage;
        publish(&report);
        return report;
    };

    report.tab = TabStatus::Video(video.clone());
    report.status.push(FETCHING_STATUS.to_string());
    publish(&report);

    let batch = fetch_comments(client, &video, config).await;
    if batch.is_empty() {
        report.outcome = Some(match batch.end {
            FetchEnd::Failed(reason) => Outcome::FetchFailed(reason),
            FetchEnd::Exhausted | FetchEnd::LimitReached => Outcome::NoComments,
        });
        publish(&report);
        return report;
    }

    report.status.push(format!(
        "Fetched {} comments. Sending for sentiment analysis...",
        batch.len()
    ));
    publish(&report);

    report.outcome = Some(match classify(client, &batch.comments, config).await {
        Ok(labels) => results(&batch, &labels, config.preview_limit),
        Err(e) => Outcome::ClassificationFailed(e.to_string()),
    });
    publish(&report);
    report
}

fn results(batch: &CommentBatch, labels: &[SentimentLabel], preview_limit: usize) -> Outcome {
    let preview = batch
        .comments
        .iter()
        .zip(labels)
        .take(preview_limit)
        .enumerate()
        .map(|(i, (text, label))| CommentRow {
            position: i + 1,
            text: text.clone(),
            label: *label,
        })
        .collect();

    Outcome::Results {
        summary: summarize(labels),
        preview,
        partial: batch.failed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::testing::MockClient;
    use futures::executor::block_on;
    use serde_json::{Value, json};

    const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn test_config() -> Config {
        Config::from_json(r#"{ "API_KEY": "k", "API_URL": "http://localhost:8000/predict" }"#).unwrap()
    }

    fn page(texts: &[&str], next_page_token: Option<&str>) -> Value {
        let items: Vec<Value> = texts
            .iter()
            .map(|text| json!({ "snippet": { "topLevelComment": { "snippet": { "textOriginal": text } } } }))
            .collect();
        match next_page_token {
            Some(token) => json!({ "items": items, "nextPageToken": token }),
            None => json!({ "items": items }),
        }
    }

    fn run(client: &MockClient, config: &Config, url: Option<&str>) -> (PopupReport, Vec<PopupReport>) {
        let mut published = Vec::new();
        let report = block_on(analyze(client, config, url, |r: &PopupReport| published.push(r.clone())));
        (report, published)
    }

    #[test]
    fn test_not_a_watch_page() {
        let client = MockClient::new();

        let (report, published) = run(&client, &test_config(), Some("https://example.com/"));

        assert_eq!(report.tab, TabStatus::NotWatchPage);
        assert!(report.outcome.is_none());
        assert!(report.is_finished());
        assert_eq!(published.len(), 1);
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_no_tab_url() {
        let (report, _) = run(&MockClient::new(), &test_config(), None);
        assert_eq!(report.tab, TabStatus::NotWatchPage);
    }

    #[test]
    fn test_end_to_end_results() {
        let client = MockClient::new()
            .respond(page(&["love it", "hate it"], Some("T2")))
            .respond(page(&["fine"], None))
            .respond(json!([{ "sentiment": "1" }, { "sentiment": "2" }, { "sentiment": "0" }]));

        let (report, published) = run(&client, &test_config(), Some(WATCH_URL));

        assert_eq!(report.tab, TabStatus::Video(extract_video_id(WATCH_URL).unwrap()));
        assert_eq!(report.status[0], FETCHING_STATUS);
        assert_eq!(report.status[1], "Fetched 3 comments. Sending for sentiment analysis...");

        let Some(Outcome::Results { summary, preview, partial }) = report.outcome.clone() else {
            panic!("expected results, got {:?}", report.outcome);
        };
        assert!(!partial);
        for label in SentimentLabel::ALL {
            assert_eq!(summary.percent(label), 33.33);
        }
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0], CommentRow { position: 1, text: "love it".to_string(), label: SentimentLabel::Positive });
        assert_eq!(preview[2].label, SentimentLabel::Neutral);

        // video + fetching, fetched count, final results
        assert_eq!(published.len(), 3);
        assert_eq!(published.last(), Some(&report));
    }

    #[test]
    fn test_preview_is_capped() {
        let texts: Vec<String> = (0..30).map(|i| format!("comment {}", i)).collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let predictions: Vec<Value> = (0..30).map(|_| json!({ "sentiment": "0" })).collect();
        let client = MockClient::new()
            .respond(page(&text_refs, None))
            .respond(Value::Array(predictions));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        let Some(Outcome::Results { summary, preview, .. }) = report.outcome else {
            panic!("expected results");
        };
        assert_eq!(summary.total, 30);
        assert_eq!(preview.len(), 25);
        assert_eq!(preview[24].position, 25);
        assert_eq!(preview[24].text, "comment 24");
    }

    #[test]
    fn test_no_comments() {
        let client = MockClient::new().respond(json!({ "items": [] }));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        assert_eq!(report.outcome, Some(Outcome::NoComments));
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn test_fetch_failed_before_any_comments() {
        let client = MockClient::new().fail(HttpError::Status(403));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        assert!(matches!(report.outcome, Some(Outcome::FetchFailed(_))));
    }

    #[test]
    fn test_partial_fetch_still_classified() {
        let client = MockClient::new()
            .respond(page(&["a"], Some("T2")))
            .fail(HttpError::Transport("reset".to_string()))
            .respond(json!([{ "sentiment": "1" }]));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        let Some(Outcome::Results { summary, partial, .. }) = report.outcome else {
            panic!("expected results");
        };
        assert!(partial);
        assert_eq!(summary.percent(SentimentLabel::Positive), 100.0);
    }

    #[test]
    fn test_classification_malformed_json() {
        let client = MockClient::new()
            .respond(page(&["a", "b"], None))
            .respond(json!("<html>502 Bad Gateway</html>"));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        assert!(matches!(report.outcome, Some(Outcome::ClassificationFailed(_))));
    }

    #[test]
    fn test_classification_timeout() {
        let client = MockClient::new()
            .respond(page(&["a"], None))
            .fail(HttpError::Transport("operation timed out".to_string()));

        let (report, _) = run(&client, &test_config(), Some(WATCH_URL));

        assert_eq!(
            report.outcome,
            Some(Outcome::ClassificationFailed("Request failed: operation timed out".to_string()))
        );
    }
}
