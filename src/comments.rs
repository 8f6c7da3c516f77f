/// Paginated retrieval of top-level comments from the commentThreads API
use crate::config::Config;
use crate::http::HttpClient;
use crate::video_id::VideoId;
use serde::Deserialize;
use url::Url;

/// Why pagination stopped
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEnd {
    /// The last page carried no continuation token
    Exhausted,
    LimitReached,
    /// A request or decode failed; comments fetched before it are kept
    Failed(String),
}

/// Comments in API order, never more than `Config::max_comments`
#[derive(Debug, Clone, PartialEq)]
pub struct CommentBatch {
    pub comments: Vec<String>,
    pub end: FetchEnd,
}

impl CommentBatch {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn failed(&self) -> bool {
        matches!(self.end, FetchEnd::Failed(_))
    }
}

// Response shape, reduced to the fields we read

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadPage {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: Option<ThreadSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: Option<TopLevelComment>,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: Option<CommentSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_original: Option<String>,
}

impl CommentThread {
    fn into_text(self) -> Option<String> {
        self.snippet?.top_level_comment?.snippet?.text_original
    }
}

/// Build the request URL for one page
fn page_url(config: &Config, video: &VideoId, page_token: Option<&str>) -> Url {
    let mut url = config.comments_api_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("part", "snippet")
            .append_pair("videoId", video.as_str())
            .append_pair("maxResults", &config.page_size.to_string());
        if let Some(token) = page_token {
            query.append_pair("pageToken", token);
        }
        query.append_pair("key", &config.api_key);
    }
    url
}

/// Fetch up to `config.max_comments` top-level comments for a video
///
/// Pages are requested one after another, each with the continuation token
/// of the previous page. The first failure ends pagination; whatever was
/// collected so far is returned with `FetchEnd::Failed`. Nothing is retried.
pub async fn fetch_comments<C: HttpClient>(client: &C, video: &VideoId, config: &Config) -> CommentBatch {
    let limit = config.max_comments;
    let mut comments: Vec<String> = Vec::new();
    let mut page_token: Option<String> = None;

    if limit == 0 {
        return CommentBatch {
            comments,
            end: FetchEnd::LimitReached,
        };
    }

    let end = loop {
        let url = page_url(config, video, page_token.as_deref());
        let page: CommentThreadPage = match client.get_json(url).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("Error fetching comments for {} after {} comments: {}", video, comments.len(), e);
                break FetchEnd::Failed(e.to_string());
            }
        };

        comments.extend(page.items.into_iter().filter_map(CommentThread::into_text));
        let truncated = comments.len() > limit;
        comments.truncate(limit);
        log::debug!("Fetched page for {}, {} comments so far", video, comments.len());

        match page.next_page_token.filter(|token| !token.is_empty()) {
            None if !truncated => break FetchEnd::Exhausted,
            _ if comments.len() >= limit => break FetchEnd::LimitReached,
            next => page_token = next,
        }
    };

    log::info!("Fetched {} comments for {} ({:?})", comments.len(), video, end);
    CommentBatch { comments, end }
}
