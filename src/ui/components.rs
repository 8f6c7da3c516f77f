/// Result widgets for the popup

use yew::prelude::*;
use crate::pipeline::CommentRow;
use crate::sentiment::SentimentLabel;
use crate::summary::SentimentSummary;

/// "33.33%"
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn box_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "#4caf50",
        SentimentLabel::Neutral => "#9e9e9e",
        SentimentLabel::Negative => "#f44336",
    }
}

#[derive(Properties, PartialEq)]
pub struct SentimentBoxesProps {
    pub summary: SentimentSummary,
}

#[function_component(SentimentBoxes)]
pub fn sentiment_boxes(props: &SentimentBoxesProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="section">
            <div class="section-title">{"Sentiment Analysis Results"}</div>
            <div class="sentiment-boxes">
                {for SentimentLabel::ALL.iter().map(|label| html! {
                    <div class="sentiment-box" style={format!("border-top: 3px solid {};", box_color(*label))}>
                        <div class="label">{label.name()}</div>
                        <div class="percentage">{format_percent(summary.percent(*label))}</div>
                        <div class="count">{format!("{} of {}", summary.count(*label), summary.total)}</div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub rows: Vec<CommentRow>,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="section">
            <div class="section-title">{format!("Top {} Comments with Sentiments", props.rows.len())}</div>
            <ul class="comment-list">
                {for props.rows.iter().map(|row| html! {
                    <li class="comment-item">
                        <span>{format!("{}. {}", row.position, row.text)}</span>
                        <br />
                        <span class="comment-sentiment">{format!("Sentiment: {}", row.label)}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
