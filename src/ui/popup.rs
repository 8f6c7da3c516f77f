/// Popup UI for the comment sentiment extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::pipeline::{open_popup, Outcome, PopupReport, TabStatus};
use crate::ui::components::{CommentList, SentimentBoxes};

#[function_component(App)]
pub fn app() -> Html {
    let report = use_state(PopupReport::default);

    // Run the pipeline once on mount
    {
        let report = report.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                open_popup(move |current: &PopupReport| report.set(current.clone())).await;
            });
            || ()
        });
    }

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Comment Mood"}</h1>

            if let Some(err) = &report.fatal {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err.clone()}
                </Alert>
            }

            {view_tab(&report.tab)}

            {for report.status.iter().map(|line| html! {
                <p class="message-text">{line}</p>
            })}

            if !report.is_finished() {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }

            {match &report.outcome {
                Some(outcome) => view_outcome(outcome),
                None => html! {},
            }}

            <p class="footer-popup">
                {"Comment Mood v0.1.0"}
            </p>
        </div>
    }
}

fn view_tab(tab: &TabStatus) -> Html {
    match tab {
        TabStatus::Pending => html! {},
        TabStatus::NotWatchPage => html! {
            <p>{"This is not a valid YouTube URL."}</p>
        },
        TabStatus::Video(video) => html! {
            <div class="section">
                <div class="section-title">{"YouTube Video ID"}</div>
                <p>{video.to_string()}</p>
            </div>
        },
    }
}

fn view_outcome(outcome: &Outcome) -> Html {
    match outcome {
        Outcome::NoComments => html! {
            <p>{"No comments found for this video."}</p>
        },
        Outcome::FetchFailed(reason) => html! {
            <Alert r#type={AlertType::Warning} title={"Could not fetch comments"} inline={true}>
                {reason.clone()}
            </Alert>
        },
        Outcome::ClassificationFailed(reason) => html! {
            <Alert r#type={AlertType::Danger} title={"Error fetching sentiment predictions."} inline={true}>
                {reason.clone()}
            </Alert>
        },
        Outcome::Results { summary, preview, partial } => html! {
            <>
                if *partial {
                    <Alert r#type={AlertType::Warning} title={"Some comments could not be fetched; results cover the rest."} inline={true}>
                    </Alert>
                }
                <SentimentBoxes summary={summary.clone()} />
                <CommentList rows={preview.clone()} />
            </>
        },
    }
}
