/// Comment Mood - Chrome Extension that gauges the sentiment of a video's comments
/// Built with Rust + WASM + Yew

mod bridge;
pub mod comments;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod sentiment;
pub mod summary;
pub mod ui;
pub mod video_id;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the URL matcher for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url).map(|id| id.to_string())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
