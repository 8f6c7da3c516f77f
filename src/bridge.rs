/// Thin wrappers over the extension APIs exposed by `popup.js`
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn loadBundledResource(path: &str) -> Result<JsValue, JsValue>;
}

/// The fields of `chrome.tabs.Tab` the popup reads
#[derive(Debug, Deserialize)]
struct ActiveTab {
    #[serde(default)]
    url: Option<String>,
}

/// URL of the active tab in the current window, if the popup may see it
pub async fn get_active_tab_url() -> Result<Option<String>, String> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| format!("Failed to query tabs: {:?}", e))?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Ok(None);
    }

    let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
        .map_err(|e| format!("Failed to parse tab: {:?}", e))?;
    Ok(tab.url)
}

/// Text content of a file packaged with the extension
pub async fn load_bundled_resource(path: &str) -> Result<String, String> {
    let text_js = loadBundledResource(path)
        .await
        .map_err(|e| format!("Failed to load {}: {:?}", path, e))?;

    text_js
        .as_string()
        .ok_or_else(|| format!("{} did not load as text", path))
}
