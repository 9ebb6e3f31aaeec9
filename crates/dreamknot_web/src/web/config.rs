use dreamknot::config::SiteConfig;

use super::dom;
use crate::dom_contract::CONFIG_SCRIPT_ID;

/// Reads the page's inline JSON config. Missing or invalid config falls back
/// to the defaults.
pub(super) fn load_site_config(doc: &web_sys::Document) -> SiteConfig {
    let Some(script) = dom::by_id_as::<web_sys::HtmlScriptElement>(doc, CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let raw = script.text().unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; report straight to the console.
            web_sys::console::warn_1(&format!("dreamknot: ignoring page config: {e}").into());
            SiteConfig::default()
        }
    }
}
