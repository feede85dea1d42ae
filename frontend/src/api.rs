use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement};

use crate::config;
use crate::error::LeadError;
use crate::quiz::lead::LeadSubmission;

pub async fn submit_lead(lead: &LeadSubmission) -> Result<(), LeadError> {
    let response = Request::post(&config::leads_url())
        .json(lead)?
        .send()
        .await?;

    if !response.ok() {
        warn!("Lead submission rejected with status {}", response.status());
        return Err(LeadError::Status(response.status()));
    }

    // The body is informational only.
    match response.json::<serde_json::Value>().await {
        Ok(body) => gloo_console::log!("Lead accepted:", body.to_string()),
        Err(_) => gloo_console::log!("Lead accepted"),
    }
    Ok(())
}

/// Starts a browser download of the guide PDF through a temporary link.
pub fn download_guide() -> Result<(), LeadError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| LeadError::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| LeadError::Download("no body".to_string()))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| LeadError::Download(format!("{:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| LeadError::Download("not an anchor".to_string()))?;
    anchor.set_href(&config::guide_pdf_url());
    anchor.set_download(config::GUIDE_PDF_FILENAME);

    body.append_child(&anchor)
        .map_err(|e| LeadError::Download(format!("{:?}", e)))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    info!("Started download of {}", config::GUIDE_PDF_FILENAME);
    Ok(())
}
