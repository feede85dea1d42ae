
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const LEADS_PATH: &str = "/api/leads";
pub const GUIDE_PDF_PATH: &str = "/api/pdf/insurance-guide";
pub const GUIDE_PDF_FILENAME: &str = "Top-5-Life-Insurance-Strategies.pdf";

pub const INTRO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=5nYrq8m4Y2E";

/// Pause between picking an option and showing the next question, so the
/// selected state is visible before the view changes.
pub const QUIZ_ADVANCE_DELAY_MS: u32 = 800;

pub const TOAST_DISMISS_MS: u32 = 5_000;

pub fn leads_url() -> String {
    format!("{}{}", get_backend_url(), LEADS_PATH)
}

pub fn guide_pdf_url() -> String {
    format!("{}{}", get_backend_url(), GUIDE_PDF_PATH)
}
