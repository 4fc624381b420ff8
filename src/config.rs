
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where the contact form posts to. Rendered as the form's `action`.
pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

// Submission timing
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;
pub const ERROR_REVERT_MS: u32 = 3_000;

// Presentation timing
pub const OVERLAY_ACTIVATE_DELAY_MS: u32 = 10;
pub const FORM_HIGHLIGHT_MS: u32 = 1_500;
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const STICKY_HEADER_THRESHOLD: f64 = 50.0;

/// Programs a visitor can pick from the cards or the list selectors.
pub const PROGRAMS: &[(&str, &str)] = &[
    ("foundation", "Foundation"),
    ("performance", "Performance"),
    ("elite", "Elite Coaching"),
];
