//! Normalizes and checks typed image locators.

use url::Url;

use crate::error::ValidationError;

/// Trims `raw` and strips any no-break spaces pasted along with it.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace('\u{00A0}', "")
}

/// Whether `s` parses as an absolute `http` or `https` URL.
pub fn is_http_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Normalizes `raw`, then checks that it's something we can display.
///
/// The returned string is the normalized input, not the URL's serialization.
/// That keeps the locator exactly as the user typed it.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    let locator = normalize(raw);

    if locator.is_empty() {
        return Err(ValidationError::EmptyLocator);
    }

    if !is_http_url(&locator) {
        return Err(ValidationError::MalformedLocator(locator));
    }

    Ok(locator)
}
