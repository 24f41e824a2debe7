//! Locates and parses the flight-data JSON embedded in the booking page.
//!
//! The page is HTML with the search result inlined as a JSON object inside a
//! `<script>` block, HTML-entity-escaped. Extraction is best-effort against
//! an uncontrolled third-party format: every failure mode degrades to `None`,
//! which callers treat exactly like "zero qualifying fares".

use regex::Regex;

/// Marker substring that distinguishes the flight-data script from the other
/// inline scripts on the page. Undocumented but stable across observed
/// responses.
const FARE_DATA_MARKER: &str = "journeys";

/// Scan the response body for the embedded flight-data object.
///
/// Scripts without the marker are skipped; a script whose delimited object
/// fails to parse is skipped too, rather than aborting the scan. Returns
/// `None` when no script yields parseable data.
#[must_use]
pub fn extract_flight_data(body: &str) -> Option<serde_json::Value> {
    let script_re = Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>").expect("valid regex");

    for cap in script_re.captures_iter(body) {
        let content = match cap.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };
        if content.is_empty() || !content.contains(FARE_DATA_MARKER) {
            continue;
        }

        let decoded = decode_entities(content);
        let Some(object) = delimit_json_object(&decoded) else {
            continue;
        };

        match serde_json::from_str::<serde_json::Value>(object) {
            Ok(data) => return Some(data),
            Err(e) => {
                tracing::debug!(error = %e, "candidate script did not parse as JSON; continuing");
            }
        }
    }

    None
}

/// Returns the substring spanning the first balanced `{...}` object in `text`.
///
/// Counts brace depth from the first `{` until it returns to zero. This is
/// intentionally NOT string-literal aware: the source data is not known to
/// contain literal braces inside string values, and the tolerance for
/// arbitrary non-JSON script text around the object is the point — a strict
/// parse-from-start would reject every candidate script.
pub(crate) fn delimit_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: i32 = 0;
    for (i, c) in text[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Decodes the HTML entities the booking page uses to escape the embedded
/// JSON. The page emits only this fixed set; `&amp;` is decoded last so
/// double-escaped sequences resolve the same way a full entity decoder would.
pub(crate) fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
