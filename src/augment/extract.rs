//! Pull a JSON array out of free-form model output

use serde_json::Value;
use tracing::warn;

const FENCE: &str = "```";
const FENCE_LANG: &str = "json";

/// Extract the first-`[`-to-last-`]` span of `text` and parse it as a JSON array
///
/// Markdown code fences are stripped first. Returns None when there is no
/// bracketed span or it does not parse as an array.
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    if text.is_empty() {
        return None;
    }

    let without_fences = strip_fences(text);
    let cleaned = without_fences.trim();

    let start = cleaned.find('[')?;
    let end = cleaned.rfind(']')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Vec<Value>>(&cleaned[start..=end]) {
        Ok(items) => Some(items),
        Err(e) => {
            warn!(error = %e, "model output is not a JSON array");
            None
        }
    }
}

/// Remove every ```` ``` ```` fence, along with a `json` language tag in any case
fn strip_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        if rest
            .get(..FENCE_LANG.len())
            .is_some_and(|tag| tag.eq_ignore_ascii_case(FENCE_LANG))
        {
            rest = &rest[FENCE_LANG.len()..];
        }
    }
    out.push_str(rest);
    out
}
